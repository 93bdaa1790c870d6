use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scatter_core::{build_scene, AxisSelection, ChartConfig, Dataset, Record, ScatterChart};

fn build_dataset(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| {
            let smokes = 10.0 + (i as f64 * 0.37).sin().abs() * 15.0;
            let age = 30.0 + (i as f64 * 0.11).cos().abs() * 12.0;
            Record::new(format!("State {i}"), format!("S{i}"), smokes, age)
        })
        .collect();
    Dataset::new(records).expect("bench records are valid")
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_scene");
    let config = ChartConfig::default();
    for &n in &[51usize, 5_000usize] {
        let ds = build_dataset(n);
        group.bench_function(format!("records_{n}"), |b| {
            b.iter(|| black_box(build_scene(&ds, AxisSelection::default(), &config)));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut config = ChartConfig::default();
    config.draw_labels = false;
    let chart = ScatterChart::new(build_dataset(51), config).expect("bench chart");
    c.bench_function("render_png_bytes/records_51", |b| {
        b.iter(|| -> Result<()> {
            black_box(chart.render_to_png_bytes()?);
            Ok(())
        });
    });
    c.bench_function("render_svg/records_51", |b| {
        b.iter(|| black_box(chart.to_svg_string()));
    });
}

criterion_group!(benches, bench_scene, bench_render);
criterion_main!(benches);

// File: crates/scatter-cli/src/main.rs
// Summary: Loads the health CSV and renders the scatter plot (PNG/SVG) or prints its scales.

use anyhow::{Context, Result};
use clap::Parser;
use scatter_core::{AxisSelection, ChartConfig, Dataset, ScatterChart};
use std::path::{Path, PathBuf};
use tracing::{error, info};

mod cli;
mod logging;

use cli::{ChartArgs, Cli, Commands, Format, RenderArgs};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let outcome = match &cli.command {
        Commands::Render(args) => render(args),
        Commands::Scales(args) => scales(args),
    };
    if let Err(err) = outcome {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn render(args: &RenderArgs) -> Result<()> {
    let chart = load_chart(&args.chart)?;
    let format = args.resolved_format();
    let out = match &args.out {
        Some(p) => p.clone(),
        None => default_out(&chart, format),
    };
    let written = match format {
        Format::Png => chart.render_to_png(&out),
        Format::Svg => chart.render_to_svg(&out),
    };
    written.with_context(|| format!("failed to write '{}'", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn scales(args: &ChartArgs) -> Result<()> {
    let chart = load_chart(args)?;
    let scene = chart.scene();
    for axis in [&scene.x_axis, &scene.y_axis] {
        let s = &axis.scale;
        println!(
            "{:?} axis: {:<7} domain [{:.4}, {:.4}] -> range [{:.2}, {:.2}]",
            axis.side, axis.field.to_string(), s.domain.0, s.domain.1, s.range.0, s.range.1
        );
    }
    for (m, rec) in scene.markers.iter().zip(chart.dataset().records()) {
        println!(
            "{:<3} {:<22} {}={:<6} {}={:<6} -> ({:.2}, {:.2})",
            rec.abbr, rec.state, scene.selection.x, rec.value(scene.selection.x),
            scene.selection.y, rec.value(scene.selection.y), m.cx, m.cy
        );
    }
    Ok(())
}

fn load_chart(args: &ChartArgs) -> Result<ScatterChart> {
    let mut config = match &args.config {
        Some(path) => ChartConfig::from_path(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }

    let (path, used_alt) = resolve_path(&args.input)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }
    let dataset = Dataset::from_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(records = dataset.len(), "loaded dataset");

    Ok(ScatterChart::with_selection(dataset, config, AxisSelection::new(args.x, args.y))?)
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Output file name like target/out/scatter_<x>_<y>.<ext>
fn default_out(chart: &ScatterChart, format: Format) -> PathBuf {
    let sel = chart.selection();
    PathBuf::from("target/out").join(format!("scatter_{}_{}.{}", sel.x, sel.y, format.extension()))
}

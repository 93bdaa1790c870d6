// File: crates/scatter-core/tests/props.rs
// Purpose: Property tests for the scale/scene invariants over arbitrary non-empty datasets.

use proptest::prelude::*;
use scatter_core::{build_scene, AxisSelection, ChartConfig, Dataset, Field, Record};

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 1..40).prop_map(|pairs| {
        let records = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (s, a))| Record::new(format!("S{i}"), format!("{i}"), s, a))
            .collect();
        Dataset::new(records).expect("generated values are valid")
    })
}

fn field() -> impl Strategy<Value = Field> {
    prop::sample::select(Field::ALL.to_vec())
}

proptest! {
    #[test]
    fn domains_are_padded_extents(ds in dataset(), x in field(), y in field()) {
        let scene = build_scene(&ds, AxisSelection::new(x, y), &ChartConfig::default()).unwrap();
        let (xmin, xmax) = ds.extent(x);
        let (ymin, ymax) = ds.extent(y);
        prop_assert_eq!(scene.x_axis.scale.domain, (xmin * 0.8, xmax * 1.2));
        prop_assert_eq!(scene.y_axis.scale.domain, (ymin * 0.95, ymax * 1.05));
    }

    #[test]
    fn markers_land_inside_plot(ds in dataset(), x in field(), y in field()) {
        let scene = build_scene(&ds, AxisSelection::new(x, y), &ChartConfig::default()).unwrap();
        let eps = 1e-9;
        for m in &scene.markers {
            prop_assert!(m.cx >= -eps && m.cx <= scene.plot_width + eps);
            prop_assert!(m.cy >= -eps && m.cy <= scene.plot_height + eps);
        }
    }

    #[test]
    fn rebuild_is_deterministic(ds in dataset(), x in field(), y in field()) {
        let config = ChartConfig::default();
        let a = build_scene(&ds, AxisSelection::new(x, y), &config).unwrap();
        let b = build_scene(&ds, AxisSelection::new(x, y), &config).unwrap();
        prop_assert_eq!(a, b);
    }
}

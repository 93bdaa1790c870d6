// File: crates/scatter-core/tests/config.rs
// Purpose: Default configuration values and TOML overrides.

use scatter_core::{build_scene, AxisSelection, ChartConfig, ChartError, Dataset, Padding, Record};

#[test]
fn defaults_match_canvas_and_marker_style() {
    let c = ChartConfig::default();
    assert_eq!((c.width, c.height), (825, 500));
    assert_eq!((c.insets.left, c.insets.right, c.insets.top, c.insets.bottom), (20, 40, 20, 80));
    assert_eq!((c.plot_width(), c.plot_height()), (765.0, 400.0));
    assert_eq!(c.marker_radius, 15.0);
    assert_eq!(c.x_padding, Padding::X);
    assert_eq!(c.y_padding, Padding::Y);
    assert_eq!(c.tooltip_offset, [80.0, -100.0]);
    assert_eq!(c.theme().name, "light");
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let c = ChartConfig::from_toml_str(
        r#"
        width = 1000
        theme = "dark"
        x_padding = [0.9, 1.1]

        [insets]
        left = 60
        "#,
    )
    .expect("parse");
    assert_eq!(c.width, 1000);
    assert_eq!(c.height, 500);
    assert_eq!(c.insets.left, 60);
    assert_eq!(c.insets.bottom, 80);
    assert_eq!(c.x_padding, Padding::new(0.9, 1.1));
    assert_eq!(c.theme().name, "dark");
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(matches!(ChartConfig::from_toml_str("colour = \"red\""), Err(ChartError::Config(_))));
}

#[test]
fn unknown_theme_falls_back_to_light() {
    let c = ChartConfig::from_toml_str("theme = \"sepia\"").expect("parse");
    assert_eq!(c.theme().name, "light");
}

#[test]
fn unusable_values_are_rejected_on_load() {
    for (toml, key) in [
        ("x_padding = [nan, 1.2]", "x_padding"),
        ("y_padding = [0.95, inf]", "y_padding"),
        ("marker_radius = -3.0", "marker_radius"),
        ("marker_radius = nan", "marker_radius"),
        ("marker_opacity = 1.5", "marker_opacity"),
        ("tick_font_size = 0.0", "tick_font_size"),
        ("tick_count = 10000000000", "tick_count"),
        ("width = 0", "width/height"),
    ] {
        match ChartConfig::from_toml_str(toml) {
            Err(ChartError::InvalidConfig { key: got, .. }) => assert_eq!(got, key, "{toml}"),
            other => panic!("{toml}: expected InvalidConfig, got {other:?}"),
        }
    }
}

#[test]
fn programmatic_configs_are_checked_when_building_a_scene() {
    let ds = Dataset::new(vec![Record::new("A", "A1", 10.0, 30.0)]).expect("records");
    let mut config = ChartConfig::default();
    config.marker_radius = f64::NAN;
    assert!(matches!(
        build_scene(&ds, AxisSelection::default(), &config),
        Err(ChartError::InvalidConfig { key: "marker_radius", .. })
    ));
    assert!(ChartConfig::default().validate().is_ok());
}

// File: crates/scatter-core/tests/scales.rs
// Purpose: Linear scale mapping, padded domains and tick generation.

use scatter_core::grid::{format_tick, tick_step, ticks};
use scatter_core::scale::{padded_domain, LinearScale, Padding};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn padded_domains_match_axis_margins() {
    assert_eq!(padded_domain((10.0, 20.0), Padding::X), (8.0, 24.0));
    let (lo, hi) = padded_domain((30.0, 40.0), Padding::Y);
    assert!(close(lo, 28.5) && close(hi, 42.0), "got {lo}..{hi}");
}

#[test]
fn maps_domain_ends_onto_range_ends() {
    let s = LinearScale::new((8.0, 24.0), (0.0, 765.0));
    assert!(close(s.map(8.0), 0.0));
    assert!(close(s.map(24.0), 765.0));
    assert!(close(s.map(10.0), 95.625));
}

#[test]
fn inverted_range_puts_low_values_at_bottom() {
    let s = LinearScale::new((28.5, 42.0), (400.0, 0.0));
    assert!(close(s.map(28.5), 400.0));
    assert!(close(s.map(42.0), 0.0));
    assert!(s.map(30.0) > s.map(40.0));
}

#[test]
fn invert_round_trips_a_pixel() {
    let s = LinearScale::new((8.0, 24.0), (0.0, 765.0));
    assert!(close(s.invert(s.map(17.3)), 17.3));
}

#[test]
fn zero_width_domain_maps_to_range_midpoint() {
    let s = LinearScale::new((0.0, 0.0), (0.0, 400.0));
    assert!(close(s.map(0.0), 200.0));
    assert!(close(s.map(123.0), 200.0));
}

#[test]
fn clamp_keeps_output_inside_range() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    assert!(close(s.map(20.0), 200.0));
    let s = s.with_clamp(true);
    assert!(close(s.map(20.0), 100.0));
    assert!(close(s.map(-5.0), 0.0));
}

#[test]
fn ticks_use_round_steps() {
    let t = ticks(8.0, 24.0, 10);
    assert_eq!(t, vec![8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0]);
    assert_eq!(tick_step(8.0, 24.0, 10), 2.0);

    let t = ticks(28.5, 42.0, 10);
    assert_eq!(t.first().copied(), Some(29.0));
    assert_eq!(t.last().copied(), Some(42.0));
    assert_eq!(t.len(), 14);
}

#[test]
fn ticks_follow_direction_and_handle_degenerate_input() {
    assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    assert_eq!(ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
    assert!(ticks(f64::NAN, 1.0, 10).is_empty());
}

#[test]
fn fractional_ticks_come_out_clean() {
    let t = ticks(0.0, 1.0, 10);
    assert_eq!(t.len(), 11);
    assert_eq!(t[3], 0.3);
}

#[test]
fn tick_labels_drop_needless_decimals() {
    assert_eq!(format_tick(24.0, 2.0), "24");
    assert_eq!(format_tick(37.5, 0.5), "37.5");
}

#[test]
fn subnormal_span_yields_no_ticks_instead_of_overflowing() {
    assert!(ticks(0.0, 1e-310 * 1.2, 10).is_empty());
    assert!(ticks(1e-310 * 1.2, 0.0, 10).is_empty());
}

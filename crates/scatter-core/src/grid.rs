// File: crates/scatter-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1-2-5 steps) and tick label formatting.

/// Upper bound on generated ticks, as a multiple of the requested count.
const MAX_TICKS_PER_COUNT: usize = 10;

fn step_factor(raw_step: f64) -> (f64, f64) {
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    (power, factor)
}

/// Size of the 1/2/5 x 10^k step that splits `[start, stop]` into roughly `count` intervals.
/// Returns 0.0 for degenerate input.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let span = (stop - start).abs();
    if count == 0 || !span.is_finite() || span == 0.0 {
        return 0.0;
    }
    let (power, factor) = step_factor(span / count as f64);
    factor * 10f64.powf(power)
}

/// Round tick values covering `[start, stop]`, in the same direction as the input.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (power, factor) = step_factor((hi - lo) / count as f64);

    // Negative powers are handled as a divisor so 0.1-steps come out as 0.3, not 0.30000000000000004.
    let (inv, inc) = if power < 0.0 {
        (10f64.powf(-power) / factor, None)
    } else {
        (0.0, Some(10f64.powf(power) * factor))
    };
    let (i1, i2) = match inc {
        None => ((lo * inv).ceil(), (hi * inv).floor()),
        Some(inc) => ((lo / inc).ceil(), (hi / inc).floor()),
    };
    // Subnormal spans overflow the step; no usable ticks then.
    if !i1.is_finite() || !i2.is_finite() || i2 - i1 > count.saturating_mul(MAX_TICKS_PER_COUNT) as f64 {
        return Vec::new();
    }
    let (i1, i2) = (i1 as i64, i2 as i64);
    let mut out: Vec<f64> = match inc {
        None => (i1..=i2).map(|i| i as f64 / inv).collect(),
        Some(inc) => (i1..=i2).map(|i| i as f64 * inc).collect(),
    };
    if reverse {
        out.reverse();
    }
    out
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    format!("{value:.decimals$}")
}

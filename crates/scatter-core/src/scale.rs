// File: crates/scatter-core/src/scale.rs
// Summary: Linear scale (data domain -> pixel range) and the padded-domain rule used by both axes.

use serde::Deserialize;

use crate::data::{Dataset, Field};
use crate::grid;

/// Data value on an axis (e.g. smoking percentage).
pub type Value = f64;

/// Continuous linear map from a data domain onto a pixel range.
///
/// The range may be inverted (`range.0 > range.1`), which is how the Y axis puts
/// small values at the bottom of the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f64, f64),
    pub clamp: bool,
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { domain, range, clamp: false }
    }

    /// Clamp mapped output to the range ends.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Map a domain value to pixels. A zero-width domain maps everything to the range midpoint.
    #[inline]
    pub fn map(&self, v: Value) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let mut t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        r0 + t * (r1 - r0)
    }

    /// Map pixels back to a domain value.
    #[inline]
    pub fn invert(&self, px: f64) -> Value {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let mut t = if span == 0.0 { 0.5 } else { (px - r0) / span };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        d0 + t * (d1 - d0)
    }

    /// Round tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn tick_step(&self, count: usize) -> f64 {
        grid::tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Multiplicative margin applied to a field's extent: domain = `[min * lo, max * hi]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Padding {
    pub lo: f64,
    pub hi: f64,
}

impl Padding {
    /// Horizontal axis margin.
    pub const X: Padding = Padding { lo: 0.8, hi: 1.2 };
    /// Vertical axis margin.
    pub const Y: Padding = Padding { lo: 0.95, hi: 1.05 };

    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }
}

impl From<[f64; 2]> for Padding {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self { lo, hi }
    }
}

pub fn padded_domain((min, max): (Value, Value), padding: Padding) -> (Value, Value) {
    (min * padding.lo, max * padding.hi)
}

/// Scale for `field` over `dataset`, padded and mapped onto `range`.
pub fn scale_for(dataset: &Dataset, field: Field, padding: Padding, range: (f64, f64)) -> LinearScale {
    LinearScale::new(padded_domain(dataset.extent(field), padding), range)
}

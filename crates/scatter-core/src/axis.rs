// File: crates/scatter-core/src/axis.rs
// Summary: Axis selection state and the per-axis model (field, scale, ticks).

use crate::data::Field;
use crate::grid::format_tick;
use crate::scale::LinearScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisSide {
    /// Horizontal axis drawn under the plot.
    Bottom,
    /// Vertical axis drawn on the plot's left edge.
    Left,
}

/// Which record field each axis shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisSelection {
    pub x: Field,
    pub y: Field,
}

impl Default for AxisSelection {
    fn default() -> Self {
        Self { x: Field::Smokes, y: Field::Age }
    }
}

impl AxisSelection {
    pub fn new(x: Field, y: Field) -> Self {
        Self { x, y }
    }

    pub fn field(&self, side: AxisSide) -> Field {
        match side {
            AxisSide::Bottom => self.x,
            AxisSide::Left => self.y,
        }
    }

    /// Bind `field` to `side`. Returns true when the selection changed.
    pub fn select(&mut self, side: AxisSide, field: Field) -> bool {
        let slot = match side {
            AxisSide::Bottom => &mut self.x,
            AxisSide::Left => &mut self.y,
        };
        let changed = *slot != field;
        *slot = field;
        changed
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Position along the axis in plot-local pixels.
    pub px: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub side: AxisSide,
    pub field: Field,
    pub scale: LinearScale,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(side: AxisSide, field: Field, scale: LinearScale, tick_count: usize) -> Self {
        let step = scale.tick_step(tick_count);
        let ticks = scale
            .ticks(tick_count)
            .into_iter()
            .map(|value| Tick { value, px: scale.map(value), label: format_tick(value, step) })
            .collect();
        Self { side, field, scale, ticks }
    }
}

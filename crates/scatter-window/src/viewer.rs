// File: crates/scatter-window/src/viewer.rs
// Summary: Window-independent viewer state: hover tracking, axis switching and frame conversion.

use scatter_core::{AxisSide, ChartError, Field, HoverEvent, HoverTracker, ScatterChart};
use tracing::debug;

pub struct Viewer {
    chart: ScatterChart,
    hover: HoverTracker,
}

impl Viewer {
    pub fn new(chart: ScatterChart) -> Self {
        Self { chart, hover: HoverTracker::new() }
    }

    pub fn chart(&self) -> &ScatterChart {
        &self.chart
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hover.current()
    }

    /// Whether canvas point (`x`, `y`) is over a clickable axis title.
    pub fn over_title(&self, x: f64, y: f64) -> bool {
        self.chart.scene().axis_title_at(x, y).is_some()
    }

    /// Returns true when the frame needs redrawing.
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        let events = self.hover.pointer_moved(self.chart.scene(), x, y);
        self.log(&events);
        !events.is_empty()
    }

    pub fn pointer_left(&mut self) -> bool {
        let event = self.hover.pointer_left();
        self.log(event.as_slice());
        event.is_some()
    }

    /// Left click at canvas point (`x`, `y`).
    pub fn click(&mut self, x: f64, y: f64) -> Result<bool, ChartError> {
        let changed = self.chart.handle_click(x, y)?;
        if changed {
            self.after_rescale(x, y);
        }
        Ok(changed)
    }

    /// Move `side` on to the next field.
    pub fn cycle_axis(&mut self, side: AxisSide, cursor: Option<(f64, f64)>) -> Result<bool, ChartError> {
        let current = self.chart.selection().field(side);
        let pos = Field::ALL.iter().position(|f| *f == current).unwrap_or(0);
        let next = Field::ALL[(pos + 1) % Field::ALL.len()];
        let changed = self.chart.select_axis(side, next)?;
        if changed {
            if let Some((x, y)) = cursor {
                self.after_rescale(x, y);
            } else {
                self.hover.pointer_left();
            }
        }
        Ok(changed)
    }

    /// Markers moved under a stationary pointer; re-evaluate what it is over.
    fn after_rescale(&mut self, x: f64, y: f64) {
        self.hover.pointer_left();
        self.pointer_moved(x, y);
    }

    /// Render the current frame as 0RGB words for softbuffer.
    pub fn frame(&self) -> anyhow::Result<(Vec<u32>, u32, u32)> {
        let (rgba, w, h, _) = self.chart.render_to_rgba8(self.hover.current())?;
        Ok((rgba_to_0rgb(&rgba), w as u32, h as u32))
    }

    fn log(&self, events: &[HoverEvent]) {
        for event in events {
            match *event {
                HoverEvent::Enter(i) => {
                    if let Some(rec) = self.chart.dataset().get(i) {
                        debug!(state = %rec.state, "tooltip shown");
                    }
                }
                HoverEvent::Leave(i) => debug!(index = i, "tooltip hidden"),
            }
        }
    }
}

pub fn rgba_to_0rgb(rgba: &[u8]) -> Vec<u32> {
    rgba.chunks_exact(4)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scatter_core::{ChartConfig, Dataset, Record};

    fn viewer() -> Viewer {
        let ds = Dataset::new(vec![
            Record::new("A", "A1", 10.0, 30.0),
            Record::new("B", "B1", 20.0, 40.0),
        ])
        .expect("records");
        Viewer::new(ScatterChart::new(ds, ChartConfig::default()).expect("chart"))
    }

    fn marker_canvas(v: &Viewer, index: usize) -> (f64, f64) {
        let scene = v.chart().scene();
        let m = &scene.markers[index];
        scene.to_canvas(m.cx, m.cy)
    }

    #[test]
    fn hover_requests_redraw_only_on_transitions() {
        let mut v = viewer();
        let (x, y) = marker_canvas(&v, 1);
        assert!(v.pointer_moved(x, y));
        assert_eq!(v.hovered(), Some(1));
        assert!(!v.pointer_moved(x + 1.0, y));
        assert!(v.pointer_left());
        assert!(!v.pointer_left());
    }

    #[test]
    fn cycling_the_x_axis_switches_field_and_clears_stale_hover() {
        let mut v = viewer();
        let (x, y) = marker_canvas(&v, 0);
        v.pointer_moved(x, y);
        assert!(v.cycle_axis(AxisSide::Bottom, None).expect("cycle"));
        assert_eq!(v.chart().selection().x, Field::Age);
        assert_eq!(v.hovered(), None);
        assert!(v.cycle_axis(AxisSide::Bottom, None).expect("cycle"));
        assert_eq!(v.chart().selection().x, Field::Smokes);
    }

    #[test]
    fn clicking_a_title_rescales() {
        let mut v = viewer();
        let title = v
            .chart()
            .scene()
            .titles
            .iter()
            .find(|t| t.side == AxisSide::Left && t.field == Field::Smokes)
            .cloned()
            .expect("title");
        let (x, y) = v.chart().scene().to_canvas(title.x - 4.0, title.y);
        assert!(v.over_title(x, y));
        assert!(v.click(x, y).expect("click"));
        assert_eq!(v.chart().selection().y, Field::Smokes);
    }

    #[test]
    fn packs_rgba_into_0rgb_words() {
        assert_eq!(rgba_to_0rgb(&[0x12, 0x34, 0x56, 0xff, 1, 2, 3, 0]), vec![0x123456, 0x010203]);
    }
}

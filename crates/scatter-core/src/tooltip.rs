// File: crates/scatter-core/src/tooltip.rs
// Summary: Tooltip payload/layout for a hovered marker and the pointer enter/leave tracker.

use crate::axis::AxisSelection;
use crate::data::{Field, Record};
use crate::geometry::{approx_text_width, RectF};
use crate::scene::Scene;

const PAD: f64 = 8.0;
const RULE_GAP: f64 = 6.0;
const LINE_HEIGHT: f64 = 1.4;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub field: Field,
    pub value: f64,
}

impl TooltipLine {
    pub fn text(&self) -> String {
        format!("{}: {}", self.field.tooltip_label(), self.value)
    }
}

/// What a tooltip says: the state's name, then the X and Y values.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

impl Tooltip {
    pub fn for_record(record: &Record, selection: &AxisSelection) -> Self {
        let lines = [selection.x, selection.y]
            .into_iter()
            .map(|field| TooltipLine { field, value: record.value(field) })
            .collect();
        Self { title: record.state.clone(), lines }
    }

    /// Plain-text form: title, then one line per value.
    pub fn text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.text());
        }
        out
    }

    /// Position and row geometry for drawing, in canvas pixels.
    ///
    /// The box sits centered above the marker (`anchor_x`, `marker_top`), is shifted by
    /// `offset = [down, right]`, then nudged back inside `canvas`.
    pub fn layout(&self, anchor_x: f64, marker_top: f64, offset: [f64; 2], font_size: f64, canvas: &RectF) -> TooltipLayout {
        let line_h = font_size * LINE_HEIGHT;
        let texts = self.lines.iter().map(TooltipLine::text).collect::<Vec<_>>();
        let text_w = texts
            .iter()
            .map(|t| approx_text_width(t, font_size))
            .fold(approx_text_width(&self.title, font_size) * 1.1, f64::max);
        let width = text_w + PAD * 2.0;
        let height = PAD * 2.0 + line_h * (1 + texts.len()) as f64 + RULE_GAP;

        let [down, right] = offset;
        let bounds = RectF::from_ltwh(anchor_x - width * 0.5 + right, marker_top - height + down, width, height)
            .keep_inside(canvas);

        let x = bounds.left + PAD;
        let title_baseline = bounds.top + PAD + font_size;
        let rule_y = bounds.top + PAD + line_h + RULE_GAP * 0.5;
        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| (x, rule_y + RULE_GAP * 0.5 + font_size + line_h * i as f64, text))
            .collect();
        TooltipLayout { bounds, title: (x, title_baseline), rule_y, lines }
    }
}

/// Tooltip geometry in canvas pixels; text positions are left baselines.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLayout {
    pub bounds: RectF,
    pub title: (f64, f64),
    pub rule_y: f64,
    pub lines: Vec<(f64, f64, String)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer entered the marker with this record index.
    Enter(usize),
    /// Pointer left the marker with this record index.
    Leave(usize),
}

/// Turns raw pointer positions into marker enter/leave transitions.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Feed the marker under the pointer (if any). Emits `Leave` before `Enter` when
    /// moving directly from one marker to another.
    pub fn update(&mut self, hit: Option<usize>) -> Vec<HoverEvent> {
        if hit == self.current {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(prev) = self.current {
            events.push(HoverEvent::Leave(prev));
        }
        if let Some(next) = hit {
            events.push(HoverEvent::Enter(next));
        }
        self.current = hit;
        events
    }

    /// Pointer moved to canvas point (`x`, `y`).
    pub fn pointer_moved(&mut self, scene: &Scene, x: f64, y: f64) -> Vec<HoverEvent> {
        self.update(scene.marker_at(x, y))
    }

    /// Pointer left the drawing surface.
    pub fn pointer_left(&mut self) -> Option<HoverEvent> {
        self.current.take().map(HoverEvent::Leave)
    }
}

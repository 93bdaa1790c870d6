// File: crates/scatter-core/src/scene.rs
// Summary: Pure transform (dataset, axis selection, config) -> drawable scatter scene, plus hit testing.

use tracing::debug;

use crate::axis::{Axis, AxisSelection, AxisSide};
use crate::config::ChartConfig;
use crate::data::{Dataset, Field};
use crate::error::{ChartError, Result};
use crate::geometry::{approx_text_width, RectF};
use crate::scale::scale_for;
use crate::tooltip::{Tooltip, TooltipLayout};
use crate::types::Insets;

/// Distance from the plot's bottom edge to the first X title baseline.
const X_TITLE_OFFSET: f64 = 36.0;
/// Distance from the plot's left edge to the first Y title baseline.
const Y_TITLE_OFFSET: f64 = 16.0;
const TITLE_SPACING: f64 = 18.0;
/// Baseline shift that centers a line of text vertically, as a fraction of font size.
const CENTER_DY: f64 = 0.35;

/// One circle per record. Coordinates are plot-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub tooltip: Tooltip,
}

impl Marker {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (dx, dy) = (x - self.cx, y - self.cy);
        dx * dx + dy * dy <= self.r * self.r
    }
}

/// Abbreviation drawn centered on its marker; (`x`, `y`) is the middle-anchored baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerLabel {
    pub index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Clickable axis title. The active one names the field currently on that axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTitle {
    pub side: AxisSide,
    pub field: Field,
    pub text: &'static str,
    pub active: bool,
    /// Middle-anchored baseline point; Left titles are rotated -90 degrees around it.
    pub x: f64,
    pub y: f64,
    pub bounds: RectF,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub plot_width: f64,
    pub plot_height: f64,
    pub selection: AxisSelection,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub markers: Vec<Marker>,
    pub labels: Vec<MarkerLabel>,
    pub titles: Vec<AxisTitle>,
}

/// Build the complete scene. Re-run on every selection change.
pub fn build_scene(dataset: &Dataset, selection: AxisSelection, config: &ChartConfig) -> Result<Scene> {
    config.validate()?;
    let (plot_width, plot_height) = (config.plot_width(), config.plot_height());
    if plot_width <= 0.0 || plot_height <= 0.0 {
        return Err(ChartError::Render(format!(
            "margins leave no plot area in a {}x{} canvas",
            config.width, config.height
        )));
    }

    let x_scale = scale_for(dataset, selection.x, config.x_padding, (0.0, plot_width)).with_clamp(config.clamp);
    // Inverted range: small values at the bottom.
    let y_scale = scale_for(dataset, selection.y, config.y_padding, (plot_height, 0.0)).with_clamp(config.clamp);

    let label_dy = config.label_font_size as f64 * CENTER_DY;
    let mut markers = Vec::with_capacity(dataset.len());
    let mut labels = Vec::with_capacity(dataset.len());
    for (index, rec) in dataset.records().iter().enumerate() {
        let cx = x_scale.map(rec.value(selection.x));
        let cy = y_scale.map(rec.value(selection.y));
        markers.push(Marker {
            index,
            cx,
            cy,
            r: config.marker_radius,
            tooltip: Tooltip::for_record(rec, &selection),
        });
        labels.push(MarkerLabel { index, text: rec.abbr.clone(), x: cx, y: cy + label_dy });
    }

    let titles = axis_titles(&selection, plot_width, plot_height, config.title_font_size as f64);

    debug!(
        x = %selection.x,
        y = %selection.y,
        x_domain = ?x_scale.domain,
        y_domain = ?y_scale.domain,
        markers = markers.len(),
        "built scene"
    );

    Ok(Scene {
        width: config.width,
        height: config.height,
        insets: config.insets,
        plot_width,
        plot_height,
        selection,
        x_axis: Axis::new(AxisSide::Bottom, selection.x, x_scale, config.tick_count),
        y_axis: Axis::new(AxisSide::Left, selection.y, y_scale, config.tick_count),
        markers,
        labels,
        titles,
    })
}

fn axis_titles(selection: &AxisSelection, plot_w: f64, plot_h: f64, font: f64) -> Vec<AxisTitle> {
    let mut out = Vec::with_capacity(Field::ALL.len() * 2);
    for (i, field) in Field::ALL.into_iter().enumerate() {
        let text = field.label();
        let w = approx_text_width(text, font);
        let shift = TITLE_SPACING * i as f64;

        let (x, y) = (plot_w * 0.5, plot_h + X_TITLE_OFFSET + shift);
        out.push(AxisTitle {
            side: AxisSide::Bottom,
            field,
            text,
            active: selection.x == field,
            x,
            y,
            bounds: RectF::from_ltrb(x - w * 0.5, y - font, x + w * 0.5, y + font * 0.3),
        });

        let (x, y) = (Y_TITLE_OFFSET + shift, plot_h * 0.5);
        out.push(AxisTitle {
            side: AxisSide::Left,
            field,
            text,
            active: selection.y == field,
            x,
            y,
            bounds: RectF::from_ltrb(x - font, y - w * 0.5, x + font * 0.3, y + w * 0.5),
        });
    }
    out
}

impl Scene {
    /// Canvas point -> plot-local point.
    pub fn to_plot(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.insets.left as f64, y - self.insets.top as f64)
    }

    /// Plot-local point -> canvas point.
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.insets.left as f64, y + self.insets.top as f64)
    }

    pub fn canvas_rect(&self) -> RectF {
        RectF::from_ltwh(0.0, 0.0, self.width as f64, self.height as f64)
    }

    pub fn plot_rect(&self) -> RectF {
        RectF::from_ltwh(0.0, 0.0, self.plot_width, self.plot_height)
    }

    pub fn marker(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }

    /// Topmost (last drawn) marker under canvas point (`x`, `y`).
    pub fn marker_at(&self, x: f64, y: f64) -> Option<usize> {
        let (px, py) = self.to_plot(x, y);
        self.markers.iter().rev().find(|m| m.contains(px, py)).map(|m| m.index)
    }

    /// Axis title under canvas point (`x`, `y`).
    pub fn axis_title_at(&self, x: f64, y: f64) -> Option<(AxisSide, Field)> {
        let (px, py) = self.to_plot(x, y);
        self.titles
            .iter()
            .find(|t| t.bounds.contains(px, py))
            .map(|t| (t.side, t.field))
    }

    /// Where to draw the tooltip for marker `index`, in canvas pixels.
    pub fn tooltip_layout(&self, index: usize, config: &ChartConfig) -> Option<TooltipLayout> {
        let m = self.marker(index)?;
        let (ax, ay) = self.to_canvas(m.cx, m.cy - m.r);
        Some(m.tooltip.layout(
            ax,
            ay,
            config.tooltip_offset,
            config.tooltip_font_size as f64,
            &self.canvas_rect(),
        ))
    }
}

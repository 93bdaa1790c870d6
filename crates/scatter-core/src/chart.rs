// File: crates/scatter-core/src/chart.rs
// Summary: ScatterChart (dataset + config + axis selection) and headless Skia rendering to PNG/RGBA.

use anyhow::Result;
use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::{AxisSelection, AxisSide};
use crate::config::ChartConfig;
use crate::data::{Dataset, Field};
use crate::error::ChartError;
use crate::scene::{build_scene, Scene};
use crate::svg;
use crate::text::TextShaper;
use crate::theme::Theme;

const TICK_LEN: f32 = 6.0;
const TICK_PAD: f32 = 3.0;

/// Interactive scatter chart: owns the data and re-derives its scene whenever the
/// axis selection changes.
pub struct ScatterChart {
    dataset: Dataset,
    config: ChartConfig,
    scene: Scene,
}

impl ScatterChart {
    pub fn new(dataset: Dataset, config: ChartConfig) -> Result<Self, ChartError> {
        Self::with_selection(dataset, config, AxisSelection::default())
    }

    pub fn with_selection(dataset: Dataset, config: ChartConfig, selection: AxisSelection) -> Result<Self, ChartError> {
        let scene = build_scene(&dataset, selection, &config)?;
        Ok(Self { dataset, config, scene })
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn selection(&self) -> AxisSelection { self.scene.selection }

    /// Bind `field` to `side`, rebuilding the scene when the selection actually changes.
    pub fn select_axis(&mut self, side: AxisSide, field: Field) -> Result<bool, ChartError> {
        let mut selection = self.scene.selection;
        if !selection.select(side, field) {
            return Ok(false);
        }
        self.scene = build_scene(&self.dataset, selection, &self.config)?;
        debug!(?side, %field, "axis selection changed");
        Ok(true)
    }

    /// Click at canvas point (`x`, `y`); selects the axis title under it, if any.
    pub fn handle_click(&mut self, x: f64, y: f64) -> Result<bool, ChartError> {
        match self.scene.axis_title_at(x, y) {
            Some((side, field)) => self.select_axis(side, field),
            None => Ok(false),
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        info!(path = %path.display(), "wrote png");
        Ok(())
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.raster(None)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to straight RGBA8 pixels; returns `(pixels, width, height, row_bytes)`.
    /// `hovered` draws that marker's tooltip on top.
    pub fn render_to_rgba8(&self, hovered: Option<usize>) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (self.config.width, self.config.height);
        let mut surface = self.raster(hovered)?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    /// SVG document for the current scene; hover tooltips are embedded per marker.
    pub fn to_svg_string(&self) -> String {
        svg::render_svg(&self.scene, &self.config)
    }

    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg_string())?;
        info!(path = %path.display(), "wrote svg");
        Ok(())
    }

    fn raster(&self, hovered: Option<usize>) -> Result<skia::Surface> {
        let (w, h) = (self.config.width, self.config.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let theme = self.config.theme();
        let shaper = self.config.draw_labels.then(TextShaper::new);
        let canvas = surface.canvas();

        canvas.clear(theme.background.to_skia());
        canvas.save();
        canvas.translate((self.scene.insets.left as f32, self.scene.insets.top as f32));
        draw_grid(canvas, &self.scene, &theme);
        draw_axes(canvas, &self.scene, &self.config, &theme, shaper.as_ref());
        draw_markers(canvas, &self.scene, &self.config, &theme, shaper.as_ref());
        canvas.restore();

        if let (Some(index), Some(shaper)) = (hovered, shaper.as_ref()) {
            draw_tooltip(canvas, &self.scene, index, &self.config, &theme, shaper);
        }
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------
// All plot-space helpers draw in plot-local coordinates (canvas already translated).

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, scene: &Scene, theme: &Theme) {
    let paint = stroke(theme.grid.to_skia(), 1.0);
    let (w, h) = (scene.plot_width as f32, scene.plot_height as f32);
    for t in &scene.x_axis.ticks {
        canvas.draw_line((t.px as f32, 0.0), (t.px as f32, h), &paint);
    }
    for t in &scene.y_axis.ticks {
        canvas.draw_line((0.0, t.px as f32), (w, t.px as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, scene: &Scene, config: &ChartConfig, theme: &Theme, shaper: Option<&TextShaper>) {
    let axis_paint = stroke(theme.axis_line.to_skia(), 1.0);
    let (w, h) = (scene.plot_width as f32, scene.plot_height as f32);

    canvas.draw_line((0.0, h), (w, h), &axis_paint);
    canvas.draw_line((0.0, 0.0), (0.0, h), &axis_paint);
    for t in &scene.x_axis.ticks {
        canvas.draw_line((t.px as f32, h), (t.px as f32, h + TICK_LEN), &axis_paint);
    }
    for t in &scene.y_axis.ticks {
        canvas.draw_line((-TICK_LEN, t.px as f32), (0.0, t.px as f32), &axis_paint);
    }

    let Some(shaper) = shaper else { return };
    let size = config.tick_font_size;
    let tick_color = theme.tick.to_skia();
    for t in &scene.x_axis.ticks {
        shaper.draw_centered(canvas, &t.label, t.px as f32, h + TICK_LEN + TICK_PAD + size, size, tick_color, false);
    }
    for t in &scene.y_axis.ticks {
        shaper.draw_right(canvas, &t.label, -(TICK_LEN + TICK_PAD), t.px as f32 + size * 0.35, size, tick_color);
    }

    let title_size = config.title_font_size;
    for title in &scene.titles {
        let color = (if title.active { theme.axis_title } else { theme.axis_title_inactive }).to_skia();
        match title.side {
            AxisSide::Bottom => shaper.draw_centered(canvas, title.text, title.x as f32, title.y as f32, title_size, color, title.active),
            AxisSide::Left => shaper.draw_vertical(canvas, title.text, title.x as f32, title.y as f32, title_size, color, title.active),
        }
    }
}

fn draw_markers(canvas: &skia::Canvas, scene: &Scene, config: &ChartConfig, theme: &Theme, shaper: Option<&TextShaper>) {
    let paint = fill(theme.marker_fill.with_opacity(config.marker_opacity).to_skia());
    for m in &scene.markers {
        canvas.draw_circle((m.cx as f32, m.cy as f32), m.r as f32, &paint);
    }

    let Some(shaper) = shaper else { return };
    let color = theme.marker_label.to_skia();
    for l in &scene.labels {
        shaper.draw_centered(canvas, &l.text, l.x as f32, l.y as f32, config.label_font_size, color, false);
    }
}

fn draw_tooltip(canvas: &skia::Canvas, scene: &Scene, index: usize, config: &ChartConfig, theme: &Theme, shaper: &TextShaper) {
    let Some(layout) = scene.tooltip_layout(index, config) else { return };
    let Some(marker) = scene.marker(index) else { return };
    let b = layout.bounds;
    let rect = skia::Rect::from_ltrb(b.left as f32, b.top as f32, b.right as f32, b.bottom as f32);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill(theme.tooltip_background.to_skia()));

    let size = config.tooltip_font_size;
    let text = theme.tooltip_text.to_skia();
    let (tx, ty) = layout.title;
    shaper.draw_left(canvas, &marker.tooltip.title, tx as f32, ty as f32, size, text, true);
    canvas.draw_line(
        (b.left as f32 + 4.0, layout.rule_y as f32),
        (b.right as f32 - 4.0, layout.rule_y as f32),
        &stroke(theme.tooltip_rule.to_skia(), 1.0),
    );
    for (x, y, line) in &layout.lines {
        shaper.draw_left(canvas, line, *x as f32, *y as f32, size, text, false);
    }
}

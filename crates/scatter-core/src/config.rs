// File: crates/scatter-core/src/config.rs
// Summary: Immutable chart configuration (canvas, margins, marker style, padding), loadable from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::scale::Padding;
use crate::theme::{self, Theme};
use crate::types::{Insets, HEIGHT, WIDTH};

/// Largest accepted `tick_count`.
pub const MAX_TICK_COUNT: usize = 100;

/// Everything the renderer needs besides data and axis selection.
///
/// Missing keys in a TOML file fall back to [`ChartConfig::default`]; unknown keys are an error.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub marker_radius: f64,
    pub marker_opacity: f32,
    pub label_font_size: f32,
    pub tick_font_size: f32,
    pub title_font_size: f32,
    pub tooltip_font_size: f32,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    pub x_padding: Padding,
    pub y_padding: Padding,
    /// `[down, right]` shift of the tooltip from its default spot above the marker.
    pub tooltip_offset: [f64; 2],
    pub theme: String,
    /// Draw abbreviation labels on markers and text elsewhere (off for pixel snapshots).
    pub draw_labels: bool,
    /// Clamp marker positions to the plot area.
    pub clamp: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            marker_radius: 15.0,
            marker_opacity: 0.5,
            label_font_size: 10.0,
            tick_font_size: 10.0,
            title_font_size: 14.0,
            tooltip_font_size: 12.0,
            tick_count: 10,
            x_padding: Padding::X,
            y_padding: Padding::Y,
            tooltip_offset: [80.0, -100.0],
            theme: "light".to_string(),
            draw_labels: true,
            clamp: false,
        }
    }
}

impl ChartConfig {
    /// Parse and validate.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make geometry non-finite or tick generation unbounded.
    pub fn validate(&self) -> Result<()> {
        let invalid = |key: &'static str, reason: &'static str| -> Result<()> {
            Err(ChartError::InvalidConfig { key, reason })
        };
        if self.width <= 0 || self.height <= 0 {
            return invalid("width/height", "must be positive");
        }
        for (key, v) in [("x_padding", self.x_padding), ("y_padding", self.y_padding)] {
            if !(positive(v.lo) && positive(v.hi)) {
                return invalid(key, "factors must be finite and positive");
            }
        }
        if !positive(self.marker_radius) {
            return invalid("marker_radius", "must be finite and positive");
        }
        if !(0.0..=1.0).contains(&self.marker_opacity) {
            return invalid("marker_opacity", "must be within 0..=1");
        }
        let fonts = [
            ("label_font_size", self.label_font_size),
            ("tick_font_size", self.tick_font_size),
            ("title_font_size", self.title_font_size),
            ("tooltip_font_size", self.tooltip_font_size),
        ];
        for (key, size) in fonts {
            if !positive(size as f64) {
                return invalid(key, "must be finite and positive");
            }
        }
        if self.tick_count > MAX_TICK_COUNT {
            return invalid("tick_count", "must be at most 100");
        }
        if !self.tooltip_offset.iter().all(|v| v.is_finite()) {
            return invalid("tooltip_offset", "must be finite");
        }
        Ok(())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    pub fn plot_width(&self) -> f64 {
        self.width as f64 - self.insets.hsum() as f64
    }

    pub fn plot_height(&self) -> f64 {
        self.height as f64 - self.insets.vsum() as f64
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

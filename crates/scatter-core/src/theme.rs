// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for scatter rendering colors.

use tracing::warn;

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub tick: Rgba,
    pub axis_title: Rgba,
    pub axis_title_inactive: Rgba,
    pub marker_fill: Rgba,
    pub marker_label: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_text: Rgba,
    pub tooltip_rule: Rgba,
}

impl Theme {
    /// White page, pink markers with white abbreviations.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            grid: Rgba::rgb(236, 236, 240),
            axis_line: Rgba::rgb(0, 0, 0),
            tick: Rgba::rgb(40, 40, 40),
            axis_title: Rgba::rgb(0, 0, 0),
            axis_title_inactive: Rgba::rgb(170, 170, 170),
            marker_fill: Rgba::PINK,
            marker_label: Rgba::WHITE,
            tooltip_background: Rgba::rgba(0, 0, 0, 204),
            tooltip_text: Rgba::WHITE,
            tooltip_rule: Rgba::rgb(200, 200, 200),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            tick: Rgba::rgb(150, 150, 160),
            axis_title: Rgba::rgb(235, 235, 245),
            axis_title_inactive: Rgba::rgb(110, 110, 120),
            marker_fill: Rgba::rgb(255, 105, 180),
            marker_label: Rgba::WHITE,
            tooltip_background: Rgba::rgba(235, 235, 245, 230),
            tooltip_text: Rgba::rgb(18, 18, 20),
            tooltip_rule: Rgba::rgb(110, 110, 120),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::BLACK,
            grid: Rgba::rgb(0x22, 0x22, 0x22),
            axis_line: Rgba::WHITE,
            tick: Rgba::rgb(0xcc, 0xcc, 0xcc),
            axis_title: Rgba::WHITE,
            axis_title_inactive: Rgba::rgb(0x88, 0x88, 0x88),
            marker_fill: Rgba::rgb(0xff, 0x00, 0xff),
            marker_label: Rgba::WHITE,
            tooltip_background: Rgba::WHITE,
            tooltip_text: Rgba::BLACK,
            tooltip_rule: Rgba::BLACK,
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(|| {
            warn!(theme = name, "unknown theme, using light");
            Theme::light()
        })
}

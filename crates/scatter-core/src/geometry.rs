// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for hit testing in pixel space.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::from_ltwh(cx - width * 0.5, cy - height * 0.5, width, height)
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Edges inclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::from_ltrb(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Shift (without resizing) so the rect lies inside `bounds` where it fits.
    pub fn keep_inside(&self, bounds: &RectF) -> Self {
        let dx = if self.right > bounds.right { bounds.right - self.right } else { 0.0 };
        let dy = if self.bottom > bounds.bottom { bounds.bottom - self.bottom } else { 0.0 };
        let moved = self.translate(dx, dy);
        let dx = if moved.left < bounds.left { bounds.left - moved.left } else { 0.0 };
        let dy = if moved.top < bounds.top { bounds.top - moved.top } else { 0.0 };
        moved.translate(dx, dy)
    }
}

/// Average glyph advance as a fraction of font size, for layout that must not depend on a font backend.
pub const APPROX_GLYPH_WIDTH: f64 = 0.6;

/// Rough rendered width of `text` at `font_size`.
pub fn approx_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * APPROX_GLYPH_WIDTH
}

use crate::foundation::error::{BorderlineError, BorderlineResult};

pub use kurbo::{Point, Rect, Vec2};

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> BorderlineResult<Self> {
        if width == 0 || height == 0 {
            return Err(BorderlineError::validation(
                "viewport width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Rectangle the projection is fitted into: the viewport inset by `padding` on every side.
    ///
    /// Padding is clamped so the extent never inverts on small viewports.
    pub fn fit_extent(self, padding: f64) -> Rect {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let max_pad = (w.min(h) / 2.0).max(0.0);
        let pad = if padding.is_finite() {
            padding.clamp(0.0, max_pad)
        } else {
            0.0
        };
        Rect::new(pad, pad, w - pad, h - pad)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale alpha by `opacity` (clamped to 0..1).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            a: ((f32::from(self.a) * o) + 0.5) as u8,
            ..self
        }
    }
}

pub(crate) fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

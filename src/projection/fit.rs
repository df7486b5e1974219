use crate::foundation::core::{Point, Rect, Vec2, is_finite_point};
use crate::geo::feature::LonLat;
use crate::projection::select::ProjectionKind;

/// A projection with scale and translation fitted to a screen rectangle.
///
/// [`FittedProjection::project`] is pure: the same input always yields the same output for a
/// given instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FittedProjection {
    kind: ProjectionKind,
    scale: f64,
    translate: Vec2,
}

impl FittedProjection {
    pub fn new(kind: ProjectionKind, scale: f64, translate: Vec2) -> Self {
        Self {
            kind,
            scale,
            translate,
        }
    }

    /// Fit `kind` so every projectable position lands inside `extent`, preserving aspect ratio
    /// and centering the result.
    ///
    /// Degenerate input (no positions, a single point, a zero-area extent) falls back to unit
    /// scale, centered in the extent, so projected coordinates stay finite.
    pub fn fit(
        kind: ProjectionKind,
        positions: impl IntoIterator<Item = LonLat>,
        extent: Rect,
    ) -> Self {
        let mut bounds: Option<Rect> = None;
        for p in positions {
            let Some(q) = kind.project_unit(p) else {
                continue;
            };
            bounds = Some(match bounds {
                Some(b) => b.union_pt(q),
                None => Rect::from_points(q, q),
            });
        }

        let center = extent.center();
        let Some(b) = bounds else {
            return Self::new(kind, 1.0, center.to_vec2());
        };

        let kx = extent.width() / b.width();
        let ky = extent.height() / b.height();
        let mut k = kx.min(ky);
        if !k.is_finite() || k <= 0.0 {
            k = 1.0;
        }

        let translate = Vec2::new(
            extent.x0 + (extent.width() - k * (b.x0 + b.x1)) / 2.0,
            extent.y0 + (extent.height() - k * (b.y0 + b.y1)) / 2.0,
        );
        Self::new(kind, k, translate)
    }

    pub fn kind(&self) -> ProjectionKind {
        self.kind
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Screen-space image of `p`, or `None` when `p` has no finite image.
    pub fn project(&self, p: LonLat) -> Option<Point> {
        let q = self.kind.project_unit(p)?;
        let out = Point::new(
            q.x * self.scale + self.translate.x,
            q.y * self.scale + self.translate.y,
        );
        is_finite_point(out).then_some(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/fit.rs"]
mod tests;

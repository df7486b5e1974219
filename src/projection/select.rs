use crate::foundation::core::{Point, Viewport, is_finite_point};
use crate::foundation::math::wrap_longitude;
use crate::geo::bounds::GeoBounds;
use crate::geo::feature::{Feature, FeatureIdentity, LonLat};
use crate::projection::composite::CompositeUsa;
use crate::projection::fit::FittedProjection;
use crate::projection::raw::equal_earth;

const SPLIT_TERRITORY_CODES: &[&str] = &["USA", "US"];
const SPLIT_TERRITORY_NAMES: &[&str] = &["united states", "united states of america"];
const DATELINE_CODES: &[&str] = &["RUS", "RU"];
const DATELINE_NAMES: &[&str] = &["russia", "russian federation"];

/// Projection chosen for a feature.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Equal Earth, central meridian at Greenwich.
    EqualEarth,
    /// Equal Earth with the given central meridian (degrees).
    RotatedEqualEarth { central_meridian: f64 },
    /// Conic equal-area composite with Alaska and Hawaii inset next to the lower 48.
    CompositeUsa,
}

impl ProjectionKind {
    /// Project at unit scale with no translation, y pointing down. `None` when the position
    /// has no image under this projection.
    pub(crate) fn project_unit(&self, p: LonLat) -> Option<Point> {
        let (x, y) = match self {
            Self::EqualEarth => {
                let (x, y) = equal_earth(
                    wrap_longitude(p.lon).to_radians(),
                    p.lat.to_radians(),
                );
                (x, -y)
            }
            Self::RotatedEqualEarth { central_meridian } => {
                let (x, y) = equal_earth(
                    wrap_longitude(p.lon - central_meridian).to_radians(),
                    p.lat.to_radians(),
                );
                (x, -y)
            }
            Self::CompositeUsa => CompositeUsa::default().project(p)?,
        };
        let q = Point::new(x, y);
        is_finite_point(q).then_some(q)
    }
}

fn matches_rule(ident: &FeatureIdentity, codes: &[&str], names: &[&str]) -> bool {
    codes.iter().any(|c| ident.has_code(c)) || names.iter().any(|n| ident.has_name(n))
}

/// Pick a projection for `feature` from its identity.
///
/// 1. Split-territory country: composite projection.
/// 2. Dateline-spanning country: Equal Earth rotated onto the bbox midpoint.
/// 3. Everything else: Equal Earth.
pub fn select_projection(feature: &Feature) -> ProjectionKind {
    let ident = feature.identity();
    if matches_rule(&ident, SPLIT_TERRITORY_CODES, SPLIT_TERRITORY_NAMES) {
        return ProjectionKind::CompositeUsa;
    }
    if matches_rule(&ident, DATELINE_CODES, DATELINE_NAMES) {
        let central_meridian = GeoBounds::antimeridian_aware(feature.positions())
            .map(|b| b.center_lon())
            .unwrap_or(0.0);
        return ProjectionKind::RotatedEqualEarth { central_meridian };
    }
    ProjectionKind::EqualEarth
}

/// Choose a projection for `feature` and fit it into the padded viewport.
#[tracing::instrument(skip(feature))]
pub fn project(
    feature: &Feature,
    viewport: Viewport,
    padding: f64,
) -> (FittedProjection, ProjectionKind) {
    let kind = select_projection(feature);
    let fitted = FittedProjection::fit(kind, feature.positions(), viewport.fit_extent(padding));
    tracing::debug!(?kind, scale = fitted.scale(), "fitted projection");
    (fitted, kind)
}

#[cfg(test)]
#[path = "../../tests/unit/projection/select.rs"]
mod tests;

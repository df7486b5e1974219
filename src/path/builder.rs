use crate::foundation::core::Point;
use crate::geo::feature::{Feature, LonLat};
use crate::path::segment::PathModel;
use crate::projection::fit::FittedProjection;

/// Build one [`PathModel`] per polygon part of `feature`.
///
/// `Polygon` and `MultiPolygon` are handled uniformly; every ring (holes included) becomes its
/// own sub-path. Positions without a finite image under `projection` are dropped from their
/// ring. Degenerate parts are kept as zero-length models.
#[tracing::instrument(
    skip(feature, projection),
    fields(parts = tracing::field::Empty, skipped = tracing::field::Empty)
)]
pub fn build_path_models(feature: &Feature, projection: &FittedProjection) -> Vec<PathModel> {
    let mut skipped = 0usize;
    let models: Vec<PathModel> = feature
        .polygon_parts()
        .into_iter()
        .map(|rings| {
            let projected: Vec<Vec<Point>> = rings
                .iter()
                .map(|ring| project_ring(ring, projection, &mut skipped))
                .collect();
            PathModel::from_rings(projected)
        })
        .collect();

    let span = tracing::Span::current();
    span.record("parts", models.len());
    span.record("skipped", skipped);
    if skipped > 0 {
        tracing::warn!(
            skipped,
            kind = ?projection.kind(),
            "dropped positions with no image under the projection"
        );
    }
    models
}

fn project_ring(ring: &[LonLat], projection: &FittedProjection, skipped: &mut usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(ring.len());
    for &p in ring {
        match projection.project(p) {
            Some(q) => out.push(q),
            None => *skipped += 1,
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/path/builder.rs"]
mod tests;

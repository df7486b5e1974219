use crate::foundation::core::Point;
use crate::foundation::error::{BorderlineError, BorderlineResult};
use crate::geo::bounds::GeoBounds;
use crate::geo::feature::{Feature, LonLat};
use crate::projection::fit::FittedProjection;
use crate::render::surface::{StrokeStyle, Surface};

/// One disputed line with its precomputed bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct DisputedEntry {
    pub points: Vec<LonLat>,
    pub bbox: GeoBounds,
}

impl DisputedEntry {
    /// Returns `None` when `points` has no finite position.
    pub fn new(points: Vec<LonLat>) -> Option<Self> {
        let bbox = GeoBounds::from_points(points.iter().copied())?;
        Some(Self { points, bbox })
    }
}

/// Disputed lines loaded once per dataset, filtered per draw.
#[derive(Clone, Debug, Default)]
pub struct DisputedSet {
    entries: Vec<DisputedEntry>,
}

impl DisputedSet {
    pub fn new(entries: Vec<DisputedEntry>) -> Self {
        Self { entries }
    }

    /// One entry per line string of every `LineString`/`MultiLineString` feature. Other
    /// geometries are ignored.
    pub fn from_line_features(features: &[Feature]) -> Self {
        let entries = features
            .iter()
            .filter_map(|f| f.geometry.as_ref())
            .flat_map(|g| g.line_strings())
            .filter_map(|line| DisputedEntry::new(line.to_vec()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[DisputedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn intersecting<'a>(
        &'a self,
        bbox: &'a GeoBounds,
    ) -> impl Iterator<Item = &'a DisputedEntry> + 'a {
        self.entries.iter().filter(move |e| e.bbox.intersects(bbox))
    }
}

/// Alternating drawn/skipped lengths in screen units, starting with a drawn stretch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct DashPattern(Vec<f64>);

impl DashPattern {
    pub fn new(lengths: Vec<f64>) -> BorderlineResult<Self> {
        if lengths.is_empty() {
            return Err(BorderlineError::validation("dash pattern must not be empty"));
        }
        if lengths.iter().any(|l| !l.is_finite() || *l <= 0.0) {
            return Err(BorderlineError::validation(
                "dash pattern lengths must be finite and > 0",
            ));
        }
        Ok(Self(lengths))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        Self(vec![6.0, 4.0])
    }
}

impl TryFrom<Vec<f64>> for DashPattern {
    type Error = BorderlineError;

    fn try_from(v: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<DashPattern> for Vec<f64> {
    fn from(p: DashPattern) -> Self {
        p.0
    }
}

/// Emit the dashes of `points` as `move_to`/`line_to` runs. Does not stroke.
///
/// The position within `pattern` carries across vertices, so a dash may bend around a corner.
/// Returns the number of dashes started.
pub fn dash_polyline(points: &[Point], pattern: &DashPattern, surface: &mut dyn Surface) -> usize {
    let dashes = pattern.as_slice();
    let Some(&first) = dashes.first() else {
        return 0;
    };
    let mut idx = 0;
    let mut remaining = first;
    let mut drawing = true;
    let mut pen_down = false;
    let mut started = 0;

    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        let len = a.distance(b);
        if len.is_nan() || len <= 1e-9 {
            continue;
        }
        let mut pos = 0.0;
        while pos < len {
            let step = remaining.min(len - pos);
            if drawing {
                if !pen_down {
                    surface.move_to(a.lerp(b, pos / len));
                    pen_down = true;
                    started += 1;
                }
                surface.line_to(a.lerp(b, (pos + step) / len));
            } else {
                pen_down = false;
            }
            pos += step;
            remaining -= step;
            if remaining <= 1e-9 {
                idx = (idx + 1) % dashes.len();
                remaining = dashes[idx];
                drawing = !drawing;
            }
        }
    }
    started
}

/// Stroke every entry of `set` whose bbox touches `selected`, dashed, at full length.
///
/// Positions that do not project split the line. Returns the number of entries drawn.
#[tracing::instrument(skip(set, projection, style, pattern, surface), fields(entries = set.len()))]
pub fn draw_overlay(
    selected: &GeoBounds,
    set: &DisputedSet,
    projection: &FittedProjection,
    style: &StrokeStyle,
    pattern: &DashPattern,
    surface: &mut dyn Surface,
) -> usize {
    let mut drawn = 0;
    let mut styled = false;
    for entry in set.intersecting(selected) {
        if !styled {
            surface.set_stroke_style(style);
            styled = true;
        }
        for run in projected_runs(&entry.points, projection) {
            dash_polyline(&run, pattern, surface);
        }
        drawn += 1;
    }
    if styled {
        surface.stroke();
    }
    tracing::debug!(drawn, "disputed overlay");
    drawn
}

fn projected_runs(points: &[LonLat], projection: &FittedProjection) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for p in points {
        match projection.project(*p) {
            Some(pt) => current.push(pt),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if current.len() > 1 {
        runs.push(current);
    }
    runs.retain(|r| r.len() > 1);
    runs
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/disputed.rs"]
mod tests;

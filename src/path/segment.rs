use crate::foundation::core::Point;
use crate::foundation::math::clamp01;

/// One straight edge between consecutive ring points, in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub length: f64,
    /// First segment of a ring: move the cursor to `start` before stroking.
    pub ring_start: bool,
}

impl Segment {
    pub fn new(start: Point, end: Point, ring_start: bool) -> Self {
        Self {
            start,
            end,
            length: start.distance(end),
            ring_start,
        }
    }

    /// Point at fraction `t` (clamped to 0..1) along the segment.
    pub fn point_at(&self, t: f64) -> Point {
        self.start.lerp(self.end, clamp01(t))
    }
}

/// Length-parameterized outline of one polygon part (outer ring plus holes).
///
/// Built once per feature + projection + viewport and replaced wholesale on any change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathModel {
    segments: Vec<Segment>,
    total_length: f64,
}

impl PathModel {
    /// Build from projected rings. Each ring is implicitly closed: a closing edge back to the
    /// first point is added unless the ring already repeats it. Rings with fewer than two
    /// points contribute nothing.
    pub fn from_rings<I, R>(rings: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Point]>,
    {
        let mut segments = Vec::new();
        for ring in rings {
            push_ring(ring.as_ref(), &mut segments);
        }
        Self::from_segments(segments)
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let total_length = segments.iter().map(|s| s.length).sum();
        Self {
            segments,
            total_length,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn ring_count(&self) -> usize {
        self.segments.iter().filter(|s| s.ring_start).count()
    }

    /// Length of this part revealed at `progress`, measured against the shared `global_max`.
    ///
    /// Never exceeds [`PathModel::total_length`], never decreases as `progress` grows, and is
    /// exactly `total_length` once `progress >= 1`.
    pub fn draw_length(&self, global_max: f64, progress: f64) -> f64 {
        if progress >= 1.0 {
            return self.total_length;
        }
        (global_max * clamp01(progress)).min(self.total_length).max(0.0)
    }

    pub fn is_complete_at(&self, global_max: f64, progress: f64) -> bool {
        self.draw_length(global_max, progress) >= self.total_length
    }
}

fn push_ring(points: &[Point], out: &mut Vec<Segment>) {
    if points.len() < 2 {
        return;
    }
    let first = points[0];
    let last = points[points.len() - 1];

    let mut ring_start = true;
    for pair in points.windows(2) {
        out.push(Segment::new(pair[0], pair[1], ring_start));
        ring_start = false;
    }
    if first != last {
        out.push(Segment::new(last, first, false));
    }
}

/// Largest `total_length` among `models`: the shared denominator for progress.
pub fn global_max_length(models: &[PathModel]) -> f64 {
    models
        .iter()
        .map(PathModel::total_length)
        .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/path/segment.rs"]
mod tests;

use crate::foundation::core::Point;
use crate::render::surface::{FillStyle, StrokeStyle, Surface};

/// A single recorded call on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear,
    SetStrokeStyle(StrokeStyle),
    MoveTo(Point),
    LineTo(Point),
    Stroke,
    BeginFill(FillStyle),
    EndFill,
}

/// Surface that records draw calls instead of rasterizing them.
///
/// Used by tests and by hosts that replay calls into their own retained scene.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }

    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }

    pub fn line_to_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCmd::LineTo(_)))
    }

    pub fn fill_count(&self) -> usize {
        self.count(|c| matches!(c, DrawCmd::EndFill))
    }

    /// Stroked runs as polylines, grouped per `stroke` call. Each inner `Vec<Point>` is one
    /// sub-path starting at a `move_to`.
    pub fn stroked_polylines(&self) -> Vec<Vec<Vec<Point>>> {
        let mut strokes = Vec::new();
        let mut current: Vec<Vec<Point>> = Vec::new();
        let mut in_fill = false;
        for cmd in &self.cmds {
            match cmd {
                DrawCmd::MoveTo(p) if !in_fill => current.push(vec![*p]),
                DrawCmd::LineTo(p) if !in_fill => {
                    if let Some(sub) = current.last_mut() {
                        sub.push(*p);
                    }
                }
                DrawCmd::Stroke => strokes.push(std::mem::take(&mut current)),
                DrawCmd::BeginFill(_) => in_fill = true,
                DrawCmd::EndFill => in_fill = false,
                _ => {}
            }
        }
        strokes
    }

    /// Total length covered by `line_to` calls of the `stroke_index`-th stroke.
    pub fn stroked_length(&self, stroke_index: usize) -> f64 {
        self.stroked_polylines()
            .get(stroke_index)
            .map(|subs| subs.iter().map(|s| polyline_length(s)).sum())
            .unwrap_or(0.0)
    }
}

pub(crate) fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear);
    }

    fn set_stroke_style(&mut self, style: &StrokeStyle) {
        self.cmds.push(DrawCmd::SetStrokeStyle(*style));
    }

    fn move_to(&mut self, p: Point) {
        self.cmds.push(DrawCmd::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.cmds.push(DrawCmd::LineTo(p));
    }

    fn stroke(&mut self) {
        self.cmds.push(DrawCmd::Stroke);
    }

    fn begin_fill(&mut self, style: &FillStyle) {
        self.cmds.push(DrawCmd::BeginFill(*style));
    }

    fn end_fill(&mut self) {
        self.cmds.push(DrawCmd::EndFill);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/record.rs"]
mod tests;

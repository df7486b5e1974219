use crate::path::segment::PathModel;
use crate::render::surface::{FillStyle, StrokeStyle, Surface};

/// Glow halo drawn under the outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowLayer {
    pub style: StrokeStyle,
    /// Number of stroke passes; each pass after the first is wider and fainter.
    pub passes: u8,
}

/// Styles for every layer of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSet {
    pub outline: StrokeStyle,
    pub glow: Option<GlowLayer>,
    pub fill: Option<FillStyle>,
}

/// Counters describing what one [`render`] call drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Segments emitted by the outline layer (partial ones included).
    pub segments_stroked: usize,
    /// Parts whose whole outline is visible.
    pub parts_complete: usize,
    pub filled: bool,
}

/// Emit the first `draw_length` units of `model` as `move_to`/`line_to` calls.
///
/// Returns the number of segments emitted (the partial one included). Does not stroke.
pub fn trace_partial(model: &PathModel, draw_length: f64, surface: &mut dyn Surface) -> usize {
    let Some(first) = model.segments().first() else {
        return 0;
    };
    if draw_length <= 0.0 {
        surface.move_to(first.start);
        return 0;
    }

    // Fully revealed parts skip the budget arithmetic so the last frame is exact.
    let complete = draw_length >= model.total_length();
    let mut budget = draw_length;
    let mut emitted = 0;
    for seg in model.segments() {
        if seg.ring_start {
            surface.move_to(seg.start);
        }
        if complete || budget >= seg.length {
            surface.line_to(seg.end);
            budget -= seg.length;
            emitted += 1;
            continue;
        }
        if budget > 0.0 {
            surface.line_to(seg.point_at(budget / seg.length));
            emitted += 1;
        }
        break;
    }
    emitted
}

fn trace_all(
    models: &[PathModel],
    global_max: f64,
    progress: f64,
    surface: &mut dyn Surface,
) -> usize {
    models
        .iter()
        .filter(|m| m.total_length() > 0.0)
        .map(|m| trace_partial(m, m.draw_length(global_max, progress), surface))
        .sum()
}

/// Draw the frame for `progress` into `surface`.
///
/// Layer order is fill, glow, outline. Every part is revealed against the same `global_max`
/// budget, so shorter parts complete early and then stay complete. Fill appears for all parts
/// together, only once `progress >= 1`.
pub fn render(
    models: &[PathModel],
    global_max: f64,
    progress: f64,
    layers: &LayerSet,
    surface: &mut dyn Surface,
) -> FrameStats {
    let mut stats = FrameStats::default();
    let finished = progress >= 1.0;

    if let Some(fill) = layers.fill.as_ref().filter(|_| finished) {
        surface.begin_fill(fill);
        for m in models.iter().filter(|m| m.total_length() > 0.0) {
            trace_partial(m, m.total_length(), surface);
        }
        surface.end_fill();
        stats.filled = true;
    }

    if let Some(glow) = layers.glow {
        for pass in 0..glow.passes.max(1) {
            let k = f64::from(pass);
            let style = StrokeStyle {
                width: glow.style.width * (1.0 + k),
                opacity: glow.style.opacity / (1.0 + k as f32),
                ..glow.style
            };
            surface.set_stroke_style(&style);
            trace_all(models, global_max, progress, surface);
            surface.stroke();
        }
    }

    surface.set_stroke_style(&layers.outline);
    stats.segments_stroked = trace_all(models, global_max, progress, surface);
    surface.stroke();

    stats.parts_complete = models
        .iter()
        .filter(|m| m.is_complete_at(global_max, progress))
        .count();
    stats
}

#[cfg(test)]
#[path = "../../tests/unit/render/progress.rs"]
mod tests;

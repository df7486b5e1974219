use crate::foundation::core::{Point, Rgba8};

/// How a layer combines with what is already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    #[default]
    Normal,
    /// Additive-style blending: overlapping strokes brighten instead of occluding.
    Screen,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    pub color: Rgba8,
    pub width: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default)]
    pub blend: BlendMode,
}

impl StrokeStyle {
    pub fn new(color: Rgba8, width: f64) -> Self {
        Self {
            color,
            width,
            opacity: 1.0,
            blend: BlendMode::Normal,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FillStyle {
    pub color: Rgba8,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

fn default_opacity() -> f32 {
    1.0
}

/// Minimal immediate-mode drawing contract the engine renders against.
///
/// A path is accumulated with `move_to`/`line_to` and consumed by `stroke` (using the last
/// stroke style) or by `end_fill` (using the style passed to `begin_fill`). Any 2D API with
/// these primitives (canvas, a scene graph, SVG path mutation) can implement it.
pub trait Surface {
    /// Reset the surface for a new frame.
    fn clear(&mut self);

    fn set_stroke_style(&mut self, style: &StrokeStyle);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Stroke and discard the current path.
    fn stroke(&mut self);

    /// Start collecting a path to be filled. Subpaths are filled even-odd so holes stay empty.
    fn begin_fill(&mut self, style: &FillStyle);

    /// Fill and discard the path collected since `begin_fill`.
    fn end_fill(&mut self);
}

use crate::foundation::core::Rgba8;
use crate::foundation::error::BorderlineResult;
use crate::render::progress::LayerSet;
use crate::render::surface::{FillStyle, StrokeStyle};
use crate::theme::kind::ThemeKind;

/// Per-layer styling for one look. `kind` selects the lifecycle hooks.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub kind: ThemeKind,
    pub outline: StrokeStyle,
    #[serde(default)]
    pub glow: Option<StrokeStyle>,
    #[serde(default)]
    pub fill: Option<FillStyle>,
    pub disputed: StrokeStyle,
    #[serde(default = "default_background")]
    pub background: Rgba8,
}

fn default_background() -> Rgba8 {
    Rgba8::opaque(255, 255, 255)
}

impl Default for Theme {
    fn default() -> Self {
        ThemeKind::Classic.preset()
    }
}

impl Theme {
    pub fn from_json_str(s: &str) -> BorderlineResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Layer set for a run of this theme.
    pub fn layers(&self, performance_mode: bool) -> LayerSet {
        self.kind.apply(self, performance_mode)
    }
}

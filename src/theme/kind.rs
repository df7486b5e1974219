use crate::foundation::core::Rgba8;
use crate::foundation::math::clamp01;
use crate::render::progress::{GlowLayer, LayerSet};
use crate::render::surface::{BlendMode, FillStyle, StrokeStyle};
use crate::theme::style::Theme;

/// Built-in looks and the hooks that vary between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    /// Dark ink outline on paper with a soft fill once drawn.
    #[default]
    Classic,
    /// Bright outline with a pulsing screen-blended halo.
    Neon,
    /// Pale linework on blue. Never filled.
    Blueprint,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Classic, ThemeKind::Neon, ThemeKind::Blueprint];

    pub fn preset(self) -> Theme {
        match self {
            Self::Classic => Theme {
                kind: self,
                outline: StrokeStyle::new(Rgba8::opaque(0x1f, 0x29, 0x37), 2.0),
                glow: None,
                fill: Some(FillStyle {
                    color: Rgba8::opaque(0x3b, 0x82, 0xf6),
                    opacity: 0.25,
                }),
                disputed: StrokeStyle::new(Rgba8::opaque(0xb9, 0x1c, 0x1c), 1.5)
                    .with_opacity(0.9),
                background: Rgba8::opaque(0xff, 0xff, 0xff),
            },
            Self::Neon => Theme {
                kind: self,
                outline: StrokeStyle::new(Rgba8::opaque(0x22, 0xd3, 0xee), 2.0),
                glow: Some(
                    StrokeStyle::new(Rgba8::opaque(0x22, 0xd3, 0xee), 8.0)
                        .with_opacity(0.35)
                        .with_blend(BlendMode::Screen),
                ),
                fill: Some(FillStyle {
                    color: Rgba8::opaque(0x22, 0xd3, 0xee),
                    opacity: 0.15,
                }),
                disputed: StrokeStyle::new(Rgba8::opaque(0xf4, 0x72, 0xb6), 1.5),
                background: Rgba8::opaque(0x0b, 0x10, 0x20),
            },
            Self::Blueprint => Theme {
                kind: self,
                outline: StrokeStyle::new(Rgba8::opaque(0xe0, 0xf2, 0xfe), 1.5),
                glow: Some(
                    StrokeStyle::new(Rgba8::opaque(0x93, 0xc5, 0xfd), 5.0)
                        .with_opacity(0.2)
                        .with_blend(BlendMode::Screen),
                ),
                fill: None,
                disputed: StrokeStyle::new(Rgba8::opaque(0xfd, 0xe6, 0x8a), 1.0),
                background: Rgba8::opaque(0x0f, 0x3d, 0x75),
            },
        }
    }

    /// Layer set for a run. Performance mode halves the glow opacity and drops its wide pass.
    pub fn apply(self, theme: &Theme, performance_mode: bool) -> LayerSet {
        let glow = theme.glow.map(|style| {
            if performance_mode {
                GlowLayer {
                    style: style.with_opacity(style.opacity * 0.5),
                    passes: 1,
                }
            } else {
                GlowLayer { style, passes: 2 }
            }
        });
        LayerSet {
            outline: theme.outline,
            glow,
            fill: theme.fill,
        }
    }

    /// Glow opacity multiplier for the frame at `progress`, in `[0.5, 1]`.
    pub fn on_frame(self, progress: f64) -> f32 {
        match self {
            Self::Neon => {
                let phase = clamp01(progress) * 6.0 * std::f64::consts::PI;
                (0.75 + 0.25 * phase.cos()) as f32
            }
            Self::Classic | Self::Blueprint => 1.0,
        }
    }

    /// Whether the fill is revealed once the outline is complete.
    pub fn on_complete(self) -> bool {
        match self {
            Self::Classic | Self::Neon => true,
            Self::Blueprint => false,
        }
    }

    /// Frame layers: `base` with the per-frame pulse applied and the fill gated on completion.
    pub fn frame_layers(self, base: &LayerSet, progress: f64) -> LayerSet {
        let pulse = self.on_frame(progress);
        LayerSet {
            glow: base.glow.map(|g| GlowLayer {
                style: g.style.with_opacity(g.style.opacity * pulse),
                ..g
            }),
            fill: base.fill.filter(|_| self.on_complete()),
            ..*base
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/kind.rs"]
mod tests;

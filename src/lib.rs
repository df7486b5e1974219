//! Borderline draws the outline of a country progressively, as if a pen were tracing it.
//!
//! The engine is backend-agnostic and deterministic for a given input:
//!
//! 1. **Project**: `Feature + Viewport -> FittedProjection` (equal-area by default, with two
//!    country-specific rules for split territories and antimeridian spans)
//! 2. **Build**: `Feature + FittedProjection -> Vec<PathModel>` (length-parameterized segments,
//!    one model per polygon part)
//! 3. **Clock**: `timestamp -> progress` (frame-rate independent, cancelable)
//! 4. **Render**: `PathModel[] + progress -> draw calls` against any [`Surface`]
//!
//! All parts of a feature share one `progress -> drawn length` mapping derived from the longest
//! part, so islands finish no later than the mainland and every part moves at the same speed.
//!
//! [`Session`] ties the stages together and owns the single active clock.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod geo;
mod overlay;
mod path;
mod projection;
mod render;
mod session;
mod theme;

pub use animation::clock::{AnimationClock, AnimationState, ClockPhase, Tick};
pub use animation::ease::Ease;
pub use foundation::core::{Point, Rect, Rgba8, Vec2, Viewport};
pub use foundation::error::{BorderlineError, BorderlineResult};
pub use foundation::math::wrap_longitude;
pub use geo::bounds::GeoBounds;
pub use geo::feature::{Feature, FeatureIdentity, GeoDocument, Geometry, LonLat};
pub use overlay::disputed::{DashPattern, DisputedEntry, DisputedSet, dash_polyline, draw_overlay};
pub use path::builder::build_path_models;
pub use path::segment::{PathModel, Segment, global_max_length};
pub use projection::fit::FittedProjection;
pub use projection::select::{ProjectionKind, project, select_projection};
pub use render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
    create_backend_with_fallback,
};
pub use render::cpu::CpuSurface;
pub use render::progress::{FrameStats, GlowLayer, LayerSet, render, trace_partial};
pub use render::record::{DrawCmd, RecordingSurface};
pub use render::surface::{BlendMode, FillStyle, StrokeStyle, Surface};
pub use session::{FrameStatus, Session, SessionOpts};
pub use theme::kind::ThemeKind;
pub use theme::style::Theme;

//! Single-writer orchestration of one country animation.
//!
//! A [`Session`] owns the selected feature, its path models, the active theme layers and the
//! one [`AnimationClock`]. Every change that invalidates a run cancels the clock before anything
//! else, so two runs never overlap.

use crate::animation::clock::{AnimationClock, ClockPhase, Tick};
use crate::animation::ease::Ease;
use crate::foundation::core::Viewport;
use crate::foundation::error::{BorderlineError, BorderlineResult};
use crate::geo::bounds::GeoBounds;
use crate::geo::feature::Feature;
use crate::overlay::disputed::{DashPattern, DisputedSet, draw_overlay};
use crate::path::builder::build_path_models;
use crate::path::segment::{PathModel, global_max_length};
use crate::projection::fit::FittedProjection;
use crate::projection::select::{ProjectionKind, project};
use crate::render::progress::{LayerSet, render};
use crate::render::surface::Surface;
use crate::theme::style::Theme;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionOpts {
    pub duration_secs: f64,
    pub animate: bool,
    pub performance_mode: bool,
    /// Screen-space margin kept free around the fitted outline.
    pub padding: f64,
    pub ease: Ease,
    pub theme: Theme,
    /// Background for raster hosts. `None` uses the theme background.
    pub clear_rgba: Option<[u8; 4]>,
    pub dash: DashPattern,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            duration_secs: 3.0,
            animate: true,
            performance_mode: false,
            padding: 20.0,
            ease: Ease::Linear,
            theme: Theme::default(),
            clear_rgba: None,
            dash: DashPattern::default(),
        }
    }
}

impl SessionOpts {
    pub fn from_json_str(s: &str) -> BorderlineResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> BorderlineResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(BorderlineError::validation(
                "duration_secs must be finite and >= 0",
            ));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(BorderlineError::validation(
                "padding must be finite and >= 0",
            ));
        }
        DashPattern::new(self.dash.as_slice().to_vec())?;
        Ok(())
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_secs * 1000.0
    }

    /// Background color as RGBA8, falling back to the theme.
    pub fn background_rgba(&self) -> [u8; 4] {
        self.clear_rgba.unwrap_or_else(|| {
            let c = self.theme.background;
            [c.r, c.g, c.b, c.a]
        })
    }
}

/// What [`Session::frame`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameStatus {
    /// Nothing is animating. A selected feature is still drawn in its final state.
    Idle,
    Animating { progress: f64 },
    /// This frame finished the run. Returned once per run.
    Completed,
}

struct Selection {
    feature: Feature,
    bounds: Option<GeoBounds>,
    projection: FittedProjection,
    models: Vec<PathModel>,
    global_max: f64,
}

pub struct Session {
    opts: SessionOpts,
    viewport: Viewport,
    selection: Option<Selection>,
    layers: LayerSet,
    disputed: DisputedSet,
    clock: AnimationClock,
    finalized: bool,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl Session {
    pub fn new(opts: SessionOpts, viewport: Viewport) -> BorderlineResult<Self> {
        opts.validate()?;
        let layers = opts.theme.layers(opts.performance_mode);
        let clock = AnimationClock::new().with_ease(opts.ease);
        Ok(Self {
            opts,
            viewport,
            selection: None,
            layers,
            disputed: DisputedSet::default(),
            clock,
            finalized: false,
            on_complete: None,
        })
    }

    pub fn set_disputed(&mut self, set: DisputedSet) {
        self.disputed = set;
    }

    /// Register the callback fired once when a run completes, animated or not.
    pub fn on_complete(&mut self, f: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(f));
    }

    /// Replace the selected feature and start a new run at `now_ms`.
    #[tracing::instrument(skip(self, feature))]
    pub fn select(&mut self, feature: Feature, now_ms: f64) {
        self.clock.cancel();
        self.selection = Some(self.build_selection(feature));
        self.draw(now_ms);
    }

    pub fn clear_selection(&mut self) {
        self.clock.cancel();
        self.selection = None;
        self.finalized = false;
    }

    /// Restart the run for the current feature. No-op without a selection.
    pub fn draw(&mut self, now_ms: f64) {
        self.clock.cancel();
        if self.selection.is_none() {
            return;
        }
        self.finalized = false;
        self.layers = self.opts.theme.layers(self.opts.performance_mode);
        self.clock.set_ease(self.opts.ease);
        if self.opts.animate {
            self.clock.start(now_ms, self.opts.duration_ms());
        } else {
            self.clock.complete_immediately();
        }
        tracing::debug!(
            animate = self.opts.animate,
            duration_ms = self.opts.duration_ms(),
            "run started"
        );
    }

    /// Rebuild projection and path models for a new viewport. The running clock is kept.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(sel) = self.selection.take() {
            self.selection = Some(self.build_selection(sel.feature));
        }
    }

    pub fn set_theme(&mut self, theme: Theme, now_ms: f64) {
        self.clock.cancel();
        self.opts.theme = theme;
        self.draw(now_ms);
    }

    pub fn set_duration_secs(&mut self, secs: f64, now_ms: f64) -> BorderlineResult<()> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(BorderlineError::validation(
                "duration_secs must be finite and >= 0",
            ));
        }
        self.clock.cancel();
        self.opts.duration_secs = secs;
        self.draw(now_ms);
        Ok(())
    }

    pub fn set_animate(&mut self, animate: bool, now_ms: f64) {
        self.clock.cancel();
        self.opts.animate = animate;
        self.draw(now_ms);
    }

    /// Switch glow quality. Takes effect on the next frame without restarting.
    pub fn set_performance_mode(&mut self, on: bool) {
        self.opts.performance_mode = on;
        self.layers = self.opts.theme.layers(on);
    }

    /// Advance the clock to `now_ms` and draw the frame into `surface`.
    ///
    /// Draw order is fill, glow, outline, then the disputed overlay on top.
    pub fn frame(&mut self, now_ms: f64, surface: &mut dyn Surface) -> FrameStatus {
        let tick = self.clock.tick(now_ms);
        let Some(sel) = self.selection.as_ref() else {
            return FrameStatus::Idle;
        };

        let (progress, status) = match tick {
            Tick::Running { progress } => (progress, FrameStatus::Animating { progress }),
            Tick::Completed => (1.0, FrameStatus::Completed),
            Tick::Idle => (self.clock.progress(), FrameStatus::Idle),
        };

        surface.clear();
        let layers = self.opts.theme.kind.frame_layers(&self.layers, progress);
        let stats = render(&sel.models, sel.global_max, progress, &layers, surface);
        if let Some(bounds) = sel.bounds.as_ref() {
            draw_overlay(
                bounds,
                &self.disputed,
                &sel.projection,
                &self.opts.theme.disputed,
                &self.opts.dash,
                surface,
            );
        }
        tracing::debug!(
            progress,
            segments = stats.segments_stroked,
            parts_complete = stats.parts_complete,
            filled = stats.filled,
            "frame"
        );

        if status == FrameStatus::Completed {
            self.finalize();
        }
        status
    }

    fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.finalized = true;
        tracing::info!("animation complete");
        if let Some(cb) = self.on_complete.as_mut() {
            cb();
        }
    }

    fn build_selection(&self, feature: Feature) -> Selection {
        let (projection, _) = project(&feature, self.viewport, self.opts.padding);
        let models = build_path_models(&feature, &projection);
        let global_max = global_max_length(&models);
        let bounds = GeoBounds::from_points(feature.positions());
        Selection {
            feature,
            bounds,
            projection,
            models,
            global_max,
        }
    }

    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn feature(&self) -> Option<&Feature> {
        self.selection.as_ref().map(|s| &s.feature)
    }

    pub fn models(&self) -> &[PathModel] {
        self.selection
            .as_ref()
            .map(|s| s.models.as_slice())
            .unwrap_or_default()
    }

    pub fn global_max_length(&self) -> f64 {
        self.selection.as_ref().map_or(0.0, |s| s.global_max)
    }

    pub fn projection(&self) -> Option<&FittedProjection> {
        self.selection.as_ref().map(|s| &s.projection)
    }

    pub fn projection_kind(&self) -> Option<ProjectionKind> {
        self.projection().map(FittedProjection::kind)
    }

    pub fn selected_bounds(&self) -> Option<GeoBounds> {
        self.selection.as_ref().and_then(|s| s.bounds)
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn progress(&self) -> f64 {
        self.clock.progress()
    }

    pub fn is_running(&self) -> bool {
        self.clock.phase() == ClockPhase::Running
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/mod.rs"]
mod tests;

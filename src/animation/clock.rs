use crate::animation::ease::Ease;
use crate::foundation::math::clamp01;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockPhase {
    #[default]
    Idle,
    Running,
    Completed,
}

/// Timing state of one run. Times are host timestamps in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub start_time: Option<f64>,
    pub duration_ms: f64,
    pub progress: f64,
    pub running: bool,
}

/// Result of advancing the clock to a timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Nothing is animating.
    Idle,
    Running { progress: f64 },
    /// The run just finished. Reported once per run.
    Completed,
}

/// Converts host timestamps into monotone progress in `[0, 1]`.
///
/// The clock never reads time on its own; every transition is driven by the `now_ms` values the
/// host passes in, so it is frame-rate independent and deterministic under synthetic time.
#[derive(Clone, Debug, Default)]
pub struct AnimationClock {
    state: AnimationState,
    phase: ClockPhase,
    ease: Ease,
    completion_reported: bool,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn set_ease(&mut self, ease: Ease) {
        self.ease = ease;
    }

    pub fn start(&mut self, now_ms: f64, duration_ms: f64) {
        self.state = AnimationState {
            start_time: Some(now_ms),
            duration_ms,
            progress: 0.0,
            running: true,
        };
        self.phase = ClockPhase::Running;
        self.completion_reported = false;
    }

    pub fn tick(&mut self, now_ms: f64) -> Tick {
        match self.phase {
            ClockPhase::Idle => Tick::Idle,
            ClockPhase::Completed if self.completion_reported => Tick::Idle,
            ClockPhase::Completed => {
                self.completion_reported = true;
                Tick::Completed
            }
            ClockPhase::Running => {
                let raw = self.raw_progress(now_ms);
                if raw >= 1.0 {
                    self.finish();
                    self.completion_reported = true;
                    return Tick::Completed;
                }
                self.state.progress = self.state.progress.max(self.ease.apply(raw));
                Tick::Running {
                    progress: self.state.progress,
                }
            }
        }
    }

    /// Stop the current run, if any. Safe to call in any phase and more than once.
    pub fn cancel(&mut self) {
        self.state = AnimationState {
            duration_ms: self.state.duration_ms,
            ..AnimationState::default()
        };
        self.phase = ClockPhase::Idle;
        self.completion_reported = false;
    }

    /// Jump straight to the finished state without running. The next `tick` reports
    /// [`Tick::Completed`] once.
    pub fn complete_immediately(&mut self) {
        self.state.start_time = None;
        self.finish();
        self.completion_reported = false;
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn ease(&self) -> Ease {
        self.ease
    }

    pub fn is_running(&self) -> bool {
        self.phase == ClockPhase::Running
    }

    fn raw_progress(&self, now_ms: f64) -> f64 {
        let duration = self.state.duration_ms;
        if !duration.is_finite() || duration <= 0.0 {
            return 1.0;
        }
        let elapsed = now_ms - self.state.start_time.unwrap_or(now_ms);
        clamp01(elapsed / duration)
    }

    fn finish(&mut self) {
        self.state.progress = 1.0;
        self.state.running = false;
        self.phase = ClockPhase::Completed;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;

use super::*;

#[test]
fn progress_follows_elapsed_time() {
    let mut c = AnimationClock::new();
    c.start(1_000.0, 10_000.0);
    assert_eq!(c.tick(1_000.0), Tick::Running { progress: 0.0 });
    assert_eq!(c.tick(6_000.0), Tick::Running { progress: 0.5 });
    assert!(c.is_running());
    assert_eq!(c.state().start_time, Some(1_000.0));
}

#[test]
fn completes_exactly_once() {
    let mut c = AnimationClock::new();
    c.start(0.0, 100.0);
    assert_eq!(c.tick(150.0), Tick::Completed);
    assert_eq!(c.phase(), ClockPhase::Completed);
    assert_eq!(c.progress(), 1.0);
    assert!(!c.state().running);
    assert_eq!(c.tick(200.0), Tick::Idle);
    assert_eq!(c.tick(300.0), Tick::Idle);
}

#[test]
fn progress_never_decreases() {
    let mut c = AnimationClock::new();
    c.start(0.0, 1_000.0);
    c.tick(600.0);
    // A host timestamp going backwards must not rewind the animation.
    assert_eq!(c.tick(300.0), Tick::Running { progress: 0.6 });
    assert_eq!(c.tick(-50.0), Tick::Running { progress: 0.6 });
}

#[test]
fn non_positive_duration_completes_on_first_tick() {
    for d in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let mut c = AnimationClock::new();
        c.start(10.0, d);
        assert_eq!(c.tick(10.0), Tick::Completed, "duration {d}");
    }
}

#[test]
fn cancel_is_idempotent_in_every_phase() {
    let mut c = AnimationClock::new();
    c.cancel();
    c.cancel();
    assert_eq!(c.phase(), ClockPhase::Idle);

    c.start(0.0, 100.0);
    c.tick(50.0);
    c.cancel();
    c.cancel();
    assert_eq!(c.phase(), ClockPhase::Idle);
    assert_eq!(c.progress(), 0.0);
    assert_eq!(c.tick(60.0), Tick::Idle);

    c.start(0.0, 10.0);
    c.tick(20.0);
    c.cancel();
    assert_eq!(c.phase(), ClockPhase::Idle);
}

#[test]
fn complete_immediately_skips_running() {
    let mut c = AnimationClock::new();
    c.complete_immediately();
    assert_eq!(c.phase(), ClockPhase::Completed);
    assert_eq!(c.progress(), 1.0);
    assert_eq!(c.state().start_time, None);
    assert_eq!(c.tick(0.0), Tick::Completed);
    assert_eq!(c.tick(1.0), Tick::Idle);
}

#[test]
fn restart_after_completion_runs_again() {
    let mut c = AnimationClock::new();
    c.start(0.0, 10.0);
    assert_eq!(c.tick(10.0), Tick::Completed);
    c.start(100.0, 10.0);
    assert_eq!(c.tick(105.0), Tick::Running { progress: 0.5 });
    assert_eq!(c.tick(110.0), Tick::Completed);
}

#[test]
fn ease_shapes_progress() {
    let mut c = AnimationClock::new().with_ease(Ease::InQuad);
    c.start(0.0, 100.0);
    assert_eq!(c.tick(50.0), Tick::Running { progress: 0.25 });
    assert_eq!(c.ease(), Ease::InQuad);
}

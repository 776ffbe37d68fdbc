mod common;

use camera_mouse::recenter::{RecenterSequencer, COUNTDOWN_SECS};
use common::RecordingEngine;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn full_cycle_with_tracking_on() {
    let engine = RecordingEngine::new();
    let mut seq = RecenterSequencer::new();
    let t0 = Instant::now();

    seq.trigger(t0, true, &engine);
    assert_eq!(seq.countdown(), COUNTDOWN_SECS);
    assert_eq!(
        engine.calls(),
        vec!["set_tracking_enabled(false)", "recenter"]
    );

    let mut observed = vec![seq.countdown()];
    for i in 1..=COUNTDOWN_SECS as u64 {
        seq.poll(t0 + secs(i), &engine);
        observed.push(seq.countdown());
    }
    assert_eq!(observed, vec![5, 4, 3, 2, 1, 0]);
    assert!(!seq.is_running());
    assert_eq!(
        engine.calls(),
        vec![
            "set_tracking_enabled(false)",
            "recenter",
            "set_tracking_enabled(true)",
        ]
    );
}

#[test]
fn full_cycle_with_tracking_off_never_toggles_tracking() {
    let engine = RecordingEngine::new();
    let mut seq = RecenterSequencer::new();
    let t0 = Instant::now();

    seq.trigger(t0, false, &engine);
    seq.poll(t0 + secs(COUNTDOWN_SECS as u64), &engine);

    assert!(!seq.is_running());
    assert_eq!(engine.calls(), vec!["recenter"]);
}

#[test]
fn retrigger_while_running_is_ignored() {
    let engine = RecordingEngine::new();
    let mut seq = RecenterSequencer::new();
    let t0 = Instant::now();

    seq.trigger(t0, true, &engine);
    let calls_before = engine.call_count();
    let countdown_before = seq.countdown();

    // Hotkey and button both funnel here; a second trigger must be a no-op.
    seq.trigger(t0 + Duration::from_millis(200), true, &engine);
    assert_eq!(engine.call_count(), calls_before);
    assert_eq!(seq.countdown(), countdown_before);
}

#[test]
fn command_failures_do_not_abort_the_sequence() {
    let engine = RecordingEngine::new();
    engine.fail_set_tracking.store(true, Ordering::SeqCst);
    engine.fail_recenter.store(true, Ordering::SeqCst);
    let mut seq = RecenterSequencer::new();
    let t0 = Instant::now();

    seq.trigger(t0, true, &engine);
    assert_eq!(seq.countdown(), COUNTDOWN_SECS, "countdown runs despite failures");

    engine.fail_set_tracking.store(false, Ordering::SeqCst);
    seq.poll(t0 + secs(COUNTDOWN_SECS as u64), &engine);

    // Exactly one disable/enable pair regardless of failures in between.
    assert_eq!(
        engine.calls(),
        vec![
            "set_tracking_enabled(false)",
            "recenter",
            "set_tracking_enabled(true)",
        ]
    );
}

#[test]
fn late_poll_catches_up_without_skipping() {
    let engine = RecordingEngine::new();
    let mut seq = RecenterSequencer::new();
    let t0 = Instant::now();

    seq.trigger(t0, false, &engine);
    // One poll after 2.5s accounts for both elapsed ticks.
    assert!(seq.poll(t0 + Duration::from_millis(2500), &engine));
    assert_eq!(seq.countdown(), 3);
    // And the remaining ticks still land on the original 1 Hz grid.
    seq.poll(t0 + Duration::from_millis(2900), &engine);
    assert_eq!(seq.countdown(), 3);
    seq.poll(t0 + secs(3), &engine);
    assert_eq!(seq.countdown(), 2);
}

#[test]
fn early_poll_does_not_tick() {
    let engine = RecordingEngine::new();
    let mut seq = RecenterSequencer::new();
    let t0 = Instant::now();

    seq.trigger(t0, false, &engine);
    assert!(!seq.poll(t0 + Duration::from_millis(999), &engine));
    assert_eq!(seq.countdown(), COUNTDOWN_SECS);
}

#[test]
fn cancel_stops_countdown_and_skips_resume() {
    let engine = RecordingEngine::new();
    let mut seq = RecenterSequencer::new();
    let t0 = Instant::now();

    seq.trigger(t0, true, &engine);
    seq.cancel();
    assert_eq!(seq.countdown(), 0);

    // No late tick may fire after teardown.
    assert!(!seq.poll(t0 + secs(10), &engine));
    assert_eq!(
        engine.calls(),
        vec!["set_tracking_enabled(false)", "recenter"],
        "cancel does not roll back or resume"
    );
}

#[test]
fn idle_poll_is_inert() {
    let engine = RecordingEngine::new();
    let mut seq = RecenterSequencer::new();
    assert!(!seq.poll(Instant::now(), &engine));
    assert_eq!(engine.call_count(), 0);
}

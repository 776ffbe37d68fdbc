use camera_mouse::params::AllParams;
use camera_mouse::store::AppStore;
use camera_mouse::telemetry::{PreviewFrame, Telemetry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn initial_state() {
    let store = AppStore::new(AllParams::default());
    let state = store.state();
    assert_eq!(state.params, AllParams::default());
    assert_eq!(state.telemetry, Telemetry::default());
    assert!(state.preview.is_none());
    assert!(!state.is_running);
    assert_eq!(store.params_rev(), 0);
}

#[test]
fn setters_replace_wholesale() {
    let store = AppStore::new(AllParams::default());

    let telemetry = Telemetry {
        fps: 14.5,
        score: 0.9,
        tracking_on: true,
        lost: false,
        pos_x: Some(320),
        pos_y: Some(240),
    };
    store.set_telemetry(telemetry.clone());
    assert_eq!(store.telemetry(), telemetry);

    // The next event is authoritative; no merging with the previous one.
    store.set_telemetry(Telemetry::default());
    assert_eq!(store.telemetry(), Telemetry::default());

    let frame = PreviewFrame {
        data: "aGVsbG8=".into(),
        width: 640,
        height: 480,
        timestamp: "2024-01-01T00:00:00Z".into(),
    };
    store.set_preview(Some(frame.clone()));
    assert_eq!(store.preview(), Some(frame));
    store.set_preview(None);
    assert!(store.preview().is_none());

    store.set_running(true);
    assert!(store.is_running());
}

#[test]
fn set_params_bumps_revision() {
    let store = AppStore::new(AllParams::default());
    assert_eq!(store.params_rev(), 0);

    let mut next = AllParams::default();
    next.pointer.sensitivity = 75;
    let rev = store.set_params(next.clone());
    assert_eq!(rev, 1);
    assert_eq!(store.params_rev(), 1);
    assert_eq!(store.params(), next);
}

#[test]
fn subscribers_notified_on_every_mutation_in_order() {
    let store = AppStore::new(AllParams::default());
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    let first = order.clone();
    store.subscribe(move || first.lock().unwrap().push("first"));
    let second = order.clone();
    store.subscribe(move || second.lock().unwrap().push("second"));

    store.set_running(true);
    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);

    store.set_telemetry(Telemetry::default());
    assert_eq!(order.lock().unwrap().len(), 4);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = AppStore::new(AllParams::default());
    let count = Arc::new(AtomicUsize::new(0));

    let counter = count.clone();
    let id = store.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set_running(true);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    store.unsubscribe(id);
    store.set_running(false);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_can_read_the_store() {
    // Notification runs outside the state lock, so readers inside a
    // listener observe the already-applied mutation.
    let store = Arc::new(AppStore::new(AllParams::default()));
    let seen = Arc::new(std::sync::Mutex::new(None));

    let store_for_listener = store.clone();
    let seen_for_listener = seen.clone();
    store.subscribe(move || {
        *seen_for_listener.lock().unwrap() = Some(store_for_listener.is_running());
    });

    store.set_running(true);
    assert_eq!(*seen.lock().unwrap(), Some(true));
}

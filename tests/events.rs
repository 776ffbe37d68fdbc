use camera_mouse::engine::EngineEvent;
use camera_mouse::events::{
    self, TOPIC_PARAMS, TOPIC_PREVIEW, TOPIC_RECENTER_HOTKEY, TOPIC_TELEMETRY,
};
use camera_mouse::params::AllParams;
use camera_mouse::store::AppStore;
use camera_mouse::telemetry::TrackerState;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};

#[test]
fn telemetry_event_replaces_store_snapshot() {
    let store = AppStore::new(AllParams::default());
    let flag = AtomicBool::new(false);

    let event = EngineEvent::from_json(
        TOPIC_TELEMETRY,
        &json!({"fps": 30.0, "score": 0.8, "tracking": true, "lost": false, "posX": 10, "posY": 20}),
    )
    .unwrap();
    events::apply(event, &store, &flag);

    let telemetry = store.telemetry();
    assert_eq!(telemetry.fps, 30.0);
    assert!(telemetry.tracking_on);
    assert_eq!(telemetry.pos_x, Some(10));
    assert_eq!(telemetry.state(), TrackerState::Tracking);
}

#[test]
fn malformed_telemetry_defaults_instead_of_failing() {
    let event = EngineEvent::from_json(TOPIC_TELEMETRY, &json!({"fps": 12.0})).unwrap();
    let EngineEvent::Telemetry(payload) = event else {
        panic!("expected telemetry event");
    };
    assert_eq!(payload.fps, 12.0);
    assert_eq!(payload.score, 0.0);
    assert!(!payload.lost);
    assert!(!payload.tracking);
    assert_eq!(payload.pos_x, None);
}

#[test]
fn lost_wins_over_tracking_in_state_derivation() {
    let event = EngineEvent::from_json(
        TOPIC_TELEMETRY,
        &json!({"tracking": true, "lost": true}),
    )
    .unwrap();
    let store = AppStore::new(AllParams::default());
    events::apply(event, &store, &AtomicBool::new(false));
    assert_eq!(store.telemetry().state(), TrackerState::Lost);
}

#[test]
fn preview_event_accepts_both_field_casings() {
    let pascal = EngineEvent::from_json(
        TOPIC_PREVIEW,
        &json!({"Data": "abc", "Width": 640, "Height": 480, "Timestamp": "t1"}),
    )
    .unwrap();
    let lower = EngineEvent::from_json(
        TOPIC_PREVIEW,
        &json!({"data": "abc", "width": 640, "height": 480, "timestamp": "t1"}),
    )
    .unwrap();
    assert_eq!(pascal, lower);
}

#[test]
fn empty_preview_payload_keeps_last_frame() {
    let store = AppStore::new(AllParams::default());
    let flag = AtomicBool::new(false);

    let frame = EngineEvent::from_json(
        TOPIC_PREVIEW,
        &json!({"Data": "abc", "Width": 2, "Height": 2, "Timestamp": "t1"}),
    )
    .unwrap();
    events::apply(frame, &store, &flag);
    assert!(store.preview().is_some());

    let empty = EngineEvent::from_json(TOPIC_PREVIEW, &json!({})).unwrap();
    events::apply(empty, &store, &flag);
    assert_eq!(store.preview().unwrap().data, "abc");
}

#[test]
fn params_event_replaces_committed_params() {
    let store = AppStore::new(AllParams::default());
    let flag = AtomicBool::new(false);

    let mut pushed = AllParams::default();
    pushed.clicking.dwell_enabled = true;
    let payload = serde_json::to_value(&pushed).unwrap();
    let event = EngineEvent::from_json(TOPIC_PARAMS, &payload).unwrap();
    events::apply(event, &store, &flag);

    assert_eq!(store.params(), pushed);
    assert_eq!(store.params_rev(), 1);
}

#[test]
fn partial_params_event_fills_defaults() {
    let event = EngineEvent::from_json(
        TOPIC_PARAMS,
        &json!({"clicking": {"dwellEnabled": true}}),
    )
    .unwrap();
    let EngineEvent::ParamsChanged(params) = event else {
        panic!("expected params event");
    };
    assert!(params.clicking.dwell_enabled);
    assert_eq!(params.tracking, AllParams::default().tracking);
    assert_eq!(params.hotkeys.recenter, "F12");
}

#[test]
fn recenter_hotkey_raises_flag_only() {
    let store = AppStore::new(AllParams::default());
    let flag = AtomicBool::new(false);

    let event = EngineEvent::from_json(TOPIC_RECENTER_HOTKEY, &json!(null)).unwrap();
    events::apply(event, &store, &flag);

    assert!(flag.load(Ordering::SeqCst));
    assert_eq!(store.params_rev(), 0);
    assert!(store.preview().is_none());
}

#[test]
fn unknown_topic_is_dropped() {
    assert!(EngineEvent::from_json("service:running", &json!(true)).is_none());
}

use crate::engine::EngineEvent;
use crate::store::AppStore;
use crate::telemetry::{PreviewFrame, Telemetry};
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

pub const TOPIC_PREVIEW: &str = "preview:frame";
pub const TOPIC_TELEMETRY: &str = "telemetry:state";
pub const TOPIC_PARAMS: &str = "params:update";
pub const TOPIC_RECENTER_HOTKEY: &str = "recenter:hotkey";

/// Wire shape of a preview event. The engine emits PascalCase field names;
/// lowercase is accepted for transports that re-serialize. Missing fields
/// default rather than reject (a malformed push must not kill the session).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PreviewPayload {
    #[serde(rename = "Data", alias = "data")]
    pub data: String,
    #[serde(rename = "Width", alias = "width")]
    pub width: u32,
    #[serde(rename = "Height", alias = "height")]
    pub height: u32,
    #[serde(rename = "Timestamp", alias = "timestamp")]
    pub timestamp: String,
}

/// Wire shape of a telemetry event. `state` is derived, never carried.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TelemetryPayload {
    pub fps: f64,
    pub score: f64,
    pub lost: bool,
    pub tracking: bool,
    #[serde(rename = "posX")]
    pub pos_x: Option<i32>,
    #[serde(rename = "posY")]
    pub pos_y: Option<i32>,
}

impl From<TelemetryPayload> for Telemetry {
    fn from(payload: TelemetryPayload) -> Self {
        Telemetry {
            fps: payload.fps,
            score: payload.score,
            tracking_on: payload.tracking,
            lost: payload.lost,
            pos_x: payload.pos_x,
            pos_y: payload.pos_y,
        }
    }
}

impl EngineEvent {
    /// Decode a transport event by topic name. Unknown topics and undecodable
    /// parameter payloads yield `None`; partially-formed preview/telemetry
    /// payloads are defaulted field by field.
    pub fn from_json(topic: &str, payload: &serde_json::Value) -> Option<EngineEvent> {
        match topic {
            TOPIC_PREVIEW => {
                let frame: PreviewPayload = serde_json::from_value(payload.clone())
                    .unwrap_or_default();
                Some(EngineEvent::Preview(frame))
            }
            TOPIC_TELEMETRY => {
                let telemetry: TelemetryPayload = serde_json::from_value(payload.clone())
                    .unwrap_or_default();
                Some(EngineEvent::Telemetry(telemetry))
            }
            TOPIC_PARAMS => match serde_json::from_value(payload.clone()) {
                Ok(params) => Some(EngineEvent::ParamsChanged(params)),
                Err(err) => {
                    tracing::warn!("dropping undecodable params update: {err}");
                    None
                }
            },
            TOPIC_RECENTER_HOTKEY => Some(EngineEvent::RecenterHotkey),
            _ => {
                tracing::debug!(topic, "ignoring unknown event topic");
                None
            }
        }
    }
}

/// Apply one inbound event to the shared store. The recenter hotkey only
/// raises a flag; the UI consumes it on its next frame so both hotkey and
/// button paths go through the single sequencer instance.
pub fn apply(event: EngineEvent, store: &AppStore, recenter_requested: &AtomicBool) {
    match event {
        EngineEvent::Preview(payload) => {
            // Frames without a payload carry no information; keep the last one.
            if payload.data.is_empty() {
                return;
            }
            store.set_preview(Some(PreviewFrame {
                data: payload.data,
                width: payload.width,
                height: payload.height,
                timestamp: payload.timestamp,
            }));
        }
        EngineEvent::Telemetry(payload) => {
            store.set_telemetry(payload.into());
        }
        EngineEvent::ParamsChanged(params) => {
            store.set_params(params);
        }
        EngineEvent::RecenterHotkey => {
            recenter_requested.store(true, Ordering::SeqCst);
        }
    }
}

/// Forward engine events into the store from a background thread, requesting
/// a repaint after each one. Exits when the sender side hangs up.
pub fn spawn_pump(
    rx: Receiver<EngineEvent>,
    store: Arc<AppStore>,
    recenter_requested: Arc<AtomicBool>,
    ctx: eframe::egui::Context,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        for event in rx {
            apply(event, &store, &recenter_requested);
            ctx.request_repaint();
        }
        tracing::debug!("engine event channel closed, pump exiting");
    })
}

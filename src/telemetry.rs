use serde::{Deserialize, Serialize};

/// Derived tracker state, never stored independently: `lost` wins over
/// `tracking_on`, everything else is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackerState {
    Idle,
    Tracking,
    Lost,
}

impl std::fmt::Display for TrackerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerState::Idle => write!(f, "Idle"),
            TrackerState::Tracking => write!(f, "Tracking"),
            TrackerState::Lost => write!(f, "Lost"),
        }
    }
}

/// Latest telemetry snapshot pushed by the engine. Replaced wholesale on
/// every event; the UI never mutates it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Telemetry {
    pub fps: f64,
    pub score: f64,
    pub tracking_on: bool,
    pub lost: bool,
    pub pos_x: Option<i32>,
    pub pos_y: Option<i32>,
}

impl Telemetry {
    pub fn state(&self) -> TrackerState {
        if self.lost {
            TrackerState::Lost
        } else if self.tracking_on {
            TrackerState::Tracking
        } else {
            TrackerState::Idle
        }
    }
}

/// One inbound camera frame: base64-encoded JPEG payload plus its native
/// dimensions. At most one frame is retained; each event replaces the last.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    pub data: String,
    pub width: u32,
    pub height: u32,
    pub timestamp: String,
}

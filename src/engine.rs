use crate::events::{PreviewPayload, TelemetryPayload};
use crate::params::AllParams;
use anyhow::Result;

/// Command surface of the external camera/tracking/pointer engine.
///
/// Every call returns a `Result` so the caller's log-and-continue choice is
/// visible at the call site. No call blocks on tracking work; failures are
/// reported through the returned error, never inferred from elapsed time.
pub trait Engine: Send + Sync {
    fn get_parameters(&self) -> Result<AllParams>;
    /// Persist the full configuration (settings-save path).
    fn save_parameters(&self, params: &AllParams) -> Result<()>;
    /// Push a live configuration change outside the settings-save flow,
    /// e.g. a dwell toggle from the main screen.
    fn update_parameters(&self, params: &AllParams) -> Result<()>;
    fn start(&self) -> Result<()>;
    fn stop(&self) -> Result<()>;
    /// One-shot recalibration of the tracked reference position.
    fn recenter(&self) -> Result<()>;
    fn set_tracking_enabled(&self, enabled: bool) -> Result<()>;
    /// Select a tracking target inside the preview, in the frame's own
    /// pixel coordinate space.
    fn set_pick_point(&self, x: i32, y: i32) -> Result<()>;
}

/// Inbound events from the engine's transport. Unordered relative to
/// command completions.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Preview(PreviewPayload),
    Telemetry(TelemetryPayload),
    ParamsChanged(AllParams),
    RecenterHotkey,
}

/// Stand-in engine for running the front-end without a backend attached.
/// Accepts every command, logs it at debug level and produces no events.
#[derive(Debug, Default)]
pub struct NullEngine;

impl NullEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for NullEngine {
    fn get_parameters(&self) -> Result<AllParams> {
        Ok(AllParams::default())
    }

    fn save_parameters(&self, _params: &AllParams) -> Result<()> {
        tracing::debug!("null engine: save_parameters");
        Ok(())
    }

    fn update_parameters(&self, _params: &AllParams) -> Result<()> {
        tracing::debug!("null engine: update_parameters");
        Ok(())
    }

    fn start(&self) -> Result<()> {
        tracing::debug!("null engine: start");
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        tracing::debug!("null engine: stop");
        Ok(())
    }

    fn recenter(&self) -> Result<()> {
        tracing::debug!("null engine: recenter");
        Ok(())
    }

    fn set_tracking_enabled(&self, enabled: bool) -> Result<()> {
        tracing::debug!(enabled, "null engine: set_tracking_enabled");
        Ok(())
    }

    fn set_pick_point(&self, x: i32, y: i32) -> Result<()> {
        tracing::debug!(x, y, "null engine: set_pick_point");
        Ok(())
    }
}

#![allow(dead_code)]

use anyhow::{bail, Result};
use camera_mouse::engine::Engine;
use camera_mouse::params::AllParams;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Engine double that records every command and can be told to fail
/// individual commands.
#[derive(Default)]
pub struct RecordingEngine {
    pub calls: Mutex<Vec<String>>,
    pub saved: Mutex<Vec<AllParams>>,
    pub fail_save: AtomicBool,
    pub fail_update: AtomicBool,
    pub fail_recenter: AtomicBool,
    pub fail_set_tracking: AtomicBool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

impl Engine for RecordingEngine {
    fn get_parameters(&self) -> Result<AllParams> {
        self.record("get_parameters");
        Ok(AllParams::default())
    }

    fn save_parameters(&self, params: &AllParams) -> Result<()> {
        self.record("save_parameters");
        if self.fail_save.load(Ordering::SeqCst) {
            bail!("save rejected");
        }
        self.saved.lock().unwrap().push(params.clone());
        Ok(())
    }

    fn update_parameters(&self, params: &AllParams) -> Result<()> {
        self.record("update_parameters");
        if self.fail_update.load(Ordering::SeqCst) {
            bail!("update rejected");
        }
        self.saved.lock().unwrap().push(params.clone());
        Ok(())
    }

    fn start(&self) -> Result<()> {
        self.record("start");
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        self.record("stop");
        Ok(())
    }

    fn recenter(&self) -> Result<()> {
        self.record("recenter");
        if self.fail_recenter.load(Ordering::SeqCst) {
            bail!("recenter rejected");
        }
        Ok(())
    }

    fn set_tracking_enabled(&self, enabled: bool) -> Result<()> {
        self.record(format!("set_tracking_enabled({enabled})"));
        if self.fail_set_tracking.load(Ordering::SeqCst) {
            bail!("set_tracking_enabled rejected");
        }
        Ok(())
    }

    fn set_pick_point(&self, x: i32, y: i32) -> Result<()> {
        self.record(format!("set_pick_point({x},{y})"));
        Ok(())
    }
}

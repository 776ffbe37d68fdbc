//! Front-end for a webcam head-tracking mouse controller.
//!
//! The tracking engine (camera capture, template tracking, pointer
//! injection) lives behind the [`engine::Engine`] trait; this crate owns the
//! interaction state around it: the shared [`store::AppStore`], the
//! [`draft::SettingsDraft`] edit/commit model, the
//! [`recenter::RecenterSequencer`] and the [`dwell::DwellHoverTimer`], plus
//! the egui screens driving them.

pub mod draft;
pub mod dwell;
pub mod engine;
pub mod events;
pub mod gui;
pub mod hotkey;
pub mod logging;
pub mod params;
pub mod preview;
pub mod recenter;
pub mod settings_editor;
pub mod store;
pub mod telemetry;

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Shape of the tracked marker drawn over the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    Circle,
    Square,
}

impl Default for MarkerShape {
    fn default() -> Self {
        MarkerShape::Circle
    }
}

impl std::fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerShape::Circle => write!(f, "Circle"),
            MarkerShape::Square => write!(f, "Square"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickType {
    Left,
    Right,
    Double,
}

impl Default for ClickType {
    fn default() -> Self {
        ClickType::Left
    }
}

impl std::fmt::Display for ClickType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClickType::Left => write!(f, "Left"),
            ClickType::Right => write!(f, "Right"),
            ClickType::Double => write!(f, "Double"),
        }
    }
}

pub const TEMPLATE_SIZE_RANGE: RangeInclusive<i32> = 10..=120;
pub const SEARCH_MARGIN_RANGE: RangeInclusive<i32> = 10..=120;
pub const SCORE_THRESHOLD_RANGE: RangeInclusive<f64> = 0.30..=0.95;
pub const TEMPLATE_ALPHA_RANGE: RangeInclusive<f64> = 0.0..=1.0;
pub const SENSITIVITY_RANGE: RangeInclusive<i32> = 1..=100;
pub const DEADZONE_RANGE: RangeInclusive<i32> = 0..=20;
pub const MAX_SPEED_RANGE: RangeInclusive<i32> = 10..=60;
pub const GAIN_RANGE: RangeInclusive<f64> = 0.5..=18.0;
pub const SMOOTHING_RANGE: RangeInclusive<f64> = 0.05..=0.9;
pub const DWELL_TIME_RANGE: RangeInclusive<i32> = 200..=1500;
pub const DWELL_RADIUS_RANGE: RangeInclusive<i32> = 5..=80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingParams {
    pub template_size_px: i32,
    pub search_margin_px: i32,
    pub score_threshold: f64,
    pub adaptive_template: bool,
    pub template_update_alpha: f64,
    pub marker_shape: MarkerShape,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self {
            template_size_px: 30,
            search_margin_px: 30,
            score_threshold: 0.60,
            adaptive_template: true,
            template_update_alpha: 0.20,
            marker_shape: MarkerShape::Circle,
        }
    }
}

/// Expert pointer mapping override. Either fully present or absent; a
/// partially specified override is not representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointerAdvancedParams {
    pub gain_x: f64,
    pub gain_y: f64,
    pub smoothing: f64,
}

impl Default for PointerAdvancedParams {
    fn default() -> Self {
        Self {
            gain_x: 4.0,
            gain_y: 4.0,
            smoothing: 0.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointerParams {
    pub sensitivity: i32,
    pub deadzone_px: i32,
    pub max_speed_px: i32,
    pub advanced: Option<PointerAdvancedParams>,
}

impl Default for PointerParams {
    fn default() -> Self {
        Self {
            sensitivity: 30,
            deadzone_px: 1,
            max_speed_px: 25,
            advanced: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClickingParams {
    pub dwell_enabled: bool,
    pub dwell_time_ms: i32,
    pub dwell_radius_px: i32,
    pub click_type: ClickType,
    pub right_click_toggle: bool,
}

impl Default for ClickingParams {
    fn default() -> Self {
        Self {
            dwell_enabled: false,
            dwell_time_ms: 500,
            dwell_radius_px: 30,
            click_type: ClickType::Left,
            right_click_toggle: false,
        }
    }
}

/// Key-chord strings; registration happens engine-side. An empty string
/// disables the binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotkeysParams {
    pub start_pause: String,
    pub recenter: String,
}

impl Default for HotkeysParams {
    fn default() -> Self {
        Self {
            start_pause: "F11".into(),
            recenter: "F12".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralParams {
    pub auto_start: bool,
    pub dwell_on_startup: bool,
}

/// Full user-tunable configuration. Structural equality (`PartialEq`) is the
/// dirty-check primitive for the settings draft; numeric bounds are enforced
/// at the edit boundary via [`AllParams::clamped`] and the `*_RANGE`
/// constants, not by the model itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllParams {
    pub tracking: TrackingParams,
    pub pointer: PointerParams,
    pub clicking: ClickingParams,
    pub hotkeys: HotkeysParams,
    pub general: GeneralParams,
}

fn clamp_i32(value: i32, range: RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

fn clamp_f64(value: f64, range: RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}

impl AllParams {
    /// Return a copy with every numeric field pulled into its editing-control
    /// bounds. Applied before committing a draft so out-of-range values can
    /// never reach the engine.
    pub fn clamped(&self) -> AllParams {
        let mut out = self.clone();
        out.tracking.template_size_px =
            clamp_i32(out.tracking.template_size_px, TEMPLATE_SIZE_RANGE);
        out.tracking.search_margin_px =
            clamp_i32(out.tracking.search_margin_px, SEARCH_MARGIN_RANGE);
        out.tracking.score_threshold =
            clamp_f64(out.tracking.score_threshold, SCORE_THRESHOLD_RANGE);
        out.tracking.template_update_alpha =
            clamp_f64(out.tracking.template_update_alpha, TEMPLATE_ALPHA_RANGE);
        out.pointer.sensitivity = clamp_i32(out.pointer.sensitivity, SENSITIVITY_RANGE);
        out.pointer.deadzone_px = clamp_i32(out.pointer.deadzone_px, DEADZONE_RANGE);
        out.pointer.max_speed_px = clamp_i32(out.pointer.max_speed_px, MAX_SPEED_RANGE);
        if let Some(advanced) = &mut out.pointer.advanced {
            advanced.gain_x = clamp_f64(advanced.gain_x, GAIN_RANGE);
            advanced.gain_y = clamp_f64(advanced.gain_y, GAIN_RANGE);
            advanced.smoothing = clamp_f64(advanced.smoothing, SMOOTHING_RANGE);
        }
        out.clicking.dwell_time_ms = clamp_i32(out.clicking.dwell_time_ms, DWELL_TIME_RANGE);
        out.clicking.dwell_radius_px =
            clamp_i32(out.clicking.dwell_radius_px, DWELL_RADIUS_RANGE);
        out
    }
}

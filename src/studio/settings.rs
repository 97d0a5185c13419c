//! Light and phone guide settings
//!
//! Persisted settings are read back through [`normalize_settings`], which
//! recovers each field independently: a wrong type or out-of-range value
//! falls back to that field's default without discarding the rest.

use chrono::{DateTime, Utc};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calibration::PhoneGuideCalibration;
use crate::color::{light_surface_color, LightSurface};
use crate::constants::{brightness, guide as guide_consts, temperature};
use crate::guide::{
    compute_guide_size, is_phone_guide_model_id, is_valid_px_per_mm, resolve_placement,
    GuidePlacement, GuideSizeRequest, Orientation, PhoneGuideSize,
};

/// Position sentinel meaning "never placed"
pub const UNPLACED: Point = Point::new(-1.0, -1.0);

/// Phone guide overlay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneGuideSettings {
    pub enabled: bool,
    pub model_id: String,
    pub orientation: Orientation,
    /// Saved guide center, or [`UNPLACED`]
    pub position: Point,
    pub calibration: PhoneGuideCalibration,
}

impl Default for PhoneGuideSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            model_id: guide_consts::FALLBACK_MODEL_ID.to_string(),
            orientation: Orientation::Portrait,
            position: UNPLACED,
            calibration: PhoneGuideCalibration::uncalibrated(),
        }
    }
}

impl PhoneGuideSettings {
    /// Guide size for the current viewport
    pub fn size_in(&self, viewport: Size) -> PhoneGuideSize {
        compute_guide_size(GuideSizeRequest {
            model_id: &self.model_id,
            orientation: self.orientation,
            calibration_px_per_mm: self.calibration.px_per_mm,
            viewport,
        })
    }

    /// Size and placement to render, or `None` when nothing should be drawn
    ///
    /// Nothing is drawn while the guide is disabled or the viewport has not
    /// been measured.
    pub fn layout_in(&self, viewport: Size) -> Option<(PhoneGuideSize, GuidePlacement)> {
        if !self.enabled || viewport.width <= 0.0 || viewport.height <= 0.0 {
            return None;
        }
        let size = self.size_in(viewport);
        Some((size, resolve_placement(self.position, size.size(), viewport)))
    }
}

/// Everything the studio remembers between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightSettings {
    /// Percent, 0–100
    pub brightness: f64,
    /// Kelvin, 2700–9000
    pub temperature: f64,
    /// Whether the control panel is shown
    pub is_visible: bool,
    pub active_preset: Option<String>,
    pub phone_guide: PhoneGuideSettings,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            brightness: brightness::DEFAULT_PERCENT,
            temperature: temperature::DEFAULT_KELVIN,
            is_visible: true,
            active_preset: None,
            phone_guide: PhoneGuideSettings::default(),
        }
    }
}

impl LightSettings {
    /// Color and opacity of the light surface
    pub fn surface(&self) -> LightSurface {
        light_surface_color(self.temperature, self.brightness)
    }
}

pub(crate) fn clamp_brightness(value: f64) -> f64 {
    value.min(brightness::MAX_PERCENT).max(brightness::MIN_PERCENT)
}

pub(crate) fn clamp_temperature(value: f64) -> f64 {
    value.min(temperature::MAX_KELVIN).max(temperature::MIN_KELVIN)
}

fn finite(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|v| v.is_finite())
}

/// Rebuild settings from persisted JSON, keeping every field that checks out
pub fn normalize_settings(input: &Value) -> LightSettings {
    let defaults = LightSettings::default();
    if !input.is_object() {
        return defaults;
    }

    let active_preset = match input.get("activePreset") {
        Some(Value::String(id)) => Some(id.clone()),
        _ => defaults.active_preset,
    };

    LightSettings {
        brightness: finite(input.get("brightness"))
            .map(clamp_brightness)
            .unwrap_or(defaults.brightness),
        temperature: finite(input.get("temperature"))
            .map(clamp_temperature)
            .unwrap_or(defaults.temperature),
        is_visible: input
            .get("isVisible")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.is_visible),
        active_preset,
        phone_guide: sanitize_phone_guide(input.get("phoneGuide")),
    }
}

fn sanitize_phone_guide(input: Option<&Value>) -> PhoneGuideSettings {
    let defaults = PhoneGuideSettings::default();
    let Some(raw) = input.filter(|v| v.is_object()) else {
        return defaults;
    };

    let model_id = raw
        .get("modelId")
        .and_then(Value::as_str)
        .filter(|id| is_phone_guide_model_id(id))
        .map_or(defaults.model_id, str::to_string);

    let orientation = raw
        .get("orientation")
        .and_then(Value::as_str)
        .and_then(Orientation::parse)
        .unwrap_or(defaults.orientation);

    let position = raw.get("position");
    let position = Point::new(
        finite(position.and_then(|p| p.get("x"))).unwrap_or(defaults.position.x),
        finite(position.and_then(|p| p.get("y"))).unwrap_or(defaults.position.y),
    );

    let calibration = raw.get("calibration");
    let px_per_mm = finite(calibration.and_then(|c| c.get("pxPerMm"))).filter(|&px| is_valid_px_per_mm(px));
    let calibrated_at = px_per_mm.and_then(|_| {
        calibration
            .and_then(|c| c.get("calibratedAt"))
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|at| at.with_timezone(&Utc))
    });

    PhoneGuideSettings {
        enabled: raw
            .get("enabled")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.enabled),
        model_id,
        orientation,
        position,
        calibration: PhoneGuideCalibration {
            px_per_mm,
            calibrated_at,
        },
    }
}

//! Studio state transitions
//!
//! Every change to the studio goes through [`reduce`], which takes the
//! current state and an action and returns the next state. Actions that
//! need the current time carry it, so `reduce` stays deterministic.

use chrono::{DateTime, Utc};
use kurbo::Point;

use crate::calibration::PhoneGuideCalibration;
use crate::constants::guide::FALLBACK_MODEL_ID;
use crate::guide::{is_phone_guide_model_id, Orientation};
use crate::studio::presets::{create_preset, default_presets, unique_preset_id, Preset};
use crate::studio::settings::{clamp_brightness, clamp_temperature, LightSettings, PhoneGuideSettings};
use crate::studio::share::ShareParams;

/// Settings plus the preset list they can be switched between
#[derive(Debug, Clone, PartialEq)]
pub struct StudioState {
    pub settings: LightSettings,
    pub presets: Vec<Preset>,
}

impl Default for StudioState {
    fn default() -> Self {
        Self {
            settings: LightSettings::default(),
            presets: default_presets(),
        }
    }
}

/// Fields of a custom preset to overwrite
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetChanges {
    pub name: Option<String>,
    pub brightness: Option<f64>,
    pub temperature: Option<f64>,
}

/// Everything the user can do to the studio
#[derive(Debug, Clone, PartialEq)]
pub enum LightAction {
    SetBrightness(f64),
    SetTemperature(f64),
    /// Relative brightness change, e.g. from arrow keys
    AdjustBrightness(f64),
    /// Relative temperature change, e.g. from arrow keys
    AdjustTemperature(f64),
    ToggleControls,
    SetControlsVisible(bool),
    ApplyPreset(String),
    /// Save the current brightness and temperature as a new preset
    CreatePreset {
        name: String,
        created_at: DateTime<Utc>,
    },
    DeletePreset(String),
    UpdatePreset {
        id: String,
        changes: PresetChanges,
    },
    /// Restore default settings; presets are kept
    ResetSettings,
    LoadShare(ShareParams),
    SetPhoneGuideEnabled(bool),
    SetPhoneGuideModel(String),
    SetPhoneGuideOrientation(Orientation),
    SetPhoneGuidePosition(Point),
    /// `None` or an invalid density clears the calibration
    SetPhoneGuideCalibration {
        px_per_mm: Option<f64>,
        at: DateTime<Utc>,
    },
    /// Reset model, orientation and position; enabled and calibration are kept
    ResetPhoneGuide,
}

fn set_brightness(settings: &mut LightSettings, value: f64) {
    if value.is_finite() {
        settings.brightness = clamp_brightness(value);
        settings.active_preset = None;
    }
}

fn set_temperature(settings: &mut LightSettings, value: f64) {
    if value.is_finite() {
        settings.temperature = clamp_temperature(value);
        settings.active_preset = None;
    }
}

/// Compute the state after `action`
pub fn reduce(state: &StudioState, action: LightAction) -> StudioState {
    let mut next = state.clone();
    let settings = &mut next.settings;

    match action {
        LightAction::SetBrightness(value) => set_brightness(settings, value),
        LightAction::SetTemperature(value) => set_temperature(settings, value),
        LightAction::AdjustBrightness(delta) => {
            let value = settings.brightness + delta;
            set_brightness(settings, value);
        }
        LightAction::AdjustTemperature(delta) => {
            let value = settings.temperature + delta;
            set_temperature(settings, value);
        }
        LightAction::ToggleControls => settings.is_visible = !settings.is_visible,
        LightAction::SetControlsVisible(visible) => settings.is_visible = visible,
        LightAction::ApplyPreset(id) => match next.presets.iter().find(|p| p.id == id) {
            Some(preset) => {
                settings.brightness = preset.brightness;
                settings.temperature = preset.temperature;
                settings.active_preset = Some(id);
            }
            None => log::debug!("ignoring unknown preset '{id}'"),
        },
        LightAction::CreatePreset { name, created_at } => {
            let mut preset = create_preset(name, settings.brightness, settings.temperature, created_at);
            preset.id = unique_preset_id(&preset.id, &next.presets);
            next.presets.push(preset);
        }
        LightAction::DeletePreset(id) => {
            next.presets.retain(|p| p.id != id);
            if settings.active_preset.as_deref() == Some(id.as_str()) {
                settings.active_preset = None;
            }
        }
        LightAction::UpdatePreset { id, changes } => {
            if let Some(preset) = next.presets.iter_mut().find(|p| p.id == id && p.is_custom) {
                if let Some(name) = changes.name {
                    preset.name = name;
                }
                if let Some(brightness) = changes.brightness {
                    preset.brightness = brightness;
                }
                if let Some(temperature) = changes.temperature {
                    preset.temperature = temperature;
                }
            }
        }
        LightAction::ResetSettings => *settings = LightSettings::default(),
        LightAction::LoadShare(params) => {
            settings.brightness = params.brightness as f64;
            settings.temperature = params.temperature as f64;
            settings.active_preset = None;
        }
        LightAction::SetPhoneGuideEnabled(enabled) => settings.phone_guide.enabled = enabled,
        LightAction::SetPhoneGuideModel(model_id) => {
            settings.phone_guide.model_id = if is_phone_guide_model_id(&model_id) {
                model_id
            } else {
                FALLBACK_MODEL_ID.to_string()
            };
        }
        LightAction::SetPhoneGuideOrientation(orientation) => {
            settings.phone_guide.orientation = orientation;
        }
        LightAction::SetPhoneGuidePosition(position) => {
            let current = &mut settings.phone_guide.position;
            if position.x.is_finite() {
                current.x = position.x;
            }
            if position.y.is_finite() {
                current.y = position.y;
            }
        }
        LightAction::SetPhoneGuideCalibration { px_per_mm, at } => {
            settings.phone_guide.calibration = match px_per_mm {
                Some(px) => PhoneGuideCalibration::measured(px, at),
                None => PhoneGuideCalibration::uncalibrated(),
            };
        }
        LightAction::ResetPhoneGuide => {
            let defaults = PhoneGuideSettings::default();
            let guide = &mut settings.phone_guide;
            guide.model_id = defaults.model_id;
            guide.orientation = defaults.orientation;
            guide.position = defaults.position;
        }
    }

    next
}

//! Built-in and user-defined light presets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{LightError, Result};

/// A saved brightness and temperature pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub brightness: f64,
    pub temperature: f64,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Accept RFC 3339 strings; anything else (including `""`) becomes `None`
fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|at| at.with_timezone(&Utc)))
}

fn builtin(id: &str, name: &str, brightness: f64, temperature: f64) -> Preset {
    Preset {
        id: id.to_string(),
        name: name.to_string(),
        brightness,
        temperature,
        is_custom: false,
        created_at: None,
    }
}

/// The six built-in presets, in keyboard shortcut order
pub fn default_presets() -> Vec<Preset> {
    vec![
        builtin("daylight", "Daylight", 100.0, 6500.0),
        builtin("soft-white", "Soft White", 90.0, 5500.0),
        builtin("warm-glow", "Warm Glow", 85.0, 3500.0),
        builtin("golden-hour", "Golden Hour", 75.0, 3000.0),
        builtin("cool-studio", "Cool Studio", 95.0, 7500.0),
        builtin("sunset", "Sunset Warmth", 70.0, 2700.0),
    ]
}

/// Create a custom preset stamped with `at`
pub fn create_preset(name: impl Into<String>, brightness: f64, temperature: f64, at: DateTime<Utc>) -> Preset {
    Preset {
        id: format!("custom-{}", at.timestamp_millis()),
        name: name.into(),
        brightness,
        temperature,
        is_custom: true,
        created_at: Some(at),
    }
}

/// `base`, or `base-2`, `base-3`, ... if an earlier one is taken
pub fn unique_preset_id(base: &str, presets: &[Preset]) -> String {
    let taken = |id: &str| presets.iter().any(|p| p.id == id);
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|id| !taken(id))
        .unwrap_or_else(|| base.to_string())
}

/// Fresh id for an imported preset
pub(crate) fn imported_preset_id(at: DateTime<Utc>) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("imported-{}-{}", at.timestamp_millis(), &suffix[..8])
}

/// Only the user's own presets
pub fn custom_presets(presets: &[Preset]) -> Vec<Preset> {
    presets.iter().filter(|p| p.is_custom).cloned().collect()
}

/// Pretty-printed JSON of the custom presets
pub fn export_presets_json(presets: &[Preset]) -> Result<String> {
    serde_json::to_string_pretty(&custom_presets(presets))
        .map_err(|e| LightError::serialization("exporting presets", e))
}

/// Parse presets exported by [`export_presets_json`] or written by hand
///
/// The payload must be a JSON array. Entries that are not presets are
/// skipped; everything imported is marked custom, and missing ids are
/// generated.
pub fn import_presets_json(json: &str) -> Result<Vec<Preset>> {
    let parsed: Value = serde_json::from_str(json).map_err(|e| LightError::PresetImport {
        reason: e.to_string(),
    })?;
    let Value::Array(entries) = parsed else {
        return Err(LightError::PresetImport {
            reason: "expected a JSON array of presets".to_string(),
        });
    };

    let now = Utc::now();
    let imported = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Preset>(entry) {
            Ok(preset) => Some(preset),
            Err(e) => {
                log::warn!("skipping preset #{index} during import: {e}");
                None
            }
        })
        .map(|mut preset| {
            preset.is_custom = true;
            if preset.id.is_empty() {
                preset.id = imported_preset_id(now);
            }
            preset
        })
        .collect();

    Ok(imported)
}

//! Configuration for the ring light studio.
//!
//! [`StudioConfig`] holds the tunables a [`LightStore`](crate::studio::LightStore)
//! reads: save debounce timings, the studio path used in share links, and
//! whether keyboard shortcuts are handled. The default preset is not part of
//! the config; it lives in the store's storage next to the other user data.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use ring_light::StudioConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = StudioConfig::from_json_file(Path::new("studio.json"))?;
//!
//! // Or use defaults
//! let config = StudioConfig::default();
//! # Ok::<(), ring_light::LightError>(())
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{persistence, share};
use crate::error::{LightError, Result};

/// Studio tunables.
///
/// Missing fields fall back to their defaults when loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudioConfig {
    /// Quiet period before settings are written, in milliseconds
    pub settings_save_debounce_ms: u64,

    /// Quiet period before a dragged guide's center is written, in milliseconds
    pub position_save_debounce_ms: u64,

    /// Path share links point at
    pub studio_path: String,

    /// Handle keyboard shortcuts in the studio
    pub shortcuts_enabled: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            settings_save_debounce_ms: persistence::SETTINGS_SAVE_DEBOUNCE.as_millis() as u64,
            position_save_debounce_ms: persistence::POSITION_SAVE_DEBOUNCE.as_millis() as u64,
            studio_path: share::STUDIO_PATH.to_string(),
            shortcuts_enabled: true,
        }
    }
}

impl StudioConfig {
    pub fn settings_save_debounce(&self) -> Duration {
        Duration::from_millis(self.settings_save_debounce_ms)
    }

    pub fn position_save_debounce(&self) -> Duration {
        Duration::from_millis(self.position_save_debounce_ms)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LightError::storage(path.display().to_string(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| LightError::serialization(format!("reading {}", path.display()), e))
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LightError::serialization("writing studio config", e))?;
        std::fs::write(path, json).map_err(|e| LightError::storage(path.display().to_string(), e))
    }
}

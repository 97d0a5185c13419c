//! Studio store: state, persistence and debounced saving
//!
//! [`LightStore`] owns the [`StudioState`] and a [`KeyValueStorage`]. Preset
//! changes are written immediately; settings changes are written once the
//! save debounce has elapsed. Time is passed in as [`Instant`]s so hosts
//! drive flushing from their own event loop.

use std::time::{Duration, Instant};

use chrono::Utc;
use kurbo::{Point, Size};
use serde_json::Value;

use crate::config::StudioConfig;
use crate::constants::persistence::{CUSTOM_PRESETS_KEY, DEFAULT_PRESET_KEY, SETTINGS_KEY};
use crate::error::{LightError, Result};
use crate::guide::pending_center;
use crate::studio::presets::{
    custom_presets, default_presets, export_presets_json, import_presets_json, imported_preset_id, Preset,
};
use crate::studio::reducer::{reduce, LightAction, StudioState};
use crate::studio::settings::{normalize_settings, LightSettings};
use crate::studio::share::{parse_share_query, share_url_at};
use crate::studio::shortcuts::{KeyPress, Shortcut};
use crate::studio::storage::KeyValueStorage;

/// Fires once `delay` has passed since the last touch
#[derive(Debug, Clone, Copy)]
pub struct SaveDebounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl SaveDebounce {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Restart the quiet period from `now`
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }
}

/// Debounced saving of the guide center while it is being dragged
#[derive(Debug, Clone, Copy)]
pub struct PositionSaver {
    debounce: SaveDebounce,
    pending: Option<Point>,
}

impl PositionSaver {
    pub fn new(delay: Duration) -> Self {
        Self {
            debounce: SaveDebounce::new(delay),
            pending: None,
        }
    }

    /// Note the guide's new top-left corner
    ///
    /// Moves under half a pixel from `saved` cancel any pending save.
    pub fn propose(&mut self, top_left: Point, saved: Point, size: Size, viewport: Size, now: Instant) {
        match pending_center(top_left, saved, size, viewport) {
            Some(center) => {
                self.pending = Some(center);
                self.debounce.touch(now);
            }
            None => {
                self.pending = None;
                self.debounce.clear();
            }
        }
    }

    /// Center to save, once the guide has been still for the delay
    pub fn take_due(&mut self, now: Instant) -> Option<Point> {
        if !self.debounce.is_due(now) {
            return None;
        }
        self.debounce.clear();
        self.pending.take()
    }
}

/// Studio state bound to a storage backend
#[derive(Debug)]
pub struct LightStore<S: KeyValueStorage> {
    state: StudioState,
    storage: S,
    config: StudioConfig,
    settings_save: SaveDebounce,
}

impl<S: KeyValueStorage> LightStore<S> {
    /// Hydrate from storage, falling back to defaults for anything unreadable
    pub fn load(storage: S, config: StudioConfig) -> Self {
        let settings = match read_json(&storage, SETTINGS_KEY) {
            Some(value) => normalize_settings(&value),
            None => LightSettings::default(),
        };

        let mut presets = default_presets();
        if let Some(value) = read_json(&storage, CUSTOM_PRESETS_KEY) {
            match serde_json::from_value::<Vec<Preset>>(value) {
                Ok(custom) => presets.extend(custom),
                Err(e) => log::warn!("discarding stored custom presets: {e}"),
            }
        }

        let settings_save = SaveDebounce::new(config.settings_save_debounce());
        Self {
            state: StudioState { settings, presets },
            storage,
            config,
            settings_save,
        }
    }

    pub fn state(&self) -> &StudioState {
        &self.state
    }

    pub fn settings(&self) -> &LightSettings {
        &self.state.settings
    }

    pub fn presets(&self) -> &[Preset] {
        &self.state.presets
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Saver for dragging the phone guide, using the configured delay
    pub fn position_saver(&self) -> PositionSaver {
        PositionSaver::new(self.config.position_save_debounce())
    }

    /// Apply an action now
    pub fn dispatch(&mut self, action: LightAction) -> Result<()> {
        self.dispatch_at(action, Instant::now())
    }

    /// Apply an action at `now`
    ///
    /// Returns an error only when the preset list changed and could not be
    /// written; the in-memory state is updated either way.
    pub fn dispatch_at(&mut self, action: LightAction, now: Instant) -> Result<()> {
        let next = reduce(&self.state, action);
        let presets_changed = next.presets != self.state.presets;
        let settings_changed = next.settings != self.state.settings;
        self.state = next;

        if settings_changed {
            self.settings_save.touch(now);
        }
        if presets_changed {
            self.save_presets()?;
        }
        Ok(())
    }

    /// Settings are waiting for the debounce before being written
    pub fn has_unsaved_settings(&self) -> bool {
        self.settings_save.is_pending()
    }

    /// Write settings if the debounce has elapsed; returns whether it wrote
    pub fn flush_due(&mut self, now: Instant) -> Result<bool> {
        if !self.settings_save.is_due(now) {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Write settings immediately
    pub fn flush(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.state.settings)
            .map_err(|e| LightError::serialization("saving settings", e))?;
        self.storage.set(SETTINGS_KEY, &json)?;
        self.settings_save.clear();
        log::debug!("settings saved ({} bytes)", json.len());
        Ok(())
    }

    fn save_presets(&mut self) -> Result<()> {
        let json = serde_json::to_string(&custom_presets(&self.state.presets))
            .map_err(|e| LightError::serialization("saving presets", e))?;
        self.storage.set(CUSTOM_PRESETS_KEY, &json)
    }

    /// Create a preset from the current light, stamped with the current time
    pub fn create_preset(&mut self, name: impl Into<String>) -> Result<()> {
        self.dispatch(LightAction::CreatePreset {
            name: name.into(),
            created_at: Utc::now(),
        })
    }

    /// Save or clear the guide calibration, stamped with the current time
    pub fn set_calibration(&mut self, px_per_mm: Option<f64>) -> Result<()> {
        self.dispatch(LightAction::SetPhoneGuideCalibration {
            px_per_mm,
            at: Utc::now(),
        })
    }

    /// Apply the preset at a keyboard index (0-based)
    pub fn apply_preset_index(&mut self, index: usize) -> Result<()> {
        match self.state.presets.get(index) {
            Some(preset) => {
                let id = preset.id.clone();
                self.dispatch(LightAction::ApplyPreset(id))
            }
            None => Ok(()),
        }
    }

    /// Handle a key press from the studio
    ///
    /// Returns the matched shortcut so the host can act on the ones without
    /// a state change (fullscreen). Nothing matches while shortcuts are
    /// disabled in the config.
    pub fn handle_key(&mut self, press: &KeyPress) -> Result<Option<Shortcut>> {
        if !self.config.shortcuts_enabled {
            return Ok(None);
        }
        let Some(shortcut) = Shortcut::from_key(press) else {
            return Ok(None);
        };
        if let Some(action) = shortcut.to_action(&self.state) {
            self.dispatch(action)?;
        }
        Ok(Some(shortcut))
    }

    /// Share URL for the current light
    pub fn share_url(&self, origin: &str) -> String {
        share_url_at(origin, &self.config.studio_path, &self.state.settings)
    }

    /// Apply brightness and temperature from a share link query
    ///
    /// Returns whether the query held valid values.
    pub fn load_from_query(&mut self, query: &str) -> Result<bool> {
        match parse_share_query(query) {
            Some(params) => {
                self.dispatch(LightAction::LoadShare(params))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Append presets from an exported JSON payload; returns how many were added
    pub fn import_presets(&mut self, json: &str) -> Result<usize> {
        let imported = import_presets_json(json)?;
        let count = imported.len();
        let now = Utc::now();
        for mut preset in imported {
            if self.state.presets.iter().any(|p| p.id == preset.id) {
                let fresh = imported_preset_id(now);
                log::debug!("imported preset id '{}' already in use, renamed to '{fresh}'", preset.id);
                preset.id = fresh;
            }
            self.state.presets.push(preset);
        }
        self.save_presets()?;
        Ok(count)
    }

    pub fn export_presets(&self) -> Result<String> {
        export_presets_json(&self.state.presets)
    }

    /// Preset applied when the studio opens, if one was chosen
    pub fn default_preset(&self) -> Result<Option<String>> {
        self.storage.get(DEFAULT_PRESET_KEY)
    }

    pub fn set_default_preset(&mut self, preset_id: Option<&str>) -> Result<()> {
        match preset_id {
            Some(id) if !self.state.presets.iter().any(|p| p.id == id) => {
                Err(LightError::UnknownPreset { id: id.to_string() })
            }
            Some(id) => self.storage.set(DEFAULT_PRESET_KEY, id),
            None => self.storage.remove(DEFAULT_PRESET_KEY),
        }
    }

    /// Forget everything stored and return to a fresh studio
    pub fn clear_stored_data(&mut self) -> Result<()> {
        for key in [SETTINGS_KEY, CUSTOM_PRESETS_KEY, DEFAULT_PRESET_KEY] {
            self.storage.remove(key)?;
        }
        self.state = StudioState::default();
        self.settings_save.clear();
        Ok(())
    }
}

fn read_json<S: KeyValueStorage>(storage: &S, key: &str) -> Option<Value> {
    let text = match storage.get(key) {
        Ok(text) => text?,
        Err(e) => {
            log::warn!("could not read '{key}': {e}");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed '{key}': {e}");
            None
        }
    }
}

//! Studio state module
//!
//! This module holds the persisted light settings, the preset list, the
//! action reducer and the store that ties them to a storage backend, plus
//! share links and keyboard shortcuts.

pub mod presets;
pub mod reducer;
pub mod settings;
pub mod share;
pub mod shortcuts;
pub mod storage;
pub mod store;

pub use presets::{
    create_preset, default_presets, export_presets_json, import_presets_json, unique_preset_id, Preset,
};
pub use reducer::{reduce, LightAction, PresetChanges, StudioState};
pub use settings::{normalize_settings, LightSettings, PhoneGuideSettings, UNPLACED};
pub use share::{
    generate_share_url, parse_share_query, share_link_for, share_redirect, share_url_at,
    ShareParams,
};
pub use shortcuts::{party_temperature, KeyPress, KonamiTracker, Shortcut};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, NoopStorage};
pub use store::{LightStore, PositionSaver, SaveDebounce};

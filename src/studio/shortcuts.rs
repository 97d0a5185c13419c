//! Keyboard control of the studio

use crate::constants::{brightness, temperature};
use crate::studio::reducer::{LightAction, StudioState};

/// A key event as delivered by the host
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPress {
    /// Key name, e.g. `"h"`, `" "`, `"ArrowUp"`
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    /// Focus is in an input or text area
    pub in_text_field: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn in_text_field(mut self) -> Self {
        self.in_text_field = true;
        self
    }

    fn has_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleControls,
    Reset,
    ToggleFullscreen,
    /// 0-based index into the preset list
    ApplyPreset(usize),
    BrightnessUp,
    BrightnessDown,
    Warmer,
    Cooler,
}

impl Shortcut {
    /// Shortcut bound to `press`, if any
    pub fn from_key(press: &KeyPress) -> Option<Self> {
        if press.in_text_field {
            return None;
        }

        let key = press.key.to_lowercase();
        let shortcut = match key.as_str() {
            "h" | " " => Self::ToggleControls,
            "r" if !press.has_modifier() => Self::Reset,
            "f" if !press.has_modifier() => Self::ToggleFullscreen,
            "1" | "2" | "3" | "4" | "5" | "6" => {
                let digit = key.parse::<usize>().ok()?;
                Self::ApplyPreset(digit - 1)
            }
            "arrowup" => Self::BrightnessUp,
            "arrowdown" => Self::BrightnessDown,
            "arrowleft" => Self::Warmer,
            "arrowright" => Self::Cooler,
            _ => return None,
        };
        Some(shortcut)
    }

    /// Studio action for this shortcut
    ///
    /// Fullscreen is handled by the host and has no action; a preset index
    /// past the end of the list yields none.
    pub fn to_action(self, state: &StudioState) -> Option<LightAction> {
        match self {
            Self::ToggleControls => Some(LightAction::ToggleControls),
            Self::Reset => Some(LightAction::ResetSettings),
            Self::ToggleFullscreen => None,
            Self::ApplyPreset(index) => state
                .presets
                .get(index)
                .map(|preset| LightAction::ApplyPreset(preset.id.clone())),
            Self::BrightnessUp => Some(LightAction::AdjustBrightness(brightness::STEP_PERCENT)),
            Self::BrightnessDown => Some(LightAction::AdjustBrightness(-brightness::STEP_PERCENT)),
            Self::Warmer => Some(LightAction::AdjustTemperature(-temperature::STEP_KELVIN)),
            Self::Cooler => Some(LightAction::AdjustTemperature(temperature::STEP_KELVIN)),
        }
    }
}

const KONAMI_SEQUENCE: [&str; 10] = [
    "arrowup",
    "arrowup",
    "arrowdown",
    "arrowdown",
    "arrowleft",
    "arrowright",
    "arrowleft",
    "arrowright",
    "b",
    "a",
];

/// Watches key presses for the party mode code
#[derive(Debug, Clone, Copy, Default)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key; returns true when it completes the code
    ///
    /// A wrong key starts the sequence over from the beginning.
    pub fn press(&mut self, key: &str) -> bool {
        if key.eq_ignore_ascii_case(KONAMI_SEQUENCE[self.progress]) {
            self.progress += 1;
            if self.progress == KONAMI_SEQUENCE.len() {
                self.progress = 0;
                return true;
            }
        } else {
            self.progress = 0;
        }
        false
    }
}

/// Temperature shown at `step` of the party cycle
pub fn party_temperature(step: usize) -> f64 {
    temperature::PARTY_KELVIN[step % temperature::PARTY_KELVIN.len()]
}

//! Reference values for the light surface and the phone guide
//!
//! This module contains compile-time constants for color temperature,
//! brightness, guide sizing and persistence, grouped by concern.

/// Color temperature range and stepping
pub mod temperature {
    /// Warmest supported temperature in Kelvin
    pub const MIN_KELVIN: f64 = 2700.0;

    /// Coolest supported temperature in Kelvin
    pub const MAX_KELVIN: f64 = 9000.0;

    /// Default temperature for a fresh studio
    pub const DEFAULT_KELVIN: f64 = 5500.0;

    /// Slider and keyboard step
    pub const STEP_KELVIN: f64 = 100.0;

    /// Temperatures cycled through by party mode
    pub const PARTY_KELVIN: [f64; 6] = [2700.0, 3500.0, 5000.0, 6500.0, 8000.0, 9000.0];
}

/// Brightness range and stepping, in percent
pub mod brightness {
    pub const MIN_PERCENT: f64 = 0.0;
    pub const MAX_PERCENT: f64 = 100.0;
    pub const DEFAULT_PERCENT: f64 = 100.0;

    /// Arrow-key step
    pub const STEP_PERCENT: f64 = 5.0;
}

/// Phone guide sizing parameters
pub mod guide {
    /// Share of the viewport's short edge targeted by the guide's long edge
    pub const FALLBACK_LONG_EDGE_FRACTION: f64 = 0.48;

    /// Absolute bounds for the uncalibrated long-edge target
    pub const FALLBACK_LONG_EDGE_MIN_PX: f64 = 180.0;
    pub const FALLBACK_LONG_EDGE_MAX_PX: f64 = 420.0;

    /// Neither guide dimension may exceed this share of the viewport
    pub const MAX_VIEWPORT_FRACTION: f64 = 0.75;

    /// Corner radius bounds in pixels
    pub const CORNER_RADIUS_MIN_PX: f64 = 12.0;
    pub const CORNER_RADIUS_MAX_PX: f64 = 44.0;

    /// Safe-area cutout corner radius floor and minimum ratio
    pub const SAFE_AREA_RADIUS_MIN_PX: f64 = 8.0;
    pub const SAFE_AREA_RADIUS_MIN_RATIO: f64 = 0.35;

    /// Moves smaller than this are not persisted
    pub const REPOSITION_THRESHOLD_PX: f64 = 0.5;

    /// Luminance above which the outline switches to a dark stroke
    pub const DARK_OUTLINE_LUMINANCE: f64 = 0.62;

    /// Model used when an unknown id is requested
    pub const FALLBACK_MODEL_ID: &str = "standard";
}

/// Pixel density calibration
pub mod calibration {
    /// Accepted pixels-per-millimetre range, inclusive on both ends
    pub const MIN_PX_PER_MM: f64 = 0.8;
    pub const MAX_PX_PER_MM: f64 = 10.0;

    /// Calibration slider range and step
    pub const SLIDER_MAX_PX_PER_MM: f64 = 8.0;
    pub const SLIDER_STEP_PX_PER_MM: f64 = 0.02;

    /// Starting slider value when nothing is saved
    pub const DEFAULT_DRAFT_PX_PER_MM: f64 = 3.0;

    /// ID-1 bank card width used as the physical reference
    pub const CARD_WIDTH_MM: f64 = 85.6;

    /// Bounds of the on-screen card preview bar
    pub const CARD_PREVIEW_MIN_PX: f64 = 76.0;
    pub const CARD_PREVIEW_MAX_PX: f64 = 340.0;
}

/// Persistence keys and timing
pub mod persistence {
    use std::time::Duration;

    pub const SETTINGS_KEY: &str = "glowup-settings";
    pub const CUSTOM_PRESETS_KEY: &str = "glowup-custom-presets";
    pub const DEFAULT_PRESET_KEY: &str = "glowup-default-preset";

    /// Quiet period before settings are written
    pub const SETTINGS_SAVE_DEBOUNCE: Duration = Duration::from_millis(300);

    /// Quiet period after a drag before the guide center is saved
    pub const POSITION_SAVE_DEBOUNCE: Duration = Duration::from_millis(150);
}

/// Share link layout
pub mod share {
    pub const STUDIO_PATH: &str = "/studio";
    pub const BRIGHTNESS_PARAM: &str = "b";
    pub const TEMPERATURE_PARAM: &str = "t";
}

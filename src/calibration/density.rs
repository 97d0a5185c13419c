//! Screen pixel density calibration
//!
//! The user holds a bank card against the screen and resizes a preview bar
//! until it matches the card. The slider value is the display's density in
//! pixels per millimetre.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::calibration::{
    CARD_PREVIEW_MAX_PX, CARD_PREVIEW_MIN_PX, CARD_WIDTH_MM, DEFAULT_DRAFT_PX_PER_MM, MIN_PX_PER_MM,
    SLIDER_MAX_PX_PER_MM, SLIDER_STEP_PX_PER_MM,
};
use crate::guide::sizing::is_valid_px_per_mm;

/// Saved calibration; `px_per_mm == None` means uncalibrated
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneGuideCalibration {
    pub px_per_mm: Option<f64>,
    pub calibrated_at: Option<DateTime<Utc>>,
}

impl PhoneGuideCalibration {
    /// No calibration saved
    pub fn uncalibrated() -> Self {
        Self::default()
    }

    /// Record a measured density
    ///
    /// Values rejected by [`is_valid_px_per_mm`] clear the calibration
    /// instead of being stored.
    pub fn measured(px_per_mm: f64, at: DateTime<Utc>) -> Self {
        if is_valid_px_per_mm(px_per_mm) {
            Self {
                px_per_mm: Some(px_per_mm),
                calibrated_at: Some(at),
            }
        } else {
            log::debug!("rejecting calibration {px_per_mm} px/mm");
            Self::uncalibrated()
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.px_per_mm.is_some()
    }

    /// Starting value for the calibration slider
    pub fn draft_px_per_mm(&self) -> f64 {
        slider_px_per_mm(self.px_per_mm.unwrap_or(DEFAULT_DRAFT_PX_PER_MM))
    }

    /// Status line shown next to the calibration controls
    pub fn status_text(&self) -> String {
        match self.px_per_mm {
            Some(px) => format!("Saved ({px:.2} px/mm)"),
            None => "No calibration saved".to_string(),
        }
    }
}

/// Nearest value the calibration slider can show
///
/// Clamps to the slider range and snaps to its step, counted from the
/// slider minimum. Saved densities above the slider maximum are still valid
/// calibrations; only the slider position is limited.
pub fn slider_px_per_mm(value: f64) -> f64 {
    let clamped = value.min(SLIDER_MAX_PX_PER_MM).max(MIN_PX_PER_MM);
    let steps = ((clamped - MIN_PX_PER_MM) / SLIDER_STEP_PX_PER_MM).round();
    (MIN_PX_PER_MM + steps * SLIDER_STEP_PX_PER_MM).min(SLIDER_MAX_PX_PER_MM)
}

/// Width in pixels of the reference card preview at a given density
pub fn card_preview_width(px_per_mm: f64) -> f64 {
    (px_per_mm * CARD_WIDTH_MM).min(CARD_PREVIEW_MAX_PX).max(CARD_PREVIEW_MIN_PX)
}

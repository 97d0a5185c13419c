//! Display calibration module
//!
//! This module records the user's measured screen density so the phone
//! guide can be drawn at true physical size.

pub mod density;

pub use density::{card_preview_width, slider_px_per_mm, PhoneGuideCalibration};

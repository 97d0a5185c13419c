//! Color temperature module
//!
//! This module converts light color temperatures into display colors
//! and groups them into named bands for the controls.

pub mod conversion;
pub mod temperature;

pub use conversion::{kelvin_to_rgb, light_surface_color, rgb_to_css, rgb_to_hex, LightSurface};
pub use temperature::{temperature_label, TemperatureBand};

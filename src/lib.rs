//! # Ring Light
//!
//! A Rust crate for turning a screen into a virtual ring light.
//!
//! This library provides the light's behavior independent of any UI:
//! - Converting color temperatures to display colors
//! - Sizing a phone-shaped positioning guide at true physical size
//! - Keeping the guide inside the viewport while it is dragged
//! - Managing presets, persisted settings and share links
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use ring_light::{compute_guide_size, kelvin_to_rgb, GuideSizeRequest, Orientation};
//!
//! let warm = kelvin_to_rgb(2700.0);
//! assert_eq!((warm.red, warm.green, warm.blue), (255, 121, 87));
//!
//! let guide = compute_guide_size(GuideSizeRequest {
//!     model_id: "iphone-15-pro",
//!     orientation: Orientation::Portrait,
//!     calibration_px_per_mm: Some(4.0),
//!     viewport: Size::new(1920.0, 1080.0),
//! });
//! assert!(guide.using_calibration);
//! ```

pub mod calibration;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod guide;
pub mod studio;

pub use calibration::PhoneGuideCalibration;
pub use color::{kelvin_to_rgb, light_surface_color, rgb_to_css, rgb_to_hex, temperature_label, LightSurface};
pub use config::StudioConfig;
pub use error::{LightError, Result};
pub use guide::{
    clamp_guide_center, compute_guide_size, get_phone_guide_model, GuideSizeRequest, Orientation,
    PhoneGuideModel, PhoneGuideSize, PHONE_GUIDE_MODELS,
};
pub use studio::{LightAction, LightSettings, LightStore, Preset, StudioState};

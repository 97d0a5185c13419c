//! On-screen size and bounds of the phone guide
//!
//! Converts a model's physical size into pixels, either from a measured
//! calibration or from a viewport-relative estimate, and keeps the guide
//! inside the viewport while it is dragged.
//!
//! All functions are pure and cheap enough to run on every drag frame and
//! resize event. Viewports are plain [`Size`] values in CSS pixels; a zero
//! viewport means "not measured yet" and yields a zero-sized guide.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

use crate::constants::{calibration, guide};
use crate::guide::models::get_phone_guide_model;

/// Which way the phone is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Parse a persisted orientation value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "portrait" => Some(Orientation::Portrait),
            "landscape" => Some(Orientation::Landscape),
            _ => None,
        }
    }
}

/// Computed on-screen guide dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneGuideSize {
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    /// Density actually used, after any downscale
    pub px_per_mm: f64,
    /// True when `px_per_mm` came from a user calibration
    pub using_calibration: bool,
}

impl PhoneGuideSize {
    /// Width and height as a [`Size`]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Inputs for [`compute_guide_size`]
#[derive(Debug, Clone, Copy)]
pub struct GuideSizeRequest<'a> {
    pub model_id: &'a str,
    pub orientation: Orientation,
    pub calibration_px_per_mm: Option<f64>,
    pub viewport: Size,
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Check a calibration density against the accepted range
///
/// This is the only validation gate for calibration input.
pub fn is_valid_px_per_mm(value: f64) -> bool {
    value.is_finite()
        && (calibration::MIN_PX_PER_MM..=calibration::MAX_PX_PER_MM).contains(&value)
}

/// Compute the on-screen size of the guide
///
/// Without a valid calibration the guide's long edge targets 48% of the
/// viewport's short edge, clamped to [180, 420] px. Either way neither
/// dimension may exceed 75% of the viewport; when it would, width, height
/// and density are scaled down together.
pub fn compute_guide_size(request: GuideSizeRequest<'_>) -> PhoneGuideSize {
    let model = get_phone_guide_model(request.model_id);
    let viewport = request.viewport;

    let (width_mm, height_mm) = match request.orientation {
        Orientation::Portrait => (model.width_mm, model.height_mm),
        Orientation::Landscape => (model.height_mm, model.width_mm),
    };

    let long_edge_mm = width_mm.max(height_mm);
    let viewport_short_edge = viewport.width.min(viewport.height);
    let target_long_px = clamp(
        viewport_short_edge * guide::FALLBACK_LONG_EDGE_FRACTION,
        guide::FALLBACK_LONG_EDGE_MIN_PX,
        guide::FALLBACK_LONG_EDGE_MAX_PX,
    );
    let fallback_px_per_mm = target_long_px / long_edge_mm;

    let calibrated = request.calibration_px_per_mm.filter(|&px| is_valid_px_per_mm(px));
    if calibrated.is_none() {
        if let Some(rejected) = request.calibration_px_per_mm {
            log::debug!("ignoring out-of-range calibration {rejected} px/mm");
        }
    }
    let using_calibration = calibrated.is_some();
    let mut px_per_mm = calibrated.unwrap_or(fallback_px_per_mm);

    let mut width = width_mm * px_per_mm;
    let mut height = height_mm * px_per_mm;

    let max_width = viewport.width * guide::MAX_VIEWPORT_FRACTION;
    let max_height = viewport.height * guide::MAX_VIEWPORT_FRACTION;
    let downscale = 1f64.min(max_width / width).min(max_height / height);

    width *= downscale;
    height *= downscale;
    px_per_mm *= downscale;

    PhoneGuideSize {
        width,
        height,
        corner_radius: clamp(
            width.min(height) * model.corner_radius_ratio,
            guide::CORNER_RADIUS_MIN_PX,
            guide::CORNER_RADIUS_MAX_PX,
        ),
        px_per_mm,
        using_calibration,
    }
}

/// Clamp a guide center so the whole guide stays inside the viewport
///
/// When the guide is larger than the viewport on an axis, the center is
/// pinned to the half-size on that axis.
pub fn clamp_guide_center(center: Point, size: Size, viewport: Size) -> Point {
    let half_width = size.width / 2.0;
    let half_height = size.height / 2.0;

    Point::new(
        clamp(center.x, half_width, half_width.max(viewport.width - half_width)),
        clamp(center.y, half_height, half_height.max(viewport.height - half_height)),
    )
}

/// Convert a guide center to its top-left corner
pub fn center_to_top_left(center: Point, size: Size) -> Point {
    Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0)
}

/// Convert a guide top-left corner to its center
pub fn top_left_to_center(top_left: Point, size: Size) -> Point {
    Point::new(top_left.x + size.width / 2.0, top_left.y + size.height / 2.0)
}

/// Exact center of the viewport
pub fn centered_position(viewport: Size) -> Point {
    Point::new(viewport.width / 2.0, viewport.height / 2.0)
}

/// Clamp a top-left corner so the guide stays inside the viewport
pub fn clamp_top_left(top_left: Point, size: Size, viewport: Size) -> Point {
    Point::new(
        clamp(top_left.x, 0.0, 0f64.max(viewport.width - size.width)),
        clamp(top_left.y, 0.0, 0f64.max(viewport.height - size.height)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn request(model_id: &str, calibration: Option<f64>, viewport: Size) -> GuideSizeRequest<'_> {
        GuideSizeRequest {
            model_id,
            orientation: Orientation::Portrait,
            calibration_px_per_mm: calibration,
            viewport,
        }
    }

    #[test]
    fn test_px_per_mm_bounds() {
        assert!(!is_valid_px_per_mm(0.79));
        assert!(is_valid_px_per_mm(0.8));
        assert!(is_valid_px_per_mm(10.0));
        assert!(!is_valid_px_per_mm(10.01));
        assert!(!is_valid_px_per_mm(f64::NAN));
        assert!(!is_valid_px_per_mm(f64::INFINITY));
    }

    #[test]
    fn test_uncalibrated_fallback_on_desktop() {
        let size = compute_guide_size(request("iphone-15-pro", None, Size::new(1920.0, 1080.0)));

        assert!(!size.using_calibration);
        assert_relative_eq!(size.px_per_mm, 420.0 / 146.6);
        assert_relative_eq!(size.height, 420.0, epsilon = 1e-9);
        assert_relative_eq!(size.width, 71.5 * 420.0 / 146.6, epsilon = 1e-9);
        assert_relative_eq!(size.corner_radius, size.width * 0.062, epsilon = 1e-9);
    }

    #[test]
    fn test_calibrated_size() {
        let size = compute_guide_size(request("iphone-15-pro", Some(3.0), Size::new(1920.0, 1080.0)));

        assert!(size.using_calibration);
        assert_relative_eq!(size.width, 214.5, epsilon = 1e-9);
        assert_relative_eq!(size.height, 439.8, epsilon = 1e-9);
        assert_eq!(size.px_per_mm, 3.0);
    }

    #[test]
    fn test_calibrated_size_downscaled_to_viewport() {
        // 75% of 500 px = 375 px, so the 439.8 px tall guide must shrink
        let size = compute_guide_size(request("iphone-15-pro", Some(3.0), Size::new(800.0, 500.0)));

        assert!(size.using_calibration);
        assert_relative_eq!(size.height, 375.0, epsilon = 1e-9);
        assert_relative_eq!(size.px_per_mm, 375.0 / 146.6, epsilon = 1e-9);
        assert_relative_eq!(size.width, 71.5 * size.px_per_mm, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_calibration_uses_fallback() {
        let size = compute_guide_size(request("standard", Some(12.0), Size::new(1920.0, 1080.0)));
        assert!(!size.using_calibration);
        assert_relative_eq!(size.height, 420.0, epsilon = 1e-9);
    }

    #[test]
    fn test_landscape_swaps_dimensions() {
        let portrait = compute_guide_size(request("standard", None, Size::new(1920.0, 1080.0)));
        let landscape = compute_guide_size(GuideSizeRequest {
            orientation: Orientation::Landscape,
            ..request("standard", None, Size::new(1920.0, 1080.0))
        });

        assert_relative_eq!(portrait.width, landscape.height, epsilon = 1e-9);
        assert_relative_eq!(portrait.height, landscape.width, epsilon = 1e-9);
    }

    #[test]
    fn test_small_viewport_uses_minimum_target() {
        // 48% of 300 px is 144 px, below the 180 px floor, then capped at 225 px
        let size = compute_guide_size(request("standard", None, Size::new(300.0, 300.0)));
        assert_relative_eq!(size.height, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_viewport_gives_zero_guide() {
        let size = compute_guide_size(request("standard", None, Size::ZERO));
        assert_eq!(size.width, 0.0);
        assert_eq!(size.height, 0.0);
        assert_eq!(size.px_per_mm, 0.0);
        assert_eq!(size.corner_radius, 12.0);
    }

    #[test]
    fn test_corner_radius_bounds() {
        let tiny = compute_guide_size(request("standard", None, Size::new(100.0, 100.0)));
        assert_eq!(tiny.corner_radius, 12.0);

        let huge = compute_guide_size(request("standard-plus", Some(10.0), Size::new(4000.0, 4000.0)));
        assert_eq!(huge.corner_radius, 44.0);
    }

    #[test]
    fn test_clamp_guide_center() {
        let size = Size::new(200.0, 400.0);
        let viewport = Size::new(1000.0, 800.0);

        assert_eq!(clamp_guide_center(Point::new(-50.0, 2000.0), size, viewport), Point::new(100.0, 600.0));
        assert_eq!(clamp_guide_center(Point::new(500.0, 400.0), size, viewport), Point::new(500.0, 400.0));
    }

    #[test]
    fn test_clamp_guide_center_oversized_guide_pins_to_half_size() {
        let size = Size::new(600.0, 900.0);
        let viewport = Size::new(400.0, 500.0);
        assert_eq!(clamp_guide_center(Point::new(10.0, 10.0), size, viewport), Point::new(300.0, 450.0));
        assert_eq!(clamp_guide_center(Point::new(999.0, 999.0), size, viewport), Point::new(300.0, 450.0));
    }

    #[test]
    fn test_center_top_left_conversions() {
        let size = Size::new(214.5, 439.5);
        let center = Point::new(321.25, 87.125);
        assert_eq!(top_left_to_center(center_to_top_left(center, size), size), center);
        assert_eq!(center_to_top_left(Point::new(100.0, 100.0), Size::new(50.0, 20.0)), Point::new(75.0, 90.0));
    }

    #[test]
    fn test_centered_position() {
        assert_eq!(centered_position(Size::new(1920.0, 1080.0)), Point::new(960.0, 540.0));
    }

    #[test]
    fn test_clamp_top_left() {
        let size = Size::new(200.0, 400.0);
        let viewport = Size::new(1000.0, 800.0);
        assert_eq!(clamp_top_left(Point::new(-5.0, 900.0), size, viewport), Point::new(0.0, 400.0));

        // Oversized guides pin to the origin
        assert_eq!(clamp_top_left(Point::new(50.0, 50.0), Size::new(2000.0, 2000.0), viewport), Point::ZERO);
    }
}

//! Positioning and styling rules for the rendered guide
//!
//! The persisted position is the guide's center. Dragging works in top-left
//! coordinates, so every transition goes through the clamp helpers in
//! [`sizing`](crate::guide::sizing) to keep both forms inside the viewport.

use kurbo::{Point, Rect, RoundedRect, Size, Vec2};

use crate::color::kelvin_to_rgb;
use crate::constants::guide;
use crate::guide::models::{PhoneGuideModel, SafeAreaKind};
use crate::guide::sizing::{
    centered_position, center_to_top_left, clamp_guide_center, clamp_top_left, top_left_to_center,
};

/// Where the guide sits for the current size and viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidePlacement {
    /// Clamped center in viewport coordinates
    pub center: Point,
    /// Clamped top-left corner in viewport coordinates
    pub top_left: Point,
    /// Center to save because nothing had been saved before
    pub persist_center: Option<Point>,
}

/// Check for a real saved position; `(-1, -1)` means none was saved
pub fn has_saved_position(position: Point) -> bool {
    position.x >= 0.0 && position.y >= 0.0
}

/// Place the guide from its saved center, or centered in the viewport
///
/// Call again whenever the viewport or guide size changes so a stale center
/// is pulled back inside the new bounds.
pub fn resolve_placement(saved: Point, size: Size, viewport: Size) -> GuidePlacement {
    let has_saved = has_saved_position(saved);
    let desired = if has_saved {
        saved
    } else {
        centered_position(viewport)
    };

    let center = clamp_guide_center(desired, size, viewport);
    let top_left = clamp_top_left(center_to_top_left(center, size), size, viewport);

    GuidePlacement {
        center,
        top_left,
        persist_center: (!has_saved).then_some(center),
    }
}

/// New top-left corner after a drag by `offset`
pub fn drag_end(top_left: Point, offset: Vec2, size: Size, viewport: Size) -> Point {
    clamp_top_left(top_left + offset, size, viewport)
}

/// Center to persist after the guide moved, if it moved far enough
///
/// Returns `None` when the clamped center is within half a pixel of
/// `saved` on both axes.
pub fn pending_center(top_left: Point, saved: Point, size: Size, viewport: Size) -> Option<Point> {
    let next = clamp_guide_center(top_left_to_center(top_left, size), size, viewport);

    let unchanged = (next.x - saved.x).abs() < guide::REPOSITION_THRESHOLD_PX
        && (next.y - saved.y).abs() < guide::REPOSITION_THRESHOLD_PX;
    (!unchanged).then_some(next)
}

/// Camera cutout box in guide-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeAreaCutout {
    pub kind: SafeAreaKind,
    pub rect: Rect,
    pub corner_radius: f64,
}

impl SafeAreaCutout {
    /// Shape to draw; kurbo limits the radius to half the shorter side
    pub fn rounded_rect(&self) -> RoundedRect {
        RoundedRect::from_rect(self.rect, self.corner_radius)
    }
}

/// Camera cutout for a guide of `size`, or `None` for plain models
pub fn safe_area_rect(model: &PhoneGuideModel, size: Size) -> Option<SafeAreaCutout> {
    let area = &model.safe_area;
    if area.kind == SafeAreaKind::None {
        return None;
    }

    let width = size.width * area.width_ratio;
    let height = size.height * area.height_ratio;
    let top = size.height * area.top_offset_ratio;
    let left = (size.width - width) / 2.0;
    let radius = guide::SAFE_AREA_RADIUS_MIN_PX
        .max(height * guide::SAFE_AREA_RADIUS_MIN_RATIO.max(area.radius_ratio));

    Some(SafeAreaCutout {
        kind: area.kind,
        rect: Rect::new(left, top, left + width, top + height),
        corner_radius: radius,
    })
}

/// Outline colors that stay visible against the light surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideOutlineStyle {
    pub stroke: &'static str,
    pub safe_area_fill: &'static str,
    pub glow: String,
}

impl GuideOutlineStyle {
    /// Pick outline colors for the current temperature and brightness
    pub fn for_light(kelvin: f64, brightness_percent: f64) -> Self {
        let rgb = kelvin_to_rgb(kelvin);
        let luminance = relative_luminance(rgb.red, rgb.green, rgb.blue) * (brightness_percent / 100.0);

        let (stroke, safe_area_fill) = if luminance > guide::DARK_OUTLINE_LUMINANCE {
            ("rgba(20, 20, 20, 0.78)", "rgba(20, 20, 20, 0.44)")
        } else {
            ("rgba(255, 255, 255, 0.82)", "rgba(255, 255, 255, 0.34)")
        };

        Self {
            stroke,
            safe_area_fill,
            glow: format!("0 0 26px rgba({}, {}, {}, 0.18)", rgb.red, rgb.green, rgb.blue),
        }
    }
}

/// Rec. 709 luma of 8-bit channels, in [0, 1]
fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0
}

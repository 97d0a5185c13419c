//! Phone positioning guide module
//!
//! This module holds the phone silhouette catalog, the sizing engine that
//! maps millimetres to on-screen pixels, and the placement rules that keep
//! the guide inside the viewport.

pub mod models;
pub mod placement;
pub mod sizing;

pub use models::{
    get_phone_guide_model, is_phone_guide_model_id, PhoneGuideModel, SafeArea, SafeAreaKind,
    PHONE_GUIDE_MODELS,
};
pub use placement::{
    drag_end, has_saved_position, pending_center, resolve_placement, safe_area_rect,
    GuideOutlineStyle, GuidePlacement, SafeAreaCutout,
};
pub use sizing::{
    center_to_top_left, centered_position, clamp_guide_center, clamp_top_left,
    compute_guide_size, is_valid_px_per_mm, top_left_to_center, GuideSizeRequest, Orientation,
    PhoneGuideSize,
};

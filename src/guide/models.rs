//! Phone silhouette catalog
//!
//! Physical dimensions of the phones the on-screen guide can imitate. Ids
//! are part of the persisted settings, so entries may be added but existing
//! ids must never be renamed.

use serde::{Deserialize, Serialize};

use crate::constants::guide::FALLBACK_MODEL_ID;

/// Kind of camera cutout drawn at the top of the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafeAreaKind {
    Notch,
    DynamicIsland,
    None,
}

/// Camera cutout geometry, as ratios of the guide's on-screen box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeArea {
    #[serde(rename = "type")]
    pub kind: SafeAreaKind,
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub top_offset_ratio: f64,
    pub radius_ratio: f64,
}

const NOTCH: SafeArea = SafeArea {
    kind: SafeAreaKind::Notch,
    width_ratio: 0.33,
    height_ratio: 0.055,
    top_offset_ratio: 0.016,
    radius_ratio: 0.45,
};

const DYNAMIC_ISLAND: SafeArea = SafeArea {
    kind: SafeAreaKind::DynamicIsland,
    width_ratio: 0.24,
    height_ratio: 0.036,
    top_offset_ratio: 0.022,
    radius_ratio: 0.5,
};

const NO_CUTOUT: SafeArea = SafeArea {
    kind: SafeAreaKind::None,
    width_ratio: 0.0,
    height_ratio: 0.0,
    top_offset_ratio: 0.0,
    radius_ratio: 0.0,
};

/// A phone silhouette with its portrait dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneGuideModel {
    /// Stable key stored in settings
    pub id: &'static str,
    /// Display name
    pub label: &'static str,
    /// Short edge in millimetres
    pub width_mm: f64,
    /// Long edge in millimetres
    pub height_mm: f64,
    /// Corner radius as a fraction of the shorter on-screen edge
    pub corner_radius_ratio: f64,
    pub safe_area: SafeArea,
}

const fn model(
    id: &'static str,
    label: &'static str,
    width_mm: f64,
    height_mm: f64,
    corner_radius_ratio: f64,
    safe_area: SafeArea,
) -> PhoneGuideModel {
    PhoneGuideModel {
        id,
        label,
        width_mm,
        height_mm,
        corner_radius_ratio,
        safe_area,
    }
}

const CATALOG: [PhoneGuideModel; 24] = [
    model("iphone-16-pro-max", "iPhone 16 Pro Max", 77.6, 163.0, 0.06, DYNAMIC_ISLAND),
    model("iphone-16-pro", "iPhone 16 Pro", 71.5, 149.6, 0.062, DYNAMIC_ISLAND),
    model("iphone-16-plus", "iPhone 16 Plus", 77.8, 160.9, 0.06, DYNAMIC_ISLAND),
    model("iphone-16", "iPhone 16", 71.6, 147.6, 0.06, DYNAMIC_ISLAND),
    model("iphone-15-pro-max", "iPhone 15 Pro Max", 76.7, 159.9, 0.06, DYNAMIC_ISLAND),
    model("iphone-15-pro", "iPhone 15 Pro", 71.5, 146.6, 0.062, DYNAMIC_ISLAND),
    model("iphone-15-plus", "iPhone 15 Plus", 77.8, 160.9, 0.06, DYNAMIC_ISLAND),
    model("iphone-15", "iPhone 15", 71.6, 147.6, 0.06, DYNAMIC_ISLAND),
    model("iphone-14-pro-max", "iPhone 14 Pro Max", 77.6, 160.7, 0.06, DYNAMIC_ISLAND),
    model("iphone-14-pro", "iPhone 14 Pro", 71.5, 147.5, 0.06, DYNAMIC_ISLAND),
    model("iphone-14-plus", "iPhone 14 Plus", 78.1, 160.8, 0.058, NOTCH),
    model("iphone-14", "iPhone 14", 71.5, 146.7, 0.06, NOTCH),
    model("iphone-13-pro-max", "iPhone 13 Pro Max", 78.1, 160.8, 0.058, NOTCH),
    model("iphone-13-pro", "iPhone 13 Pro", 71.5, 146.7, 0.06, NOTCH),
    model("iphone-13", "iPhone 13", 71.5, 146.7, 0.06, NOTCH),
    model("iphone-13-mini", "iPhone 13 mini", 64.2, 131.5, 0.064, NOTCH),
    model("iphone-12-pro-max", "iPhone 12 Pro Max", 78.1, 160.8, 0.058, NOTCH),
    model("iphone-12-pro", "iPhone 12 Pro", 71.5, 146.7, 0.06, NOTCH),
    model("iphone-12", "iPhone 12", 71.5, 146.7, 0.06, NOTCH),
    model("iphone-12-mini", "iPhone 12 mini", 64.2, 131.5, 0.064, NOTCH),
    model("standard-compact", "Standard Compact", 66.5, 138.5, 0.062, NO_CUTOUT),
    model("standard", "Standard", 71.5, 147.0, 0.06, NO_CUTOUT),
    model("standard-plus", "Standard Plus", 77.8, 160.0, 0.058, NO_CUTOUT),
    model("standard-pro-max", "Standard Pro Max", 77.5, 161.0, 0.058, NO_CUTOUT),
];

/// Every model the guide offers, newest generation first
pub static PHONE_GUIDE_MODELS: [PhoneGuideModel; 24] = CATALOG;

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn catalog_index(id: &str) -> Option<usize> {
    let mut i = 0;
    while i < CATALOG.len() {
        if str_eq(CATALOG[i].id, id) {
            return Some(i);
        }
        i += 1;
    }
    None
}

const FALLBACK_INDEX: usize = match catalog_index(FALLBACK_MODEL_ID) {
    Some(index) => index,
    None => panic!("phone guide catalog must contain the fallback model"),
};

fn find_model(model_id: &str) -> Option<&'static PhoneGuideModel> {
    PHONE_GUIDE_MODELS.iter().find(|model| model.id == model_id)
}

/// Check whether `value` names a catalog entry
pub fn is_phone_guide_model_id(value: &str) -> bool {
    find_model(value).is_some()
}

/// Look up a model, falling back to `"standard"` for unknown ids
pub fn get_phone_guide_model(model_id: &str) -> &'static PhoneGuideModel {
    find_model(model_id).unwrap_or_else(|| {
        log::debug!("unknown phone guide model '{model_id}', using '{FALLBACK_MODEL_ID}'");
        &PHONE_GUIDE_MODELS[FALLBACK_INDEX]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unknown_id_falls_back_to_standard() {
        assert_eq!(get_phone_guide_model("nonexistent-id").id, "standard");
        assert_eq!(get_phone_guide_model("").id, "standard");
    }

    #[test]
    fn test_lookup_known_model() {
        let model = get_phone_guide_model("iphone-15-pro");
        assert_eq!(model.label, "iPhone 15 Pro");
        assert_eq!(model.width_mm, 71.5);
        assert_eq!(model.height_mm, 146.6);
        assert_eq!(model.safe_area.kind, SafeAreaKind::DynamicIsland);
    }

    #[test]
    fn test_model_id_predicate() {
        assert!(is_phone_guide_model_id("standard"));
        assert!(is_phone_guide_model_id("iphone-12-mini"));
        assert!(!is_phone_guide_model_id("Standard"));
        assert!(!is_phone_guide_model_id("pixel-9"));
    }

    #[test]
    fn test_catalog_ids_unique_and_portrait() {
        let ids: HashSet<_> = PHONE_GUIDE_MODELS.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), PHONE_GUIDE_MODELS.len());

        for model in &PHONE_GUIDE_MODELS {
            assert!(model.width_mm < model.height_mm, "{} is not portrait", model.id);
            assert!(model.corner_radius_ratio > 0.0);
        }
    }

    #[test]
    fn test_safe_area_serializes_as_type() {
        let json = serde_json::to_value(get_phone_guide_model("iphone-14").safe_area).unwrap();
        assert_eq!(json["type"], "notch");
        assert_eq!(json["widthRatio"], 0.33);
    }
}

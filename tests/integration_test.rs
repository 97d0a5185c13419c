//! Integration tests for the ring light library
//!
//! These tests exercise the public API end to end:
//! - Color temperature conversion and labelling
//! - Phone guide sizing across the whole catalog
//! - Guide placement and drag clamping
//! - Studio store persistence with in-memory and file storage
//! - Share link round trips

use std::time::{Duration, Instant};

use approx::assert_relative_eq;
use kurbo::{Point, Size, Vec2};
use ring_light::calibration::PhoneGuideCalibration;
use ring_light::color::{kelvin_to_rgb, temperature_label};
use ring_light::guide::{
    center_to_top_left, clamp_guide_center, compute_guide_size, drag_end, get_phone_guide_model,
    is_valid_px_per_mm, resolve_placement, top_left_to_center, GuideSizeRequest, Orientation,
    PHONE_GUIDE_MODELS,
};
use ring_light::studio::{
    share_redirect, FileStorage, KeyPress, KeyValueStorage, LightAction, LightStore, MemoryStorage,
};
use ring_light::{LightError, StudioConfig};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Color Temperature
// ============================================================================

#[test]
fn test_red_channel_continuous_at_6600k() {
    assert_eq!(kelvin_to_rgb(6600.0).red, 255);
    assert_eq!(kelvin_to_rgb(6600.001).red, 255);
    assert!(kelvin_to_rgb(6700.0).red >= 250);
}

#[test]
fn test_warm_side_saturates_red_cool_side_saturates_blue() {
    for kelvin in (1000..=40000).step_by(50) {
        let rgb = kelvin_to_rgb(kelvin as f64);
        if kelvin <= 6600 {
            assert_eq!(rgb.red, 255, "red at {kelvin}K");
        } else {
            assert_eq!(rgb.blue, 255, "blue at {kelvin}K");
        }
        if kelvin <= 1900 {
            assert_eq!((rgb.green, rgb.blue), (0, 0), "{kelvin}K");
        }
    }
}

#[test]
fn test_temperature_label_boundaries() {
    assert_eq!(temperature_label(2999.0), "Candle");
    assert_eq!(temperature_label(3000.0), "Warm");
    assert_eq!(temperature_label(6999.0), "Daylight");
    assert_eq!(temperature_label(7000.0), "Blue Sky");
}

// ============================================================================
// Phone Guide Sizing
// ============================================================================

#[test]
fn test_calibration_validation_bounds() {
    assert!(!is_valid_px_per_mm(0.79));
    assert!(is_valid_px_per_mm(0.8));
    assert!(is_valid_px_per_mm(10.0));
    assert!(!is_valid_px_per_mm(10.01));
    assert!(!is_valid_px_per_mm(f64::NAN));
}

#[test]
fn test_unknown_model_falls_back() {
    init_logging();
    assert_eq!(get_phone_guide_model("nonexistent-id").id, "standard");
}

#[test]
fn test_guide_never_exceeds_viewport_cap() {
    let viewports = [
        Size::new(1920.0, 1080.0),
        Size::new(390.0, 844.0),
        Size::new(200.0, 150.0),
        Size::new(3840.0, 2160.0),
        Size::new(1.0, 1.0),
    ];
    let calibrations = [None, Some(0.8), Some(3.0), Some(10.0), Some(25.0)];

    for model in PHONE_GUIDE_MODELS.iter() {
        for orientation in [Orientation::Portrait, Orientation::Landscape] {
            for viewport in viewports {
                for calibration in calibrations {
                    let size = compute_guide_size(GuideSizeRequest {
                        model_id: model.id,
                        orientation,
                        calibration_px_per_mm: calibration,
                        viewport,
                    });
                    assert!(size.width <= viewport.width * 0.75 + 1e-9, "{} {viewport:?}", model.id);
                    assert!(size.height <= viewport.height * 0.75 + 1e-9, "{} {viewport:?}", model.id);
                }
            }
        }
    }
}

#[test]
fn test_iphone_15_pro_uncalibrated_on_full_hd() {
    let size = compute_guide_size(GuideSizeRequest {
        model_id: "iphone-15-pro",
        orientation: Orientation::Portrait,
        calibration_px_per_mm: None,
        viewport: Size::new(1920.0, 1080.0),
    });

    assert!(!size.using_calibration);
    assert_relative_eq!(size.px_per_mm, 420.0 / 146.6, epsilon = 1e-12);
    assert_relative_eq!(size.width, 71.5 * 420.0 / 146.6, epsilon = 1e-9);
    assert_relative_eq!(size.height, 420.0, epsilon = 1e-9);
}

#[test]
fn test_iphone_15_pro_calibrated() {
    let size = compute_guide_size(GuideSizeRequest {
        model_id: "iphone-15-pro",
        orientation: Orientation::Portrait,
        calibration_px_per_mm: Some(3.0),
        viewport: Size::new(1920.0, 1080.0),
    });

    assert!(size.using_calibration);
    assert_relative_eq!(size.width, 214.5, epsilon = 1e-9);
    assert_relative_eq!(size.height, 439.8, epsilon = 1e-9);
    assert_relative_eq!(size.px_per_mm, 3.0);

    // A small viewport forces the calibrated size down
    let capped = compute_guide_size(GuideSizeRequest {
        model_id: "iphone-15-pro",
        orientation: Orientation::Portrait,
        calibration_px_per_mm: Some(3.0),
        viewport: Size::new(800.0, 400.0),
    });
    assert!(capped.using_calibration);
    assert_relative_eq!(capped.height, 300.0, epsilon = 1e-9);
    assert!(capped.px_per_mm < 3.0);
}

// ============================================================================
// Guide Placement
// ============================================================================

#[test]
fn test_clamped_center_keeps_guide_inside() {
    let size = Size::new(200.0, 400.0);
    let viewport = Size::new(1280.0, 720.0);
    let centers = [
        Point::new(-500.0, -500.0),
        Point::new(0.0, 360.0),
        Point::new(640.0, 360.0),
        Point::new(1279.0, 719.0),
        Point::new(10_000.0, 3.0),
    ];

    for center in centers {
        let clamped = clamp_guide_center(center, size, viewport);
        assert!(clamped.x >= 100.0 && clamped.x <= 1180.0, "{clamped:?}");
        assert!(clamped.y >= 200.0 && clamped.y <= 520.0, "{clamped:?}");
    }
}

#[test]
fn test_center_top_left_round_trip() {
    let size = Size::new(214.5, 439.5);
    for center in [Point::new(0.0, 0.0), Point::new(640.25, 360.5), Point::new(-12.0, 3000.0)] {
        assert_eq!(top_left_to_center(center_to_top_left(center, size), size), center);
    }
}

#[test]
fn test_drag_then_resize_keeps_guide_visible() {
    let size = Size::new(200.0, 400.0);
    let placement = resolve_placement(Point::new(-1.0, -1.0), size, Size::new(1920.0, 1080.0));
    assert_eq!(placement.center, Point::new(960.0, 540.0));

    let top_left = drag_end(placement.top_left, Vec2::new(2000.0, 0.0), size, Size::new(1920.0, 1080.0));
    assert_eq!(top_left, Point::new(1720.0, 340.0));

    let saved = top_left_to_center(top_left, size);
    let shrunk = resolve_placement(saved, size, Size::new(800.0, 600.0));
    assert_eq!(shrunk.center, Point::new(700.0, 400.0));
    assert_eq!(shrunk.persist_center, None);
}

// ============================================================================
// Studio Store
// ============================================================================

#[test]
fn test_store_persists_and_reloads_from_files() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let start = Instant::now();

    let mut store = LightStore::load(FileStorage::new(dir.path()), StudioConfig::default());
    store.dispatch_at(LightAction::SetTemperature(3200.0), start).unwrap();
    store.dispatch_at(LightAction::SetPhoneGuideEnabled(true), start).unwrap();
    store
        .dispatch_at(LightAction::SetPhoneGuideModel("iphone-13-mini".into()), start)
        .unwrap();
    store.create_preset("Late night").unwrap();
    assert!(store.flush_due(start + Duration::from_millis(300)).unwrap());

    let reloaded = LightStore::load(FileStorage::new(dir.path()), StudioConfig::default());
    assert_eq!(reloaded.settings().temperature, 3200.0);
    assert!(reloaded.settings().phone_guide.enabled);
    assert_eq!(reloaded.settings().phone_guide.model_id, "iphone-13-mini");
    assert_eq!(reloaded.presets().len(), 7);
    assert_eq!(reloaded.presets()[6].name, "Late night");
}

#[test]
fn test_store_recovers_from_corrupt_storage() {
    init_logging();
    let mut storage = MemoryStorage::new();
    storage.set("glowup-settings", "{not json").unwrap();
    storage.set("glowup-custom-presets", "{\"also\": \"wrong\"}").unwrap();

    let store = LightStore::load(storage, StudioConfig::default());
    assert_eq!(store.settings(), &ring_light::LightSettings::default());
    assert_eq!(store.presets().len(), 6);
}

#[test]
fn test_calibration_flows_into_guide_size() {
    let mut store = LightStore::load(MemoryStorage::new(), StudioConfig::default());
    store.set_calibration(Some(4.0)).unwrap();
    store.dispatch(LightAction::SetPhoneGuideEnabled(true)).unwrap();

    let guide = &store.settings().phone_guide;
    assert!(guide.calibration.is_calibrated());
    let (size, _) = guide.layout_in(Size::new(1920.0, 1080.0)).unwrap();
    assert!(size.using_calibration);
    assert_relative_eq!(size.width, 71.5 * 4.0, epsilon = 1e-9);

    store.set_calibration(Some(0.5)).unwrap();
    assert_eq!(
        store.settings().phone_guide.calibration,
        PhoneGuideCalibration::uncalibrated()
    );
}

#[test]
fn test_preset_export_import_between_stores() {
    let mut source = LightStore::load(MemoryStorage::new(), StudioConfig::default());
    source.dispatch(LightAction::SetBrightness(35.0)).unwrap();
    source.create_preset("Dim").unwrap();
    let exported = source.export_presets().unwrap();

    let mut target = LightStore::load(MemoryStorage::new(), StudioConfig::default());
    assert_eq!(target.import_presets(&exported).unwrap(), 1);
    let imported = target.presets().last().unwrap();
    assert_eq!(imported.name, "Dim");
    assert_eq!(imported.brightness, 35.0);
    assert!(imported.is_custom);

    assert!(matches!(
        target.import_presets("{\"name\": \"x\"}"),
        Err(LightError::PresetImport { .. })
    ));
}

#[test]
fn test_keyboard_drives_store() {
    let mut store = LightStore::load(MemoryStorage::new(), StudioConfig::default());
    for key in ["4", "ArrowDown", "ArrowRight", "h"] {
        assert!(store.handle_key(&KeyPress::new(key)).unwrap().is_some(), "{key}");
    }
    assert_eq!(store.handle_key(&KeyPress::new("r").with_ctrl()).unwrap(), None);

    let settings = store.settings();
    assert_eq!(settings.brightness, 70.0);
    assert_eq!(settings.temperature, 3100.0);
    assert!(!settings.is_visible);
    assert_eq!(settings.active_preset, None);
}

#[test]
fn test_clear_stored_data() {
    let mut store = LightStore::load(MemoryStorage::new(), StudioConfig::default());
    store.create_preset("Temp").unwrap();
    store.set_default_preset(Some("daylight")).unwrap();
    store.flush().unwrap();

    store.clear_stored_data().unwrap();
    assert_eq!(store.presets().len(), 6);
    assert_eq!(store.default_preset().unwrap(), None);

    let reloaded = LightStore::load(store.storage().clone(), StudioConfig::default());
    assert_eq!(reloaded.presets().len(), 6);
}

// ============================================================================
// Share Links
// ============================================================================

#[test]
fn test_share_link_round_trip() {
    let mut sender = LightStore::load(MemoryStorage::new(), StudioConfig::default());
    sender.dispatch(LightAction::ApplyPreset("cool-studio".into())).unwrap();
    let url = sender.share_url("https://glowup.example");
    assert_eq!(url, "https://glowup.example/studio?b=95&t=7500");

    let query = url.split_once('?').map(|(_, q)| q).unwrap();
    assert_eq!(share_redirect(query).unwrap(), "/studio?b=95&t=7500");

    let mut receiver = LightStore::load(MemoryStorage::new(), StudioConfig::default());
    assert!(receiver.load_from_query(query).unwrap());
    assert_eq!(receiver.settings().brightness, 95.0);
    assert_eq!(receiver.settings().temperature, 7500.0);

    assert!(!receiver.load_from_query("b=95&t=20000").unwrap());
    assert_eq!(receiver.settings().temperature, 7500.0);
}

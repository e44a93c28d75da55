use std::path::Path;

use tile_gallery::animation::Easing;
use tile_gallery::config::AppConfig;

#[test]
fn bundled_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("gallery.toml");
    let config = AppConfig::load(&path).unwrap();
    let defaults = AppConfig::default();

    assert_eq!(config.base_duration_ms, defaults.base_duration_ms);
    assert_eq!(config.tour.layouts, defaults.tour.layouts);
    assert_eq!(config.easing, Easing::ExponentialInOut);
    assert_eq!(config.camera.distance, defaults.camera.distance);
}

#[test]
fn load_rejects_non_positive_camera_distance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.toml");
    std::fs::write(&path, "[camera]\ndistance = 0.0\n").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("camera.distance"));
}

use std::path::Path;
use std::time::Duration;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use tile_gallery::app::{run_with, ProfileActions};
use tile_gallery::config::AppConfig;
use tile_gallery::data_source::parse_records;
use tile_gallery::gallery::Gallery;
use tile_gallery::layout::{compute_layouts, sphere, LayoutKind};
use tile_gallery::profile::{load_profile, FileStore};
use tile_gallery::rendering::HeadlessRenderer;

fn write_records(path: &Path, count: usize) {
    let rows: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!([
                format!("Person {i}"),
                format!("https://example.org/{i}.png"),
                20 + i % 40,
                "NZ",
                "Tramping",
                format!("${},000", 40 + i * 3)
            ])
        })
        .collect();
    std::fs::write(path, serde_json::to_string(&rows).unwrap()).unwrap();
}

fn config(dir: &Path, layouts: &[&str]) -> AppConfig {
    let mut config = AppConfig {
        data_path: dir.join("data.json"),
        profile_path: dir.join("profile.json"),
        seed: Some(99),
        ..AppConfig::default()
    };
    config.tour.layouts = layouts.iter().map(|id| id.to_string()).collect();
    config
}

#[test]
fn tour_ends_settled_on_the_last_layout() {
    let dir = tempfile::tempdir().unwrap();
    write_records(&dir.path().join("data.json"), 200);

    let config = config(dir.path(), &["sphere", "grid"]);
    let mut renderer = HeadlessRenderer::new(1280, 720);
    let summary = run_with(&config, &ProfileActions::default(), &mut renderer).unwrap();

    assert_eq!(summary.records, 200);
    assert_eq!(summary.final_layout, Some(LayoutKind::Grid));
    assert!(summary.frames_drawn > 0);
    assert_eq!(renderer.frames(), summary.frames_drawn);
    assert_eq!(renderer.last_frame().len(), 200);
}

#[test]
fn unknown_layout_in_tour_fails_before_running() {
    let dir = tempfile::tempdir().unwrap();
    write_records(&dir.path().join("data.json"), 5);

    let config = config(dir.path(), &["table", "pyramid"]);
    let mut renderer = HeadlessRenderer::new(1280, 720);
    let error = run_with(&config, &ProfileActions::default(), &mut renderer).unwrap_err();

    assert!(format!("{error:#}").contains("pyramid"));
    assert_eq!(renderer.frames(), 0);
}

#[test]
fn missing_data_leaves_the_gallery_empty() {
    let dir = tempfile::tempdir().unwrap();

    let mut config = config(dir.path(), &["helix"]);
    config.tour.dwell_ms = 200;
    let mut renderer = HeadlessRenderer::new(1280, 720);
    let summary = run_with(&config, &ProfileActions::default(), &mut renderer).unwrap();

    assert_eq!(summary.records, 0);
    assert!(renderer.last_frame().is_empty());
}

#[test]
fn sign_in_is_stored_before_the_tour() {
    let dir = tempfile::tempdir().unwrap();
    write_records(&dir.path().join("data.json"), 3);

    let credential = format!(
        "header.{}.sig",
        URL_SAFE_NO_PAD.encode(r#"{"name":"Ada","email":"ada@example.org","picture":"p.png"}"#)
    );
    let actions = ProfileActions {
        sign_in: Some(credential),
        locale: Some("fi".into()),
        ..ProfileActions::default()
    };

    let mut config = config(dir.path(), &["table"]);
    config.tour.dwell_ms = 100;
    run_with(&config, &actions, &mut HeadlessRenderer::new(640, 480)).unwrap();

    let store = FileStore::open(dir.path().join("profile.json")).unwrap();
    let profile = load_profile(&store).unwrap().unwrap();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.locale, "fi");
}

#[test]
fn interrupted_sphere_transition_converges_on_grid() {
    let records = parse_records(
        &serde_json::to_string(
            &(0..60)
                .map(|i| serde_json::json!([format!("P{i}"), "", i, "FI", "Sauna", "$1"]))
                .collect::<Vec<_>>(),
        )
        .unwrap(),
    )
    .unwrap();

    let config = AppConfig {
        seed: Some(4),
        ..AppConfig::default()
    };
    let mut gallery = Gallery::new(&config);
    gallery.load(records, Duration::ZERO).unwrap();

    let ms = Duration::from_millis;
    gallery.transform(LayoutKind::Sphere, ms(2000), ms(0)).unwrap();
    for t in (16..1200).step_by(16) {
        gallery.update(ms(t));
    }
    gallery.transform(LayoutKind::Grid, ms(500), ms(1200)).unwrap();
    for t in (1216..=6000).step_by(16) {
        gallery.update(ms(t));
    }

    let grid = compute_layouts(60);
    for (tile, target) in gallery.scene.tiles().zip(grid.get(LayoutKind::Grid)) {
        assert!((tile.transform().position - target.position).length() < 1e-3);
        assert!((tile.transform().rotation - target.rotation).length() < 1e-3);
    }
}

#[test]
fn sphere_targets_keep_their_radius() {
    let layouts = compute_layouts(200);
    for target in layouts.get(LayoutKind::Sphere) {
        assert!((target.position.length() - sphere::RADIUS).abs() < 0.05);
    }
}

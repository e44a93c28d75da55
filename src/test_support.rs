use glam::Vec3;

use crate::record::Record;
use crate::scene_graph::{Scene, Transform};

pub fn records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| Record {
            display_name: format!("Person {i}"),
            image_url: format!("https://example.org/{i}.png"),
            age: (20 + i % 50).to_string(),
            country: "NZ".into(),
            interest: "Climbing".into(),
            net_worth_label: format!("${},000", 50 + i * 10),
        })
        .collect()
}

/// Scene whose tiles start spread along the X axis.
pub fn scene(count: usize) -> Scene {
    let mut scene = Scene::new();
    for (i, record) in records(count).into_iter().enumerate() {
        scene.spawn_tile(record, Transform::from_position(Vec3::new(i as f32 * 10.0, 0.0, 0.0)));
    }
    scene
}

pub fn assert_close(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
}

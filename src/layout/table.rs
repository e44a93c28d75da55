use glam::Vec3;

use crate::scene_graph::Transform;

pub const COLUMNS: usize = 20;
pub const CELL_WIDTH: f32 = 180.0;
pub const CELL_HEIGHT: f32 = 220.0;
const OFFSET_X: f32 = 1700.0;
const OFFSET_Y: f32 = 1000.0;

pub fn transform(index: usize) -> Transform {
    let column = (index % COLUMNS) as f32;
    let row = (index / COLUMNS) as f32;

    Transform::from_position(Vec3::new(
        column * CELL_WIDTH - OFFSET_X,
        -(row * CELL_HEIGHT) + OFFSET_Y,
        0.0,
    ))
}

use std::f32::consts::PI;

use glam::Vec3;

use crate::math::coords::from_cylindrical;
use crate::scene_graph::Transform;

pub const RADIUS: f32 = 900.0;
const ANGLE_STEP: f32 = 0.175;
const VERTICAL_STEP: f32 = 8.0;
const TOP: f32 = 450.0;

pub fn transform(index: usize) -> Transform {
    // Odd indices sit on the second strand, half a turn around
    let strand_offset = if index % 2 == 1 { PI } else { 0.0 };
    let angle = index as f32 * ANGLE_STEP + PI + strand_offset;
    let y = -(index as f32 * VERTICAL_STEP) + TOP;

    let position = from_cylindrical(RADIUS, angle, y);
    let target = Vec3::new(position.x * 2.0, position.y, position.z * 2.0);
    Transform::looking_at(position, target)
}

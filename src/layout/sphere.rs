use std::f32::consts::PI;

use crate::math::coords::from_spherical;
use crate::scene_graph::Transform;

pub const RADIUS: f32 = 900.0;

/// Point count the spiral is spread over. Smaller data sets only fill part of
/// the sphere, larger ones stretch the spiral to `count`.
pub const NORMALIZATION: usize = 200;

pub fn transform(index: usize, count: usize) -> Transform {
    let normalization = NORMALIZATION.max(count) as f32;

    let phi = (-1.0 + (2.0 * index as f32) / normalization).acos();
    let theta = (normalization * PI).sqrt() * phi;

    let position = from_spherical(RADIUS, phi, theta);
    Transform::looking_at(position, position * 2.0)
}

use glam::{Quat, Vec2};

use crate::camera::Camera;

const RADIANS_PER_PIXEL: f32 = 0.005;

/// Trackball-style orbit and zoom around the camera target. Input is queued
/// and applied once per frame in [`TrackballControls::update`].
pub struct TrackballControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pending_rotate: Vec2,
    pending_zoom: f32,
}

impl TrackballControls {
    pub fn new(rotate_speed: f32) -> Self {
        Self {
            rotate_speed,
            zoom_speed: 1.2,
            min_distance: 500.0,
            max_distance: 6000.0,
            pending_rotate: Vec2::ZERO,
            pending_zoom: 0.0,
        }
    }

    /// Queues a drag, in screen pixels with +Y pointing down.
    pub fn rotate(&mut self, delta: Vec2) {
        self.pending_rotate += delta;
    }

    /// Queues a zoom step. Positive values move the camera closer.
    pub fn zoom(&mut self, amount: f32) {
        self.pending_zoom += amount;
    }

    /// Applies queued input to `camera`. Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let mut changed = false;

        let delta = std::mem::take(&mut self.pending_rotate);
        if delta != Vec2::ZERO {
            let offset = camera.eye - camera.target;
            let up = camera.up.normalize();
            let right = up.cross(offset.normalize()).normalize();
            let move_direction = right * delta.x - up * delta.y;
            let axis = move_direction.cross(offset);

            if axis.length_squared() > 0.0 {
                let angle = delta.length() * self.rotate_speed * RADIANS_PER_PIXEL;
                let rotation = Quat::from_axis_angle(axis.normalize(), angle);
                camera.eye = camera.target + rotation * offset;
                camera.up = rotation * camera.up;
                changed = true;
            }
        }

        let zoom = std::mem::take(&mut self.pending_zoom);
        if zoom != 0.0 {
            let offset = camera.eye - camera.target;
            let factor = 1.0 - zoom * self.zoom_speed * 0.1;
            let distance = (offset.length() * factor).clamp(self.min_distance, self.max_distance);
            let eye = camera.target + offset.normalize() * distance;
            changed |= eye != camera.eye;
            camera.eye = eye;
        }

        changed
    }
}

impl Default for TrackballControls {
    fn default() -> Self {
        Self::new(0.5)
    }
}

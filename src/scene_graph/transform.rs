use glam::{Mat4, Vec3};

use crate::math::orientation::{euler_xyz_from_matrix, look_at, matrix_from_euler_xyz};

/// Placement of a single tile: a position and XYZ Euler rotation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// A transform at `position` whose local +Z axis faces `target`.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let rotation = look_at(position, target, Vec3::Y);

        Self {
            position,
            rotation: euler_xyz_from_matrix(rotation),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = matrix_from_euler_xyz(self.rotation);
        Mat4::from_translation(self.position) * Mat4::from_mat3(rotation)
    }

    /// Local +Z axis in world space.
    pub fn forward(&self) -> Vec3 {
        matrix_from_euler_xyz(self.rotation) * Vec3::Z
    }
}

use glam::{Mat3, Vec3};

const GIMBAL_LOCK_THRESHOLD: f32 = 0.999_999_9;

/// Rotation that turns local +Z towards `target`, keeping `up` as close to
/// local +Y as possible.
pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Mat3 {
    let mut z = target - position;
    if z.length_squared() == 0.0 {
        z.z = 1.0;
    }
    z = z.normalize();

    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        // Facing straight along `up`, nudge off the pole
        if up.z.abs() == 1.0 {
            z.x += 0.0001;
        } else {
            z.z += 0.0001;
        }
        z = z.normalize();
        x = up.cross(z);
    }
    x = x.normalize();

    let y = z.cross(x);
    Mat3::from_cols(x, y, z)
}

/// Extracts XYZ-order Euler angles from a pure rotation matrix.
pub fn euler_xyz_from_matrix(matrix: Mat3) -> Vec3 {
    let m11 = matrix.x_axis.x;
    let m12 = matrix.y_axis.x;
    let m13 = matrix.z_axis.x;
    let m22 = matrix.y_axis.y;
    let m23 = matrix.z_axis.y;
    let m32 = matrix.y_axis.z;
    let m33 = matrix.z_axis.z;

    let y = m13.clamp(-1.0, 1.0).asin();

    if m13.abs() < GIMBAL_LOCK_THRESHOLD {
        Vec3::new((-m23).atan2(m33), y, (-m12).atan2(m11))
    } else {
        Vec3::new(m32.atan2(m22), y, 0.0)
    }
}

/// Builds the rotation matrix for XYZ-order Euler angles.
pub fn matrix_from_euler_xyz(rotation: Vec3) -> Mat3 {
    Mat3::from_rotation_x(rotation.x)
        * Mat3::from_rotation_y(rotation.y)
        * Mat3::from_rotation_z(rotation.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_close(a: Mat3, b: Mat3) {
        for (col_a, col_b) in [
            (a.x_axis, b.x_axis),
            (a.y_axis, b.y_axis),
            (a.z_axis, b.z_axis),
        ] {
            assert!(
                (col_a - col_b).length() < 1e-4,
                "{col_a:?} != {col_b:?}"
            );
        }
    }

    #[test]
    fn look_at_points_local_z_at_target() {
        let position = Vec3::new(300.0, -200.0, 600.0);
        let rotation = look_at(position, position * 2.0, Vec3::Y);
        let forward = rotation * Vec3::Z;
        assert!((forward - position.normalize()).length() < 1e-5);
        assert!((rotation.determinant() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn euler_angles_rebuild_the_same_rotation() {
        let position = Vec3::new(-420.0, 130.0, 77.0);
        let rotation = look_at(position, position * 2.0, Vec3::Y);
        let euler = euler_xyz_from_matrix(rotation);
        assert_mat_close(matrix_from_euler_xyz(euler), rotation);
    }

    #[test]
    fn facing_straight_up_does_not_produce_nan() {
        let rotation = look_at(Vec3::ZERO, Vec3::Y, Vec3::Y);
        let euler = euler_xyz_from_matrix(rotation);
        assert!(euler.is_finite());
        assert!((rotation * Vec3::Z).y > 0.99);
    }

    #[test]
    fn identity_has_zero_angles() {
        assert_eq!(euler_xyz_from_matrix(Mat3::IDENTITY), Vec3::ZERO);
    }
}

use glam::Vec3;

/// Converts spherical coordinates to a point. `phi` is the polar angle measured
/// from +Y and `theta` the azimuth around Y, measured from +Z towards +X.
pub fn from_spherical(radius: f32, phi: f32, theta: f32) -> Vec3 {
    let sin_phi_radius = phi.sin() * radius;

    Vec3::new(
        sin_phi_radius * theta.sin(),
        phi.cos() * radius,
        sin_phi_radius * theta.cos(),
    )
}

/// Converts cylindrical coordinates around the Y axis to a point.
pub fn from_cylindrical(radius: f32, theta: f32, y: f32) -> Vec3 {
    Vec3::new(radius * theta.sin(), y, radius * theta.cos())
}

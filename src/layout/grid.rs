use glam::Vec3;

use crate::scene_graph::Transform;

const COLUMNS: usize = 5;
const ROWS: usize = 4;
const PER_LAYER: usize = COLUMNS * ROWS;
const SPACING: f32 = 400.0;
const LAYER_DEPTH: f32 = 800.0;

pub fn transform(index: usize) -> Transform {
    let column = (index % COLUMNS) as f32;
    let row = ((index / COLUMNS) % ROWS) as f32;
    let layer = (index / PER_LAYER) as f32;

    Transform::from_position(Vec3::new(
        column * SPACING - 800.0,
        -(row * SPACING) + 600.0,
        layer * -LAYER_DEPTH + 1000.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_step_back_every_twenty() {
        assert_eq!(transform(0).position.to_array(), [-800.0, 600.0, 1000.0]);
        assert_eq!(transform(19).position.to_array(), [800.0, -600.0, 1000.0]);
        assert_eq!(transform(20).position.to_array(), [-800.0, 600.0, 200.0]);
        assert_eq!(transform(47).position.to_array(), [0.0, 200.0, -600.0]);
    }
}

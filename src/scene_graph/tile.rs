use std::cell::Cell;

use glam::Mat4;
use id_arena::Id;

use crate::record::TileCard;
use crate::scene_graph::transform::Transform;

pub type TileId = Id<Tile>;

/// The on-screen object for one record. Only its live transform changes after
/// creation.
#[derive(Debug, Clone)]
pub struct Tile {
    pub record_index: usize,
    pub card: TileCard,
    transform: Transform,
    world_matrix: Cell<Mat4>,
    world_dirty: Cell<bool>,
}

impl Tile {
    pub fn new(record_index: usize, card: TileCard, transform: Transform) -> Self {
        Self {
            record_index,
            card,
            transform,
            world_matrix: Cell::new(Mat4::IDENTITY),
            world_dirty: Cell::new(true),
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        if self.transform != transform {
            self.transform = transform;
            self.world_dirty.set(true);
        }
    }

    /// Recomputes the cached world matrix if the transform moved since the
    /// last call.
    pub fn update_world_matrix(&self) -> bool {
        if !self.world_dirty.get() {
            return false;
        }

        self.world_matrix.set(self.transform.matrix());
        self.world_dirty.set(false);
        true
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.update_world_matrix();
        self.world_matrix.get()
    }
}

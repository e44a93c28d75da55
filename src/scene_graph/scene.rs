use id_arena::Arena;

use crate::record::Record;
use crate::scene_graph::tile::{Tile, TileId};
use crate::scene_graph::transform::Transform;

/// Records plus one tile per record, kept in record order.
pub struct Scene {
    tiles: Arena<Tile>,
    order: Vec<TileId>,
    records: Vec<Record>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            tiles: Arena::new(),
            order: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Adds a record and spawns its tile at `initial`.
    pub fn spawn_tile(&mut self, record: Record, initial: Transform) -> TileId {
        let record_index = self.records.len();
        let tile = Tile::new(record_index, record.card(), initial);
        self.records.push(record);

        let id = self.tiles.alloc(tile);
        self.order.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn tile_id(&self, index: usize) -> Option<TileId> {
        self.order.get(index).copied()
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tile_id(index).and_then(|id| self.tiles.get(id))
    }

    /// Tiles in record order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.order.iter().filter_map(|id| self.tiles.get(*id))
    }

    pub fn transforms(&self) -> Vec<Transform> {
        self.tiles().map(|tile| *tile.transform()).collect()
    }

    pub fn set_tile_transform(&mut self, index: usize, transform: Transform) {
        if let Some(tile) = self
            .order
            .get(index)
            .and_then(|id| self.tiles.get_mut(*id))
        {
            tile.set_transform(transform);
        }
    }

    /// Refreshes cached world matrices, returning how many were stale.
    pub fn late_update(&self) -> usize {
        self.tiles()
            .filter(|tile| tile.update_world_matrix())
            .count()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

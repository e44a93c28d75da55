pub mod scene;
pub mod tile;
pub mod transform;

pub use scene::Scene;
pub use tile::{Tile, TileId};
pub use transform::Transform;

pub mod renderer;

pub use renderer::{HeadlessRenderer, ProjectedTile, Renderer};

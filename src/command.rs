use glam::Vec2;

use crate::layout::{LayoutKind, UnknownLayout};

/// Everything the UI can ask the gallery to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SelectLayout(LayoutKind),
    ShowDetail(usize),
    Resize { width: u32, height: u32 },
    Orbit(Vec2),
    Zoom(f32),
}

impl Command {
    /// Maps a layout selector id (`table`, `sphere`, `helix`, `grid`).
    pub fn from_selector(id: &str) -> Result<Command, UnknownLayout> {
        Ok(Command::SelectLayout(id.parse()?))
    }
}

pub mod bounds;
pub mod coords;
pub mod orientation;

pub mod animation;
pub mod app;
pub mod camera;
pub mod command;
pub mod config;
pub mod controls;
pub mod data_source;
pub mod engine;
pub mod gallery;
pub mod identity;
pub mod layout;
pub mod math;
pub mod notifications;
pub mod profile;
pub mod record;
pub mod rendering;
pub mod scene_graph;

#[cfg(test)]
mod test_support;

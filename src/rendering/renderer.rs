use glam::{Vec2, Vec3, Vec4Swizzles};
use itertools::Itertools;

use crate::camera::Camera;
use crate::record::TileCard;
use crate::scene_graph::Scene;

pub trait Renderer {
    fn render(&mut self, scene: &Scene, camera: &Camera);

    fn resize(&mut self, width: u32, height: u32);
}

/// Where a tile's center landed on screen in the last frame, with the face
/// drawn there.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedTile {
    pub index: usize,
    pub card: TileCard,
    pub screen: Vec2,
    pub depth: f32,
    pub visible: bool,
}

/// Projects tiles without drawing anything. Tiles are kept back to front,
/// the order a compositor would paint them in.
pub struct HeadlessRenderer {
    width: u32,
    height: u32,
    frames: u64,
    last_frame: Vec<ProjectedTile>,
}

impl HeadlessRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frames: 0,
            last_frame: Vec::new(),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> &[ProjectedTile] {
        &self.last_frame
    }

    pub fn visible_count(&self) -> usize {
        self.last_frame.iter().filter(|tile| tile.visible).count()
    }
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, scene: &Scene, camera: &Camera) {
        let view_projection = camera.get_vp_matrix();
        let size = Vec2::new(self.width as f32, self.height as f32);

        self.last_frame = scene
            .tiles()
            .enumerate()
            .map(|(index, tile)| {
                let center = tile.world_matrix().transform_point3(Vec3::ZERO);
                let clip = view_projection * center.extend(1.0);
                let ndc = clip.xyz() / clip.w;

                let visible = clip.w > 0.0
                    && ndc.x.abs() <= 1.0
                    && ndc.y.abs() <= 1.0
                    && ndc.z.abs() <= 1.0;
                let screen = Vec2::new(ndc.x + 1.0, 1.0 - ndc.y) * 0.5 * size;

                ProjectedTile {
                    index,
                    card: tile.card.clone(),
                    screen,
                    depth: clip.w,
                    visible,
                }
            })
            .sorted_by(|a, b| b.depth.total_cmp(&a.depth))
            .collect();

        self.frames += 1;
        log::trace!(
            "Frame {}: {} of {} tiles visible",
            self.frames,
            self.visible_count(),
            self.last_frame.len()
        );
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

use std::time::Duration;

use anyhow::{bail, ensure, Context};
use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::animation::TransitionAnimator;
use crate::camera::Camera;
use crate::command::Command;
use crate::config::AppConfig;
use crate::controls::TrackballControls;
use crate::layout::{compute_layouts, LayoutKind, LayoutSet};
use crate::record::{ProfileDetail, Record};
use crate::scene_graph::{Scene, Transform};

/// All visualization state, owned in one place. Commands are the only way in.
pub struct Gallery {
    pub scene: Scene,
    pub camera: Camera,
    layouts: LayoutSet,
    animator: TransitionAnimator,
    controls: TrackballControls,
    active_layout: Option<LayoutKind>,
    detail: Option<ProfileDetail>,
    base_duration: Duration,
    scatter_extent: f32,
    seed: Option<u64>,
    pending_redraw: bool,
    pending_resize: Option<(u32, u32)>,
}

impl Gallery {
    pub fn new(config: &AppConfig) -> Self {
        let animator = match config.seed {
            Some(seed) => TransitionAnimator::with_seed(seed),
            None => TransitionAnimator::new(),
        }
        .with_easing(config.easing);

        Self {
            scene: Scene::new(),
            camera: Camera::new(
                config.camera.distance,
                config.viewport.width,
                config.viewport.height,
            ),
            layouts: LayoutSet::default(),
            animator,
            controls: TrackballControls::new(config.camera.rotate_speed),
            active_layout: None,
            detail: None,
            base_duration: Duration::from_millis(config.base_duration_ms),
            scatter_extent: config.scatter_extent,
            seed: config.seed,
            pending_redraw: false,
            pending_resize: None,
        }
    }

    /// Spawns one tile per record at a random spot, computes every layout and
    /// starts moving into the table.
    pub fn load(&mut self, records: Vec<Record>, now: Duration) -> anyhow::Result<()> {
        ensure!(self.scene.is_empty(), "records are already loaded");

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };
        let half = self.scatter_extent * 0.5;

        for record in records {
            let mut coordinate = || {
                if half > 0.0 {
                    rng.gen_range(-half..half)
                } else {
                    0.0
                }
            };
            let position = Vec3::new(coordinate(), coordinate(), coordinate());
            self.scene.spawn_tile(record, Transform::from_position(position));
        }

        self.layouts = compute_layouts(self.scene.len());
        for kind in LayoutKind::ALL {
            if let Some(bounds) = self.layouts.bounds(kind) {
                log::debug!(
                    "{kind} layout spans {:?} around {:?}",
                    bounds.size(),
                    bounds.center()
                );
            }
        }
        log::info!("Created {} tiles", self.scene.len());

        self.transform(LayoutKind::Table, self.base_duration, now)
    }

    pub fn transform(
        &mut self,
        kind: LayoutKind,
        base_duration: Duration,
        now: Duration,
    ) -> anyhow::Result<()> {
        self.animator
            .transform(&self.scene, self.layouts.get(kind), base_duration, now)
            .with_context(|| format!("Failed to start {kind} transition"))?;
        self.active_layout = Some(kind);
        log::info!("Transition to {kind}");
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command, now: Duration) -> anyhow::Result<()> {
        match command {
            Command::SelectLayout(kind) => self.transform(kind, self.base_duration, now)?,
            Command::ShowDetail(index) => {
                let Some(record) = self.scene.record(index) else {
                    bail!("no tile at index {index}");
                };
                self.detail = Some(record.detail());
            }
            Command::Resize { width, height } => {
                self.camera.resize(width, height);
                self.pending_resize = Some((width, height));
                self.pending_redraw = true;
            }
            Command::Orbit(delta) => self.controls.rotate(delta),
            Command::Zoom(amount) => self.controls.zoom(amount),
        }

        Ok(())
    }

    /// Advances transitions and camera input. Returns whether a redraw is due.
    pub fn update(&mut self, now: Duration) -> bool {
        let animated = self.animator.update(&mut self.scene, now);
        let moved = self.controls.update(&mut self.camera);
        let requested = std::mem::take(&mut self.pending_redraw);

        animated || moved || requested
    }

    pub fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.pending_resize.take()
    }

    pub fn layouts(&self) -> &LayoutSet {
        &self.layouts
    }

    pub fn active_layout(&self) -> Option<LayoutKind> {
        self.active_layout
    }

    pub fn detail(&self) -> Option<&ProfileDetail> {
        self.detail.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }
}

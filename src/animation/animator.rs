use std::time::Duration;

use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::animation::easing::Easing;
use crate::animation::ticker::{RefreshTicker, Tick};
use crate::animation::tween::{Channel, Tween};
use crate::scene_graph::{Scene, Transform};

/// Moves every tile from where it is to a set of targets.
///
/// Only one transition is ever live: starting a new one drops every tween of
/// the previous one, leaving tiles wherever they were at that moment.
pub struct TransitionAnimator {
    tweens: Vec<Tween>,
    ticker: Option<RefreshTicker>,
    easing: Easing,
    rng: StdRng,
}

impl TransitionAnimator {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            tweens: Vec::new(),
            ticker: None,
            easing: Easing::default(),
            rng,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Starts a transition of every tile in `scene` to the matching entry of
    /// `targets`. Position and rotation each get their own duration drawn from
    /// `[base_duration, 2 * base_duration)`.
    pub fn transform(
        &mut self,
        scene: &Scene,
        targets: &[Transform],
        base_duration: Duration,
        now: Duration,
    ) -> anyhow::Result<()> {
        ensure!(
            scene.len() == targets.len(),
            "transition has {} targets for {} tiles",
            targets.len(),
            scene.len()
        );

        self.tweens.clear();
        self.tweens.reserve(targets.len() * 2);

        for (tile, (current, target)) in scene.tiles().zip(targets).enumerate() {
            let current = current.transform();

            let duration = self.draw_duration(base_duration);
            self.tweens.push(Tween::new(
                tile,
                Channel::Position,
                current.position,
                target.position,
                now,
                duration,
                self.easing,
            ));

            let duration = self.draw_duration(base_duration);
            self.tweens.push(Tween::new(
                tile,
                Channel::Rotation,
                current.rotation,
                target.rotation,
                now,
                duration,
                self.easing,
            ));
        }

        self.ticker = Some(RefreshTicker::new(now, base_duration * 2));
        log::debug!(
            "Started transition of {} tiles, base duration {:?}",
            targets.len(),
            base_duration
        );

        Ok(())
    }

    fn draw_duration(&mut self, base: Duration) -> Duration {
        if base.is_zero() {
            return Duration::ZERO;
        }

        let base = base.as_secs_f64();
        Duration::from_secs_f64(self.rng.gen_range(base..base * 2.0))
    }

    /// Advances every tween to `now`, writing into the scene. Returns whether
    /// this frame needs to be drawn.
    pub fn update(&mut self, scene: &mut Scene, now: Duration) -> bool {
        let animating = !self.tweens.is_empty();

        for tween in &self.tweens {
            let Some(tile) = scene.tile(tween.tile) else {
                continue;
            };

            let mut transform = *tile.transform();
            let value = tween.sample(now);
            match tween.channel {
                Channel::Position => transform.position = value,
                Channel::Rotation => transform.rotation = value,
            }
            scene.set_tile_transform(tween.tile, transform);
        }

        self.tweens.retain(|tween| !tween.is_finished(now));

        let ticking = match self.ticker.map(|ticker| ticker.poll(now)) {
            Some(Tick::Running) => true,
            Some(Tick::Finished) => {
                self.ticker = None;
                log::debug!("Transition finished");
                true
            }
            None => false,
        };

        animating || ticking
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn tweens_for(&self, tile: usize) -> impl Iterator<Item = &Tween> + '_ {
        self.tweens.iter().filter(move |tween| tween.tile == tile)
    }
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self::new()
    }
}

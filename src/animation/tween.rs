use std::time::Duration;

use glam::Vec3;

use crate::animation::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Position,
    Rotation,
}

/// Interpolates one channel of one tile between two values.
#[derive(Debug, Clone)]
pub struct Tween {
    pub tile: usize,
    pub channel: Channel,
    from: Vec3,
    to: Vec3,
    start: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(
        tile: usize,
        channel: Channel,
        from: Vec3,
        to: Vec3,
        start: Duration,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            tile,
            channel,
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.duration
    }

    /// Value at `now`. Once the duration has elapsed this is exactly `to`.
    pub fn sample(&self, now: Duration) -> Vec3 {
        if self.is_finished(now) {
            return self.to;
        }

        let elapsed = now.saturating_sub(self.start);
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32;
        self.from.lerp(self.to, self.easing.apply(t))
    }
}

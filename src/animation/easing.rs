use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    ExponentialInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::ExponentialInOut => exponential_in_out(t),
        }
    }
}

/// Slow at both ends, fast through the middle. Exactly 0 at 0 and 1 at 1.
pub fn exponential_in_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let k = t * 2.0;
    if k < 1.0 {
        0.5 * 2f32.powf(10.0 * (k - 1.0))
    } else {
        0.5 * (2.0 - 2f32.powf(-10.0 * (k - 1.0)))
    }
}

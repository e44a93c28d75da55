pub mod animator;
pub mod easing;
pub mod ticker;
pub mod tween;

pub use animator::TransitionAnimator;
pub use easing::Easing;

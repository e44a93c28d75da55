use std::time::Duration;

/// Keeps the renderer refreshing for a fixed window after a transition
/// starts, then asks for one final frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicker {
    start: Duration,
    duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Running,
    Finished,
}

impl RefreshTicker {
    pub fn new(start: Duration, duration: Duration) -> Self {
        Self { start, duration }
    }

    pub fn poll(&self, now: Duration) -> Tick {
        if now.saturating_sub(self.start) >= self.duration {
            Tick::Finished
        } else {
            Tick::Running
        }
    }
}

use std::time::Duration;

pub const TOAST_LIFETIME: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Duration,
}

/// Short-lived status messages, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    active: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, now: Duration) {
        self.active.push(Toast {
            message: message.into(),
            kind,
            shown_at: now,
        });
    }

    /// Drops toasts that have been up for their full lifetime.
    pub fn expire(&mut self, now: Duration) -> usize {
        let before = self.active.len();
        self.active
            .retain(|toast| now.saturating_sub(toast.shown_at) < TOAST_LIFETIME);
        before - self.active.len()
    }

    pub fn active(&self) -> &[Toast] {
        &self.active
    }
}

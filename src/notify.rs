use std::time::{Duration, Instant};

pub const PREPARING_MESSAGE: &str = "Preparing your quiz...";
pub const READY_MESSAGE: &str = "Quiz ready! 🎉";
pub const FAILED_MESSAGE: &str = "Failed to start quiz. Please try again.";

const READY_DURATION: Duration = Duration::from_millis(3000);
const FAILED_DURATION: Duration = Duration::from_millis(4000);

/// Upload lifecycle events surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Preparing,
    Ready,
    Failed,
}

/// Fire-and-forget sink for upload notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: &'static str,
    pub shown_at: Instant,
    pub duration: Option<Duration>,
}

impl Toast {
    fn expired(&self, now: Instant) -> bool {
        self.duration
            .is_some_and(|d| now.duration_since(self.shown_at) >= d)
    }
}

/// Toast stack drawn in the top-right corner.
///
/// A loading toast stays until the matching outcome arrives; outcome toasts
/// expire on their own.
#[derive(Debug, Default)]
pub struct Toasts {
    toasts: Vec<Toast>,
    next_id: u64,
    loading_id: Option<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, kind: ToastKind, message: &'static str, duration: Option<Duration>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message,
            shown_at: Instant::now(),
            duration,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drops expired toasts, returns true if anything changed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.expired(now));
        before != self.toasts.len()
    }

    fn dismiss_loading(&mut self) {
        if let Some(id) = self.loading_id.take() {
            self.dismiss(id);
        }
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notification: Notification) {
        match notification {
            Notification::Preparing => {
                self.dismiss_loading();
                let id = self.push(ToastKind::Loading, PREPARING_MESSAGE, None);
                self.loading_id = Some(id);
            }
            Notification::Ready => {
                self.dismiss_loading();
                self.push(ToastKind::Success, READY_MESSAGE, Some(READY_DURATION));
            }
            Notification::Failed => {
                self.dismiss_loading();
                self.push(ToastKind::Error, FAILED_MESSAGE, Some(FAILED_DURATION));
            }
        }
    }
}

#[cfg(test)]
pub struct RecordingNotifier {
    pub received: Vec<Notification>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            received: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.received.push(notification);
    }
}

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

/// Toasts visible at the same time; the oldest is dropped first.
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Error,
    Warning,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Transient user-facing messages.
#[derive(Debug)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl Notifications {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl: i64::try_from(ttl_seconds)
                .ok()
                .and_then(Duration::try_seconds)
                .unwrap_or(Duration::MAX),
        }
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text.into());
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Warning, text.into());
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text.into());
    }

    fn push(&mut self, level: ToastLevel, text: String) {
        self.toasts.push_back(Toast {
            level,
            text,
            created_at: Utc::now(),
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drops toasts older than the configured lifetime.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.signed_duration_since(toast.created_at) < ttl);
    }

    pub fn dismiss(&mut self, index: usize) {
        self.toasts.remove(index);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

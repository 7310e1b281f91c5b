//! Toast notifications
//!
//! A small queue shown in the bottom-right corner. The oldest toast is
//! removed once the queue has been left unchanged for [`TOAST_TTL`];
//! any toast can also be dismissed by hand.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Quiet period after which the oldest toast is removed
pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Text and severity of a notification, before it is queued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    last_change: Instant,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_ttl(TOAST_TTL)
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            last_change: Instant::now(),
            ttl,
        }
    }

    pub fn push(&mut self, notice: Notice) -> u64 {
        self.push_at(notice, Instant::now())
    }

    pub fn push_at(&mut self, notice: Notice, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            kind: notice.kind,
            message: notice.message,
        });
        self.last_change = now;
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        if self.toasts.len() != before {
            self.last_change = Instant::now();
        }
    }

    /// Drop the oldest toast if the queue has been quiet long enough
    ///
    /// Returns how long until the next expiry, if any toast remains.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if self.toasts.is_empty() {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.last_change);
        if elapsed >= self.ttl {
            self.toasts.pop_front();
            self.last_change = now;
            return (!self.toasts.is_empty()).then_some(self.ttl);
        }
        Some(self.ttl - elapsed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

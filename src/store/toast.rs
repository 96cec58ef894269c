//! Toast Notifications
//!
//! Transient, dismissible messages. Expiry is driven from outside via
//! `expire(now)` so the store itself never touches a timer.

use chrono::{DateTime, Duration, Utc};
use leptos::prelude::*;

use crate::icon::Icon;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// CSS modifier
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub icon: Icon,
    pub duration_secs: u32,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(i64::from(self.duration_secs))
    }
}

#[derive(Debug, Clone, Default)]
struct ToastQueue {
    next_id: ToastId,
    toasts: Vec<Toast>,
}

/// Toast queue shared via context
#[derive(Clone, Copy)]
pub struct ToastStore {
    queue: RwSignal<ToastQueue>,
    error_secs: u32,
}

impl ToastStore {
    pub fn new(error_secs: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            error_secs,
        }
    }

    pub fn show(
        &self,
        title: &str,
        message: &str,
        severity: Severity,
        icon: Icon,
        duration_secs: u32,
    ) -> ToastId {
        let mut id = 0;
        self.queue.update(|queue| {
            queue.next_id += 1;
            id = queue.next_id;
            queue.toasts.push(Toast {
                id,
                title: title.to_string(),
                message: message.to_string(),
                severity,
                icon,
                duration_secs,
                created_at: Utc::now(),
            });
        });
        id
    }

    pub fn error(&self, message: &str) -> ToastId {
        log::error!("[Toast] {}", message);
        self.show("Error", message, Severity::Error, Icon::Xmark, self.error_secs)
    }

    pub fn success(&self, message: &str) -> ToastId {
        self.show("Erfolg", message, Severity::Success, Icon::Check, 3)
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|queue| queue.toasts.retain(|t| t.id != id));
    }

    /// Drop every toast whose display time has run out by `now`.
    pub fn expire(&self, now: DateTime<Utc>) {
        let any_due = self
            .queue
            .with_untracked(|queue| queue.toasts.iter().any(|t| t.expires_at() <= now));
        if any_due {
            self.queue.update(|queue| queue.toasts.retain(|t| t.expires_at() > now));
        }
    }

    /// Visible toasts, oldest first (tracked)
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with(|queue| queue.toasts.clone())
    }

    pub fn visible_untracked(&self) -> Vec<Toast> {
        self.queue.with_untracked(|queue| queue.toasts.clone())
    }
}

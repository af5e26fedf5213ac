//! Shared types for the `Jokebox` UI.

/// Type of notification to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Informational message.
    #[default]
    Info,
    /// Success message.
    Success,
    /// Error message.
    Error,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Unique identifier for this notification.
    pub id: u64,
    /// The notification type.
    pub notification_type: NotificationType,
    /// The message to display.
    pub message: String,
    /// Duration in milliseconds before auto-dismiss (None = manual dismiss only).
    pub duration_ms: Option<u64>,
}

impl Notification {
    /// Create a new notification with a unique ID.
    #[must_use]
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);

        Self {
            id: COUNTER.fetch_add(1, Ordering::Relaxed),
            notification_type,
            message: message.into(),
            duration_ms: Some(5000),
        }
    }

    /// Create an info notification.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Info, message)
    }

    /// Create a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationType::Success, message)
    }

    /// Create an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        let mut notification = Self::new(NotificationType::Error, message);
        // Errors stay visible longer
        notification.duration_ms = Some(8000);
        notification
    }

    /// Set the duration for this notification.
    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_ids_are_unique() {
        let a = Notification::info("first");
        let b = Notification::info("second");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_error_notifications_linger() {
        let info = Notification::info("ok");
        let error = Notification::error("boom");
        assert!(error.duration_ms > info.duration_ms);
    }

    #[test]
    fn test_notification_type_display() {
        assert_eq!(NotificationType::Info.to_string(), "info");
        assert_eq!(NotificationType::Success.to_string(), "success");
        assert_eq!(NotificationType::Error.to_string(), "error");
    }
}

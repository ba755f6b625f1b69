// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::app::config::{TOAST_LONG_MS, TOAST_SHORT_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Short glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_millis(TOAST_SHORT_MS)),
            Severity::Warning => Some(Duration::from_millis(TOAST_LONG_MS)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Fluent arguments for message interpolation.
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` is resolved through i18n at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns whether this notification has outlived its display duration
    /// at instant `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        assert_eq!(
            Severity::Success.auto_dismiss_duration(),
            Severity::Info.auto_dismiss_duration()
        );
        assert!(Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration());
    }

    #[test]
    fn expiry_follows_severity_duration() {
        let notification = Notification::success("saved");
        let created = notification.created_at;
        assert!(!notification.is_expired_at(created));
        assert!(notification.is_expired_at(created + Duration::from_millis(TOAST_SHORT_MS)));

        let error = Notification::error("failed");
        assert!(!error.is_expired_at(error.created_at + Duration::from_secs(3600)));
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("notification-download-error")
            .with_arg("file", "offerletter1.pdf");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "notification-download-error");
        assert_eq!(
            notification.message_args(),
            &[("file".to_string(), "offerletter1.pdf".to_string())]
        );
    }
}

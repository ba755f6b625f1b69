// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of actions
//! (document saved, file could not be opened, manifest rejected) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-download-success"));
//!
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success and info toasts last 3s, warnings 5s, errors until dismissed.
//! At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;

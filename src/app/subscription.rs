// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both subscriptions are scoped: the keyboard listener exists only while
//! the preview is open, and the tick only while toasts are on screen.

use super::Message;
use crate::ui::gallery;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Tick interval for notification expiry.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes preview key presses to the gallery while `listening` is true.
///
/// Key presses already captured by a widget (e.g. typing in the search box)
/// are ignored.
pub fn create_keyboard_subscription(listening: bool) -> Subscription<Message> {
    if !listening {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                gallery::preview_action_for_key(&key)
                    .map(|action| Message::Gallery(gallery::Message::Preview(action)))
            }
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

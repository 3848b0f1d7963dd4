// SPDX-License-Identifier: MPL-2.0
//! Time and keyboard subscriptions.
//!
//! Each subscription exists only while its condition holds; iced drops it
//! as soon as the condition turns false.

use super::config::{RECORDING_TICK_MS, UI_TICK_MS};
use super::{FeedDirection, Message};
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// One tick per second while a take is being recorded.
pub fn create_recording_subscription(recording: bool) -> Subscription<Message> {
    if recording {
        time::every(Duration::from_millis(RECORDING_TICK_MS)).map(|_| Message::RecordingTick)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for toast auto-dismiss and drawer
/// success states.
pub fn create_tick_subscription(
    has_notifications: bool,
    success_pending: bool,
) -> Subscription<Message> {
    if has_notifications || success_pending {
        time::every(Duration::from_millis(UI_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Up and down arrows move through the feed while it is on screen.
///
/// Keys already handled by a widget (a focused text input) are ignored.
pub fn create_keyboard_subscription(feed_visible: bool) -> Subscription<Message> {
    if !feed_visible {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                feed_direction(&key).map(Message::FeedKey)
            }
            _ => None,
        }
    })
}

fn feed_direction(key: &keyboard::Key) -> Option<FeedDirection> {
    match key {
        keyboard::Key::Named(key::Named::ArrowUp) => Some(FeedDirection::Previous),
        keyboard::Key::Named(key::Named::ArrowDown) => Some(FeedDirection::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_feed_directions() {
        assert_eq!(
            feed_direction(&keyboard::Key::Named(key::Named::ArrowUp)),
            Some(FeedDirection::Previous)
        );
        assert_eq!(
            feed_direction(&keyboard::Key::Named(key::Named::ArrowDown)),
            Some(FeedDirection::Next)
        );
        assert_eq!(
            feed_direction(&keyboard::Key::Named(key::Named::Enter)),
            None
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Routes arrow keys to card navigation.
///
/// Key presses already captured by a widget are ignored.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Next),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Previous),
            _ => None,
        }
    })
}

/// Creates the auto-advance tick, if enabled.
pub fn create_auto_advance_subscription(interval_secs: Option<u64>) -> Subscription<Message> {
    match interval_secs {
        Some(secs) => time::every(Duration::from_secs(secs)).map(Message::AutoAdvance),
        None => Subscription::none(),
    }
}

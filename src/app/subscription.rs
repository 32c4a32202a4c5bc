// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the tick driving toast expiry and the spinner.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes files dropped on the window to the upload flow.
///
/// Drops are accepted in every state; a drop while a transform is running
/// replaces the image and the late result is discarded.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }
        None
    })
}

/// Ticks only while something animates or may expire.
pub fn create_tick_subscription(is_busy: bool, has_notifications: bool) -> Subscription<Message> {
    if is_busy || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

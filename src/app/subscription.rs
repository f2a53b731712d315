// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window events (close, file drop) and keyboard shortcuts.
//! Shortcuts only fire for events no widget captured, so typing in the
//! rotation interval field never toggles the clock.

use super::Message;
use crate::ui::timer::{self, controls};
use iced::keyboard::{self, key, Key, Modifiers};
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        // Handle window close request for cleanup
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::FileDropped(path.clone()));
        }

        match (event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
                event::Status::Ignored,
            ) => shortcut(&key, modifiers)
                .map(|msg| Message::Timer(timer::Message::Controls(msg))),
            _ => None,
        }
    })
}

/// Space toggles the clock, `R` resets it.
pub fn shortcut(key: &Key, modifiers: Modifiers) -> Option<controls::Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }
    match key {
        Key::Named(key::Named::Space) => Some(controls::Message::Toggle),
        Key::Character(c) if c.eq_ignore_ascii_case("r") => Some(controls::Message::Reset),
        _ => None,
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::player::PlayerShell;
use iced::{window, Subscription};

/// Player subscriptions plus the window-open stream.
///
/// The player's set changes with its state: media notifications while an
/// element is attached, pointer capture during a seek drag, frames while
/// anything animates.
pub fn create(shell: &PlayerShell) -> Subscription<Message> {
    Subscription::batch([
        shell.subscription().map(Message::Player),
        window::open_events().map(Message::WindowOpened),
    ])
}

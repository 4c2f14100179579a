// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::ui::player::shell;
use iced::window;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Player(shell::Message),
    /// The main window opened; fullscreen requests need its id.
    WindowOpened(window::Id),
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Settings already loaded by `main`.
    pub config: Config,
    /// Media location overriding the configured one.
    pub source: Option<String>,
    /// Poster location overriding the configured one.
    pub poster: Option<String>,
}

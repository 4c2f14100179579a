// SPDX-License-Identifier: MPL-2.0
//! The video player widget.
//!
//! # Architecture
//!
//! The player is split into nested sub-components, each with its own
//! `State`, `Message` and `Effect` and a `handle()` method:
//!
//! - [`clock`]: position and duration mirrored from media notifications
//! - [`progress`]: seek gesture on the track (drag session, hover preview)
//! - [`volume`]: level, mute with one-level undo, collapsible slider
//! - [`controls`]: play/pause morph, time readout, fullscreen button
//! - [`overlay`]: idle auto-hide of the controls, centre play button
//!
//! [`shell::PlayerShell`] owns all of them together with the media element
//! and the animator. It turns sub-component effects into element commands
//! and motion requests, and surfaces the few effects that need the runtime
//! (idle timers, window mode) to the application.
//!
//! ```text
//!  MediaElement ──notifications──▶ PlayerShell ──▶ clock / progress / volume / overlay
//!       ▲                              │
//!       └──── play, pause, seek ◀──────┤──▶ Animator (fire-and-forget motion)
//!                                      └──▶ Effect (timer, fullscreen) ──▶ App
//! ```

pub mod clock;
pub mod controls;
pub mod overlay;
pub mod progress;
pub mod shell;
pub mod volume;

pub use shell::PlayerShell;

use crate::i18n::fluent::I18n;
use crate::motion::Animator;

/// What every sub-component view needs besides its own state.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Source of animated property values.
    pub animator: &'a dyn Animator,
    /// Opacity of the controls overlay the view sits in.
    pub opacity: f32,
}

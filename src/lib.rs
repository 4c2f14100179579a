// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a themed video player widget built with the Iced GUI
//! framework.
//!
//! It drives a host media element through a small trait, mirrors playback
//! state from the element's notifications, and renders custom controls
//! (play/pause morph, seek track with drag preview, expanding volume
//! slider, fullscreen toggle) whose every visual change goes through a
//! fire-and-forget animator.

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod motion;
pub mod ui;

#[cfg(test)]
mod test_utils;

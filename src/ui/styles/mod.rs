// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the player widgets.
//!
//! Styles that depend on an animated opacity take it as a parameter and
//! return a closure, so the view can fade widgets that Iced has no opacity
//! knob for.

pub mod button;
pub mod container;
pub mod overlay;
pub mod slider;

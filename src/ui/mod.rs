// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`player`] - The video player and its sub-components
//! - [`state`] - Small value types shared by the components (drag, idle delay)
//! - [`widgets`] - Custom Iced widgets (canvas progress track)
//! - [`styles`] - Centralized styling (buttons, containers, overlays, sliders)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG glyphs

pub mod design_tokens;
pub mod icons;
pub mod player;
pub mod state;
pub mod styles;
pub mod widgets;

// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Small value types shared by the player components.

pub mod drag;
pub mod idle_timeout;

// Re-export commonly used types for convenience
pub use drag::{DragState, TrackBounds};
pub use idle_timeout::IdleTimeout;

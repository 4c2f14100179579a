// SPDX-License-Identifier: MPL-2.0
//! Progress track sub-component.
//!
//! Handles the seek gesture on the track. A press starts a drag session
//! that follows the pointer at window level until release, so the session
//! survives the pointer leaving the track. Only the release seeks; every
//! intermediate position is a visual preview.

use crate::motion::{Animation, Easing, Property, Target};
use crate::ui::state::{DragState, TrackBounds};

/// Fill and handle tween duration.
pub const FILL_TWEEN_MS: u64 = 100;

/// Pointer input on the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Press inside the track; starts a drag session.
    PointerDown { x: f32, track: TrackBounds },
    /// Window-level pointer motion during a drag.
    PointerMoved { x: f32 },
    /// Release ends the drag. `None` reuses the last followed position.
    PointerUp { x: Option<f32> },
    /// The window lost the pointer (left the window or lost focus).
    PointerCancelled,
    /// Pointer hovering over the track.
    Hovered { x: f32, track: TrackBounds },
    HoverLeft,
}

/// Effects for the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Show the fill at this fraction; no seek.
    Preview(f64),
    /// Commit a seek to this position, in seconds.
    Seek(f64),
    /// Drag aborted without seeking; the fill should follow the clock again.
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    drag: DragState,
    hover: Option<f64>,
}

impl State {
    /// Handle pointer input. `duration` converts the final fraction to seconds.
    pub fn handle(&mut self, message: Message, duration: f64) -> Effect {
        match message {
            Message::PointerDown { x, track } => {
                if !self.drag.start(track, x) {
                    return Effect::None;
                }
                self.hover = None;
                Effect::Preview(self.drag.fraction)
            }
            Message::PointerMoved { x } => match self.drag.follow(x) {
                Some(fraction) => Effect::Preview(fraction),
                None => Effect::None,
            },
            Message::PointerUp { x } => {
                let fraction = match x {
                    Some(x) => self.drag.finish(x),
                    None => self.drag.release(),
                };
                match fraction {
                    Some(fraction) => Effect::Seek(fraction * duration.max(0.0)),
                    None => Effect::None,
                }
            }
            Message::PointerCancelled => {
                if !self.drag.is_dragging {
                    return Effect::None;
                }
                self.drag.stop();
                Effect::Cancelled
            }
            Message::Hovered { x, track } => {
                if !self.drag.is_dragging {
                    self.hover = Some(track.fraction_at(x));
                }
                Effect::None
            }
            Message::HoverLeft => {
                self.hover = None;
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Fraction under the hovering pointer, outside drag sessions.
    #[must_use]
    pub fn hover_fraction(&self) -> Option<f64> {
        self.hover
    }
}

/// Moves the fill width and the handle offset to `fraction` of the track.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fill_animations(fraction: f64) -> [Animation; 2] {
    let percent = (fraction.clamp(0.0, 1.0) * 100.0) as f32;
    [
        Animation::to(Target::ProgressFill, Property::Width, percent)
            .over_millis(FILL_TWEEN_MS)
            .ease(Easing::Power1Out),
        Animation::to(Target::ProgressHandle, Property::Left, percent)
            .over_millis(FILL_TWEEN_MS)
            .ease(Easing::Power1Out),
    ]
}

// SPDX-License-Identifier: MPL-2.0
//! Seek drag state management
//!
//! Holds the geometry of the progress track captured when a drag session
//! starts and converts pointer positions into track fractions.

/// Horizontal geometry of the progress track, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackBounds {
    pub left: f32,
    pub width: f32,
}

impl TrackBounds {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Fraction of the track under the pointer, clamped to `[0, 1]`.
    ///
    /// A degenerate (zero or negative width) track always yields 0.
    #[must_use]
    pub fn fraction_at(&self, pointer_x: f32) -> f64 {
        if self.width <= 0.0 || !pointer_x.is_finite() {
            return 0.0;
        }
        f64::from(((pointer_x - self.left) / self.width).clamp(0.0, 1.0))
    }
}

/// Manages the single active drag session on the progress track
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag session is currently active
    pub is_dragging: bool,

    /// Track geometry captured when the drag started
    pub track: Option<TrackBounds>,

    /// Latest fraction under the pointer
    pub fraction: f64,
}

impl DragState {
    /// Starts a drag session; returns false if one is already active.
    pub fn start(&mut self, track: TrackBounds, pointer_x: f32) -> bool {
        if self.is_dragging {
            return false;
        }
        self.is_dragging = true;
        self.track = Some(track);
        self.fraction = track.fraction_at(pointer_x);
        true
    }

    /// Follows the pointer; `None` outside a drag session.
    pub fn follow(&mut self, pointer_x: f32) -> Option<f64> {
        if !self.is_dragging {
            return None;
        }
        let track = self.track?;
        self.fraction = track.fraction_at(pointer_x);
        Some(self.fraction)
    }

    /// Ends the session and returns the fraction at `pointer_x`.
    pub fn finish(&mut self, pointer_x: f32) -> Option<f64> {
        let fraction = self.follow(pointer_x);
        self.stop();
        fraction
    }

    /// Ends the session at the last followed position.
    pub fn release(&mut self) -> Option<f64> {
        let fraction = self.is_dragging.then_some(self.fraction);
        self.stop();
        fraction
    }

    /// Stops the session without a final position
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.track = None;
        self.fraction = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const TRACK: TrackBounds = TrackBounds {
        left: 100.0,
        width: 400.0,
    };

    #[test]
    fn fraction_is_relative_to_track_left() {
        assert_abs_diff_eq!(TRACK.fraction_at(100.0), 0.0);
        assert_abs_diff_eq!(TRACK.fraction_at(300.0), 0.5);
        assert_abs_diff_eq!(TRACK.fraction_at(500.0), 1.0);
    }

    #[test]
    fn fraction_is_clamped_outside_track() {
        assert_abs_diff_eq!(TRACK.fraction_at(-50.0), 0.0);
        assert_abs_diff_eq!(TRACK.fraction_at(9000.0), 1.0);
    }

    #[test]
    fn zero_width_track_yields_zero() {
        assert_abs_diff_eq!(TrackBounds::new(10.0, 0.0).fraction_at(50.0), 0.0);
    }

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.track.is_none());
    }

    #[test]
    fn only_one_session_at_a_time() {
        let mut state = DragState::default();
        assert!(state.start(TRACK, 200.0));
        assert!(!state.start(TrackBounds::new(0.0, 10.0), 5.0));
        assert_eq!(state.track, Some(TRACK));
    }

    #[test]
    fn follow_returns_none_when_not_dragging() {
        let mut state = DragState::default();
        assert!(state.follow(200.0).is_none());
    }

    #[test]
    fn finish_returns_final_fraction_and_stops() {
        let mut state = DragState::default();
        state.start(TRACK, 150.0);
        let fraction = state.finish(400.0).unwrap();
        assert_abs_diff_eq!(fraction, 0.75);
        assert!(!state.is_dragging);
        assert!(state.track.is_none());
    }

    #[test]
    fn release_keeps_last_followed_fraction() {
        let mut state = DragState::default();
        state.start(TRACK, 150.0);
        state.follow(300.0);
        assert_eq!(state.release(), Some(0.5));
        assert!(!state.is_dragging);
        assert_eq!(state.release(), None);
    }
}

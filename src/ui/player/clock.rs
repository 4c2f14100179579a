// SPDX-License-Identifier: MPL-2.0
//! Playback clock sub-component.
//!
//! Mirrors the media element's position and duration from its
//! notifications. The clock never queries the element.

use crate::media::MediaEvent;

/// Clock state.
#[derive(Debug, Clone, Default)]
pub struct State {
    current_time: f64,
    duration: f64,
}

/// Effects produced by media notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Position changed.
    TimeChanged,
    /// Duration became known.
    DurationKnown,
    /// Playback ended.
    Ended,
}

impl State {
    /// Handle a media notification.
    pub fn handle(&mut self, event: MediaEvent) -> Effect {
        match event {
            MediaEvent::TimeAdvanced(secs) => {
                if !secs.is_finite() {
                    return Effect::None;
                }
                self.current_time = secs.max(0.0);
                Effect::TimeChanged
            }
            MediaEvent::MetadataReady { duration } => {
                self.duration = if duration.is_finite() {
                    duration.max(0.0)
                } else {
                    0.0
                };
                Effect::DurationKnown
            }
            MediaEvent::Ended => Effect::Ended,
        }
    }

    /// Optimistic position after a seek, clamped to `[0, duration]`.
    pub fn seek_to(&mut self, secs: f64) -> f64 {
        self.current_time = clamp_to_duration(secs, self.duration);
        self.current_time
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Played fraction of the media.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        progress_fraction(self.current_time, self.duration)
    }
}

/// `current / duration` clamped into `[0, 1]`; `0` for an unknown duration.
#[must_use]
pub fn progress_fraction(current_time: f64, duration: f64) -> f64 {
    if duration > 0.0 && current_time.is_finite() {
        (current_time / duration).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Clamps a seek target into `[0, duration]`.
#[must_use]
pub fn clamp_to_duration(secs: f64, duration: f64) -> f64 {
    if !secs.is_finite() {
        return 0.0;
    }
    secs.clamp(0.0, duration.max(0.0))
}

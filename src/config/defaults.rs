// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player. Constants are organized by category.

// ==========================================================================
// Idle-hide Defaults
// ==========================================================================

/// Default inactivity delay before the controls overlay hides (in seconds).
pub const DEFAULT_IDLE_HIDE_SECS: u32 = 3;

/// Minimum idle-hide delay (in seconds).
pub const MIN_IDLE_HIDE_SECS: u32 = 1;

/// Maximum idle-hide delay (in seconds).
pub const MAX_IDLE_HIDE_SECS: u32 = 30;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume applied when the player mounts (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Boundary between the "low" and "high" speaker glyphs.
pub const VOLUME_HIGH_THRESHOLD: f32 = 0.5;

/// Step of the volume slider.
pub const VOLUME_SLIDER_STEP: f32 = 0.01;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Source played when neither the CLI nor the config names one.
pub const DEFAULT_SOURCE: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Poster shown before the first frame.
pub const DEFAULT_POSTER: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/images/BigBuckBunny.jpg";

/// Duration reported by the native stand-in element (Big Buck Bunny).
pub const DEFAULT_PREVIEW_DURATION_SECS: f64 = 596.5;

/// Cadence of time-advanced notifications, matching the browser's
/// `timeupdate` rate.
pub const TIME_UPDATE_INTERVAL_MS: u64 = 250;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_hide_default_within_bounds() {
        assert!(DEFAULT_IDLE_HIDE_SECS >= MIN_IDLE_HIDE_SECS);
        assert!(DEFAULT_IDLE_HIDE_SECS <= MAX_IDLE_HIDE_SECS);
    }

    #[test]
    fn volume_default_within_bounds() {
        assert!((MIN_VOLUME..=MAX_VOLUME).contains(&DEFAULT_VOLUME));
        assert!((MIN_VOLUME..=MAX_VOLUME).contains(&VOLUME_HIGH_THRESHOLD));
    }

    #[test]
    fn preview_duration_is_positive() {
        assert!(DEFAULT_PREVIEW_DURATION_SECS > 0.0);
    }
}

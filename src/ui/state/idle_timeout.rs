// SPDX-License-Identifier: MPL-2.0
//! Idle timeout domain type for the controls overlay.
//!
//! This module provides a type-safe wrapper for the delay, in seconds,
//! after which an idle pointer hides the controls during playback.

use crate::config::{DEFAULT_IDLE_HIDE_SECS, MAX_IDLE_HIDE_SECS, MIN_IDLE_HIDE_SECS};

/// Idle-hide delay in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–30 seconds).
///
/// # Example
///
/// ```
/// use iced_reel::ui::state::IdleTimeout;
///
/// let timeout = IdleTimeout::new(5);
/// assert_eq!(timeout.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = IdleTimeout::new(100);
/// assert_eq!(too_high.value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimeout(u32);

impl IdleTimeout {
    /// Creates a new idle timeout, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_IDLE_HIDE_SECS, MAX_IDLE_HIDE_SECS))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.0))
    }
}

impl Default for IdleTimeout {
    fn default() -> Self {
        Self(DEFAULT_IDLE_HIDE_SECS)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::motion::{Animation, Animator, Property, Target};
use std::time::Instant;

/// Animator that records every request and applies it instantly.
///
/// Lets component tests assert on the motion they asked for without
/// running a frame loop.
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    pub requests: Vec<Animation>,
}

impl RecordingAnimator {
    /// Last destination requested for a target property.
    #[must_use]
    pub fn last_to(&self, target: Target, property: Property) -> Option<f32> {
        self.requests
            .iter()
            .rev()
            .find(|a| a.target == target && a.property == property)
            .map(|a| a.to)
    }
}

impl Animator for RecordingAnimator {
    fn animate(&mut self, animation: Animation) {
        self.requests.push(animation);
    }

    fn value(&self, target: Target, property: Property) -> Option<f32> {
        self.last_to(target, property)
    }

    fn tick(&mut self, _now: Instant) {}

    fn is_animating(&self) -> bool {
        false
    }
}

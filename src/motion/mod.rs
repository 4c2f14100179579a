// SPDX-License-Identifier: MPL-2.0
//! Motion layer: fire-and-forget property animation.
//!
//! Components never own timing. They describe where a visual property
//! should end up and hand that to an [`Animator`]; the view samples the
//! animator when it renders. Swapping the animator (for a recorder in tests,
//! or an instant one) changes nothing else.

pub mod easing;
pub mod tween;

pub use easing::Easing;
pub use tween::Tweener;

use std::time::{Duration, Instant};

/// Visual element an animation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The whole player, for its entrance.
    Player,
    ProgressFill,
    ProgressHandle,
    PlayIcon,
    PauseIcon,
    CenterPlay,
    VolumeSlider,
    VolumeIcon,
    ControlsOverlay,
}

/// Animated property of a [`Target`].
///
/// Units belong to the caller: widths and offsets on the progress track are
/// percentages, the volume slider width and vertical offsets are in logical
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Width,
    Left,
    /// Downward shift from the resting position.
    OffsetY,
    Opacity,
    Scale,
}

/// One property transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub target: Target,
    pub property: Property,
    /// Explicit start value; `None` starts from wherever the property is now.
    pub from: Option<f32>,
    pub to: f32,
    /// Wait before the transition starts; the property holds its start
    /// value meanwhile.
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Animation {
    /// Transition of `property` on `target` towards `to`, linear and instant
    /// until configured otherwise.
    #[must_use]
    pub fn to(target: Target, property: Property, to: f32) -> Self {
        Self {
            target,
            property,
            from: None,
            to,
            delay: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn from(mut self, from: f32) -> Self {
        self.from = Some(from);
        self
    }

    #[must_use]
    pub fn over_millis(mut self, millis: u64) -> Self {
        self.duration = Duration::from_millis(millis);
        self
    }

    #[must_use]
    pub fn after_millis(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }

    #[must_use]
    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Capability to animate visual properties.
///
/// `animate` is fire-and-forget: nothing waits on completion. A new request
/// on the same target and property replaces the running one.
pub trait Animator {
    fn animate(&mut self, animation: Animation);

    /// Current value of a property, if it was ever animated.
    fn value(&self, target: Target, property: Property) -> Option<f32>;

    /// Advances running transitions to `now`.
    fn tick(&mut self, now: Instant);

    /// Whether a frame loop is needed.
    fn is_animating(&self) -> bool;
}

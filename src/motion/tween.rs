// SPDX-License-Identifier: MPL-2.0
//! Frame-driven tween engine.
//!
//! Driven by `iced::window::frames()` while [`Animator::is_animating`] is
//! true. A tween's clock starts on the first tick after it was requested,
//! so requests made inside `update` never lose their first frame.

use super::{Animation, Animator, Easing, Property, Target};
use std::collections::HashMap;
use std::time::{Duration, Instant};

type Key = (Target, Property);

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f32,
    to: f32,
    delay: Duration,
    duration: Duration,
    easing: Easing,
    started: Option<Instant>,
}

impl Tween {
    /// Samples the tween at `now`, returning the value and whether it ended.
    fn sample(&mut self, now: Instant) -> (f32, bool) {
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        let Some(elapsed) = elapsed.checked_sub(self.delay) else {
            return (self.from, false);
        };
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// Default [`Animator`] used by the running application.
#[derive(Debug, Default)]
pub struct Tweener {
    running: HashMap<Key, Tween>,
    values: HashMap<Key, f32>,
}

impl Tweener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Animator for Tweener {
    fn animate(&mut self, animation: Animation) {
        let key = (animation.target, animation.property);
        let from = animation
            .from
            .or_else(|| self.values.get(&key).copied())
            .unwrap_or(animation.to);

        let instant = animation.duration.is_zero() && animation.delay.is_zero();
        if instant || (from - animation.to).abs() <= f32::EPSILON {
            self.running.remove(&key);
            self.values.insert(key, animation.to);
            return;
        }

        self.values.insert(key, from);
        self.running.insert(
            key,
            Tween {
                from,
                to: animation.to,
                delay: animation.delay,
                duration: animation.duration,
                easing: animation.easing,
                started: None,
            },
        );
    }

    fn value(&self, target: Target, property: Property) -> Option<f32> {
        self.values.get(&(target, property)).copied()
    }

    fn tick(&mut self, now: Instant) {
        let values = &mut self.values;
        self.running.retain(|key, tween| {
            let (value, finished) = tween.sample(now);
            values.insert(*key, value);
            !finished
        });
    }

    fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }
}

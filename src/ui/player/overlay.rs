// SPDX-License-Identifier: MPL-2.0
//! Overlay sub-component for controls auto-hide and the centre play button.
//!
//! While playing, the controls hide after an idle delay or as soon as the
//! pointer leaves the player. Every re-arm bumps a generation counter and
//! the timer carries the generation it was armed with, so only the most
//! recent timer can hide anything.

use crate::motion::easing::DEFAULT_OVERSHOOT;
use crate::motion::{Animation, Animator, Easing, Property, Target};
use crate::ui::design_tokens::sizing;
use crate::ui::state::IdleTimeout;
use crate::ui::{icons, styles};
use iced::widget::{button, Space};
use iced::{Element, Length};
use std::time::Duration;

/// Controls fade duration.
pub const FADE_MS: u64 = 300;
/// Centre play show/hide duration.
pub const CENTER_PLAY_MS: u64 = 300;
/// Overshoot when the centre play button pops back in.
pub const CENTER_PLAY_OVERSHOOT: f32 = 1.7;
/// Scale of the hidden centre play button.
const CENTER_PLAY_HIDDEN_SCALE: f32 = 0.8;
/// Centre play entrance: starting scale, wait and duration.
const CENTER_PLAY_INTRO_SCALE: f32 = 0.5;
pub const CENTER_PLAY_INTRO_DELAY_MS: u64 = 500;
pub const CENTER_PLAY_INTRO_MS: u64 = 500;

/// Messages for the overlay sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PointerMoved,
    PointerLeft,
    /// An idle timer armed with this generation fired.
    IdleExpired(u64),
    PlaybackChanged(bool),
}

/// Effects produced by overlay state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Schedule `IdleExpired(generation)` after `delay`.
    ArmTimer { generation: u64, delay: Duration },
    /// Hidden controls came back; the timer was re-armed as for `ArmTimer`.
    Revealed { generation: u64, delay: Duration },
    /// Controls were shown (`true`) or hidden.
    ControlsShown(bool),
}

/// Overlay visibility state.
#[derive(Debug, Clone)]
pub struct State {
    timeout: IdleTimeout,
    generation: u64,
    controls_visible: bool,
    center_play_visible: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(IdleTimeout::default())
    }
}

impl State {
    #[must_use]
    pub fn new(timeout: IdleTimeout) -> Self {
        Self {
            timeout,
            generation: 0,
            controls_visible: true,
            center_play_visible: true,
        }
    }

    /// Handle an overlay message. `is_playing` gates every auto-hide.
    pub fn handle(&mut self, message: Message, is_playing: bool) -> Effect {
        match message {
            Message::PointerMoved => {
                let was_hidden = !self.controls_visible;
                self.controls_visible = true;
                match self.arm() {
                    Effect::ArmTimer { generation, delay } if was_hidden => {
                        Effect::Revealed { generation, delay }
                    }
                    effect => effect,
                }
            }
            Message::PointerLeft => {
                self.generation += 1;
                if is_playing && self.controls_visible {
                    self.controls_visible = false;
                    return Effect::ControlsShown(false);
                }
                Effect::None
            }
            Message::IdleExpired(generation) => {
                if generation != self.generation || !is_playing || !self.controls_visible {
                    return Effect::None;
                }
                tracing::debug!(generation, "controls hidden after idle delay");
                self.controls_visible = false;
                Effect::ControlsShown(false)
            }
            Message::PlaybackChanged(playing) => {
                self.center_play_visible = !playing;
                if playing {
                    return self.arm();
                }
                // Paused: controls stay up and pending timers are void.
                self.generation += 1;
                if self.controls_visible {
                    Effect::None
                } else {
                    self.controls_visible = true;
                    Effect::ControlsShown(true)
                }
            }
        }
    }

    fn arm(&mut self) -> Effect {
        self.generation += 1;
        Effect::ArmTimer {
            generation: self.generation,
            delay: self.timeout.as_duration(),
        }
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    #[must_use]
    pub fn center_play_visible(&self) -> bool {
        self.center_play_visible
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Fades the controls in or out.
#[must_use]
pub fn controls_fade(visible: bool) -> Animation {
    Animation::to(
        Target::ControlsOverlay,
        Property::Opacity,
        if visible { 1.0 } else { 0.0 },
    )
    .over_millis(FADE_MS)
}

/// Shows or hides the centre play button.
#[must_use]
pub fn center_play_motion(visible: bool) -> [Animation; 2] {
    let (scale, opacity, easing) = if visible {
        (1.0, 1.0, Easing::BackOut(CENTER_PLAY_OVERSHOOT))
    } else {
        (CENTER_PLAY_HIDDEN_SCALE, 0.0, Easing::Power2In)
    };
    [
        Animation::to(Target::CenterPlay, Property::Scale, scale)
            .over_millis(CENTER_PLAY_MS)
            .ease(easing),
        Animation::to(Target::CenterPlay, Property::Opacity, opacity)
            .over_millis(CENTER_PLAY_MS)
            .ease(easing),
    ]
}

/// Entrance of the centre play button when the player mounts.
#[must_use]
pub fn center_play_intro() -> [Animation; 2] {
    let easing = Easing::BackOut(DEFAULT_OVERSHOOT);
    [
        Animation::to(Target::CenterPlay, Property::Scale, 1.0)
            .from(CENTER_PLAY_INTRO_SCALE)
            .after_millis(CENTER_PLAY_INTRO_DELAY_MS)
            .over_millis(CENTER_PLAY_INTRO_MS)
            .ease(easing),
        Animation::to(Target::CenterPlay, Property::Opacity, 1.0)
            .from(0.0)
            .after_millis(CENTER_PLAY_INTRO_DELAY_MS)
            .over_millis(CENTER_PLAY_INTRO_MS)
            .ease(easing),
    ]
}

/// Centre play button, or nothing once it has faded out.
///
/// `alpha` multiplies the button's own opacity.
pub fn center_play<'a, M: Clone + 'static>(
    animator: &dyn Animator,
    visible: bool,
    alpha: f32,
    on_press: M,
) -> Element<'a, M> {
    let rest = if visible { 1.0 } else { 0.0 };
    let opacity = animator
        .value(Target::CenterPlay, Property::Opacity)
        .unwrap_or(rest)
        .clamp(0.0, 1.0)
        * alpha.clamp(0.0, 1.0);
    if !visible && opacity <= f32::EPSILON {
        return Space::new().into();
    }
    let scale = animator
        .value(Target::CenterPlay, Property::Scale)
        .unwrap_or(rest)
        .max(0.0);

    let size = sizing::ICON_XXL * scale;
    let mut play = button(icons::sized(icons::play(), size).style(styles::overlay::icon(opacity)))
        .padding(size / 4.0)
        .style(styles::button::center_play(opacity));
    if visible {
        play = play.on_press(on_press);
    }
    play.width(Length::Shrink).into()
}

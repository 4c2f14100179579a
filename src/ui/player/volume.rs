// SPDX-License-Identifier: MPL-2.0
//! Volume panel sub-component.
//!
//! Volume and mute are independent: muting keeps the slider level so that
//! unmuting can restore it. The element always receives the effective
//! level, `0` while muted.

use super::ViewContext;
use crate::config::VOLUME_SLIDER_STEP;
use crate::media::Volume;
use crate::motion::{Animation, Easing, Property, Target};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::{icons, styles};
use iced::widget::{button, container, mouse_area, row, slider, tooltip, Text};
use iced::{Alignment, Element, Length};

/// Slider open/close tween duration.
pub const SLIDER_TWEEN_MS: u64 = 300;
/// Icon pulse duration.
pub const PULSE_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    ToggleMute,
    SliderChanged(f32),
    PointerEntered,
    PointerLeft,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Apply this effective level to the element.
    OutputChanged(f32),
    /// The slider opened (`true`) or closed.
    PanelToggled(bool),
}

/// Glyph shown on the mute button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    High,
}

impl VolumeIcon {
    #[must_use]
    pub fn select(volume: Volume, muted: bool) -> Self {
        if muted || volume.is_silent() {
            Self::Muted
        } else if volume.is_high() {
            Self::High
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    volume: Volume,
    /// Level restored by unmute.
    prev_volume: Volume,
    muted: bool,
    open: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Volume::default())
    }
}

impl State {
    #[must_use]
    pub fn new(volume: Volume) -> Self {
        Self {
            volume,
            prev_volume: volume,
            muted: false,
            open: false,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ToggleMute => {
                if self.muted {
                    self.muted = false;
                    self.volume = if self.prev_volume.is_silent() {
                        Volume::default()
                    } else {
                        self.prev_volume
                    };
                } else {
                    if !self.volume.is_silent() {
                        self.prev_volume = self.volume;
                    }
                    self.muted = true;
                }
                tracing::debug!(muted = self.muted, volume = self.volume.value(), "mute toggled");
                Effect::OutputChanged(self.effective())
            }
            Message::SliderChanged(value) => {
                self.volume = Volume::new(value);
                if self.volume.is_silent() {
                    self.muted = true;
                } else {
                    self.prev_volume = self.volume;
                    self.muted = false;
                }
                Effect::OutputChanged(self.effective())
            }
            Message::PointerEntered => self.set_open(true),
            Message::PointerLeft => self.set_open(false),
        }
    }

    fn set_open(&mut self, open: bool) -> Effect {
        if self.open == open {
            return Effect::None;
        }
        self.open = open;
        Effect::PanelToggled(open)
    }

    /// Level the element should play at.
    #[must_use]
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume.value()
        }
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn icon(&self) -> VolumeIcon {
        VolumeIcon::select(self.volume, self.muted)
    }

    /// Motion for an effect of [`State::handle`].
    #[must_use]
    pub fn animations(effect: Effect) -> Vec<Animation> {
        match effect {
            Effect::None => Vec::new(),
            Effect::OutputChanged(_) => vec![
                Animation::to(Target::VolumeIcon, Property::Scale, 1.0)
                    .from(0.8)
                    .over_millis(PULSE_MS),
                Animation::to(Target::VolumeIcon, Property::Opacity, 1.0)
                    .from(0.5)
                    .over_millis(PULSE_MS),
            ],
            Effect::PanelToggled(open) => {
                let (width, opacity) = if open {
                    (sizing::VOLUME_SLIDER_WIDTH, 1.0)
                } else {
                    (0.0, 0.0)
                };
                vec![
                    Animation::to(Target::VolumeSlider, Property::Width, width)
                        .over_millis(SLIDER_TWEEN_MS)
                        .ease(Easing::Power2Out),
                    Animation::to(Target::VolumeSlider, Property::Opacity, opacity)
                        .over_millis(SLIDER_TWEEN_MS)
                        .ease(Easing::Power2Out),
                ]
            }
        }
    }
}

/// Renders the collapsible slider next to the mute button.
///
/// Hovering anywhere over the panel keeps the slider open.
pub fn view<'a>(ctx: ViewContext<'a>, state: &State) -> Element<'a, Message> {
    let (rest_width, rest_opacity) = if state.open {
        (sizing::VOLUME_SLIDER_WIDTH, 1.0)
    } else {
        (0.0, 0.0)
    };
    let width = ctx
        .animator
        .value(Target::VolumeSlider, Property::Width)
        .unwrap_or(rest_width)
        .max(0.0);
    let slider_opacity = ctx
        .animator
        .value(Target::VolumeSlider, Property::Opacity)
        .unwrap_or(rest_opacity);

    let level = slider(0.0..=1.0, state.effective(), Message::SliderChanged)
        .step(VOLUME_SLIDER_STEP)
        .style(styles::slider::volume(slider_opacity * ctx.opacity));
    let slider_box = tooltip(
        container(level).width(Length::Fixed(width)).clip(true),
        Text::new(ctx.i18n.tr("player-volume")),
        tooltip::Position::Top,
    )
    .gap(4);

    let glyph = match state.icon() {
        VolumeIcon::Muted => icons::speaker_off(),
        VolumeIcon::Low => icons::speaker_low(),
        VolumeIcon::High => icons::speaker_high(),
    };
    let pulse_scale = ctx
        .animator
        .value(Target::VolumeIcon, Property::Scale)
        .unwrap_or(1.0);
    let pulse_opacity = ctx
        .animator
        .value(Target::VolumeIcon, Property::Opacity)
        .unwrap_or(1.0);

    let label = if state.muted {
        ctx.i18n.tr("player-unmute")
    } else {
        ctx.i18n.tr("player-mute")
    };

    let mute_button = tooltip(
        button(
            container(
                icons::sized(glyph, sizing::ICON_MD * pulse_scale)
                    .style(styles::overlay::icon(pulse_opacity * ctx.opacity)),
            )
            .center(Length::Fill),
        )
        .on_press(Message::ToggleMute)
        .padding(0)
        .width(Length::Fixed(sizing::ICON_BUTTON))
        .height(Length::Fixed(sizing::ICON_BUTTON))
        .style(styles::button::icon(ctx.opacity)),
        Text::new(label),
        tooltip::Position::Top,
    )
    .gap(4);

    mouse_area(
        row![slider_box, mute_button]
            .spacing(spacing::XS)
            .align_y(Alignment::Center),
    )
    .on_enter(Message::PointerEntered)
    .on_exit(Message::PointerLeft)
    .into()
}

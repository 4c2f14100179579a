// SPDX-License-Identifier: MPL-2.0
//! Transport controls: play/pause button and time readout.
//!
//! The play and pause glyphs are stacked in the same button and morph into
//! each other (shrink and fade out, grow back with overshoot) whenever the
//! playing state flips.

use super::ViewContext;
use crate::motion::{Animation, Animator, Easing, Property, Target};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, container, row, stack, text, tooltip, Text};
use iced::{Alignment, Element, Length};

/// Morph duration.
pub const MORPH_MS: u64 = 300;
/// Overshoot of the morph's back easing.
pub const MORPH_OVERSHOOT: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TogglePlay,
    ToggleFullscreen,
}

/// Playback snapshot for rendering controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub is_fullscreen: bool,
}

/// Motion for a flip of the playing state.
#[must_use]
pub fn morph(is_playing: bool) -> Vec<Animation> {
    let (leaving, entering) = if is_playing {
        (Target::PlayIcon, Target::PauseIcon)
    } else {
        (Target::PauseIcon, Target::PlayIcon)
    };
    let out = |property| {
        Animation::to(leaving, property, 0.0)
            .over_millis(MORPH_MS)
            .ease(Easing::BackIn(MORPH_OVERSHOOT))
    };
    let back = |property| {
        Animation::to(entering, property, 1.0)
            .from(0.0)
            .over_millis(MORPH_MS)
            .ease(Easing::BackOut(MORPH_OVERSHOOT))
    };
    vec![
        out(Property::Scale),
        out(Property::Opacity),
        back(Property::Scale),
        back(Property::Opacity),
    ]
}

/// Scale and opacity of a glyph, falling back to its resting state.
fn glyph(animator: &dyn Animator, target: Target, shown: bool) -> (f32, f32) {
    let rest = if shown { 1.0 } else { 0.0 };
    let scale = animator.value(target, Property::Scale).unwrap_or(rest);
    let opacity = animator.value(target, Property::Opacity).unwrap_or(rest);
    (scale.max(0.0), opacity.clamp(0.0, 1.0))
}

fn morph_icon<'a>(icon: iced::widget::Svg<'static>, scale: f32, opacity: f32) -> Element<'a, Message> {
    container(icons::sized(icon, sizing::ICON_LG * scale).style(styles::overlay::icon(opacity)))
        .center(Length::Fixed(sizing::PLAY_BUTTON))
        .into()
}

/// Renders the play/pause button followed by the time readout.
pub fn view<'a>(ctx: ViewContext<'a>, state: PlaybackState) -> Element<'a, Message> {
    let (play_scale, play_opacity) = glyph(ctx.animator, Target::PlayIcon, !state.is_playing);
    let (pause_scale, pause_opacity) = glyph(ctx.animator, Target::PauseIcon, state.is_playing);

    let morph_area = stack![
        morph_icon(icons::play(), play_scale, play_opacity * ctx.opacity),
        morph_icon(icons::pause(), pause_scale, pause_opacity * ctx.opacity),
    ];

    let label = if state.is_playing {
        ctx.i18n.tr("player-pause")
    } else {
        ctx.i18n.tr("player-play")
    };

    let play_pause_button = tooltip(
        button(morph_area)
            .on_press(Message::TogglePlay)
            .padding(0)
            .width(Length::Fixed(sizing::PLAY_BUTTON))
            .height(Length::Fixed(sizing::PLAY_BUTTON))
            .style(styles::button::icon(ctx.opacity)),
        Text::new(label),
        tooltip::Position::Top,
    )
    .gap(4);

    let time_display = text(format!(
        "{} / {}",
        format_time(state.current_time),
        format_time(state.duration)
    ))
    .size(typography::BODY_SM)
    .style(styles::overlay::label(ctx.opacity));

    row![play_pause_button, time_display]
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .into()
}

/// Renders the fullscreen toggle.
pub fn fullscreen_button<'a>(ctx: &ViewContext<'a>, is_fullscreen: bool) -> Element<'a, Message> {
    let (icon, label) = if is_fullscreen {
        (icons::corners_in(), ctx.i18n.tr("player-exit-fullscreen"))
    } else {
        (icons::corners_out(), ctx.i18n.tr("player-fullscreen"))
    };

    tooltip(
        button(icons::sized(icon, sizing::ICON_MD).style(styles::overlay::icon(ctx.opacity)))
            .on_press(Message::ToggleFullscreen)
            .width(Length::Fixed(sizing::ICON_BUTTON))
            .height(Length::Fixed(sizing::ICON_BUTTON))
            .style(styles::button::icon(ctx.opacity)),
        Text::new(label),
        tooltip::Position::Top,
    )
    .gap(4)
    .into()
}

/// Formats duration in MM:SS or HH:MM:SS format.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() {
        seconds.max(0.0) as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;
    use crate::test_utils::{assert_abs_diff_eq, RecordingAnimator};

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "00:00");
    }

    #[test]
    fn format_time_handles_seconds() {
        assert_eq!(format_time(45.0), "00:45");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(125.0), "02:05");
        assert_eq!(format_time(596.5), "09:56");
    }

    #[test]
    fn format_time_handles_hours() {
        assert_eq!(format_time(3665.0), "01:01:05");
    }

    #[test]
    fn format_time_handles_negative() {
        // Negative time should be clamped to 0
        assert_eq!(format_time(-10.0), "00:00");
        assert_eq!(format_time(f64::NAN), "00:00");
    }

    #[test]
    fn playing_morphs_play_into_pause() {
        let mut animator = RecordingAnimator::default();
        for animation in morph(true) {
            animator.animate(animation);
        }
        assert_eq!(animator.last_to(Target::PlayIcon, Property::Scale), Some(0.0));
        assert_eq!(animator.last_to(Target::PauseIcon, Property::Opacity), Some(1.0));

        let leaving = animator
            .requests
            .iter()
            .find(|a| a.target == Target::PlayIcon)
            .unwrap();
        assert_eq!(leaving.easing, Easing::BackIn(MORPH_OVERSHOOT));
        assert_eq!(leaving.duration.as_millis(), 300);
    }

    #[test]
    fn pausing_brings_play_back_from_zero() {
        let entering = morph(false)
            .into_iter()
            .find(|a| a.target == Target::PlayIcon && a.property == Property::Scale)
            .unwrap();
        assert_eq!(entering.from, Some(0.0));
        assert_abs_diff_eq!(entering.to, 1.0);
        assert_eq!(entering.easing, Easing::BackOut(MORPH_OVERSHOOT));
    }

    #[test]
    fn glyph_rests_without_animation() {
        let animator = RecordingAnimator::default();
        assert_eq!(glyph(&animator, Target::PlayIcon, true), (1.0, 1.0));
        assert_eq!(glyph(&animator, Target::PauseIcon, false), (0.0, 0.0));
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let animator = RecordingAnimator::default();
        let ctx = ViewContext {
            i18n: &i18n,
            animator: &animator,
            opacity: 1.0,
        };
        let _fullscreen = fullscreen_button(&ctx, false);
        let _element = view(ctx, PlaybackState::default());
    }
}

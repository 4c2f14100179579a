// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};

/// Window background behind the player frame.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_950)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Rounded dark frame the video is letterboxed into.
pub fn stage(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::GRAY_900
        })),
        text_color: Some(Color {
            a: alpha,
            ..palette::GRAY_400
        }),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bottom scrim under the controls: black fading to transparent upwards.
///
/// `alpha` is the animated overlay opacity.
pub fn controls_scrim(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let bottom = Color {
            a: opacity::SCRIM * alpha,
            ..palette::BLACK
        };
        let gradient = Linear::new(Radians(0.0))
            .add_stop(0.0, bottom)
            .add_stop(1.0, Color::TRANSPARENT);
        container::Style {
            background: Some(Background::Gradient(Gradient::Linear(gradient))),
            text_color: Some(Color {
                a: alpha,
                ..palette::WHITE
            }),
            ..Default::default()
        }
    }
}

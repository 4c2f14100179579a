// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Borderless icon button drawn over the video, faded by `alpha`.
pub fn icon(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha,
            _ => alpha * opacity::OVERLAY_HOVER,
        };
        button::Style {
            background: None,
            text_color: Color {
                a: text_alpha,
                ..WHITE
            },
            border: Border::default(),
            shadow: iced::Shadow::default(),
            snap: true,
        }
    }
}

/// Round scrim behind the centre play affordance.
pub fn center_play(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let scrim = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::SCRIM,
            _ => opacity::OVERLAY_MEDIUM,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: scrim * alpha,
                ..BLACK
            })),
            text_color: Color { a: alpha, ..WHITE },
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: iced::Shadow::default(),
            snap: true,
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Accent-coloured volume slider, faded by `alpha` while it expands.
pub fn volume(alpha: f32) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |_theme: &Theme, status: slider::Status| {
        let handle = match status {
            slider::Status::Hovered | slider::Status::Dragged => palette::PRIMARY_300,
            slider::Status::Active => palette::PRIMARY_500,
        };
        let fade = |color: Color| Color {
            a: color.a * alpha.clamp(0.0, 1.0),
            ..color
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (
                    Background::Color(fade(palette::PRIMARY_500)),
                    Background::Color(fade(Color {
                        a: opacity::OVERLAY_MEDIUM,
                        ..palette::GRAY_700
                    })),
                ),
                width: 4.0,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 2.0.into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 6.0 },
                background: Background::Color(fade(handle)),
                border_width: 0.0,
                border_color: Color::TRANSPARENT,
            },
        }
    }
}

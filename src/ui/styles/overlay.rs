// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for icons drawn over the video.

use crate::ui::design_tokens::palette::WHITE;
use iced::widget::{svg, text};
use iced::{Color, Theme};

/// White SVG glyph faded by `alpha`.
pub fn icon(alpha: f32) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(Color {
            a: alpha.clamp(0.0, 1.0),
            ..WHITE
        }),
    }
}

/// Overlay text (time readout) faded by `alpha`.
pub fn label(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(Color {
            a: alpha.clamp(0.0, 1.0),
            ..WHITE
        }),
    }
}

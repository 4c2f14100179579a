// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the player glyphs.
//!
//! Glyphs are 24x24 single-path SVGs embedded as string constants; handles
//! are cached using `OnceLock` so every frame reuses the parsed tree.
//! All glyphs are white and get tinted through
//! [`styles::overlay::icon`](super::styles::overlay::icon).
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `speaker_off` not `mute`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function returning a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="white"><path d=""#,
                        $path,
                        r#""/></svg>"#
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Playback
// =============================================================================

define_icon!(play, "M8 5v14l11-7z", "Play icon: triangle pointing right.");
define_icon!(
    pause,
    "M6 19h4V5H6v14zm8-14v14h4V5h-4z",
    "Pause icon: two vertical bars."
);

// =============================================================================
// Volume
// =============================================================================

define_icon!(
    speaker_off,
    "M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.21l2.45 2.45c.03-.2.05-.41.05-.63zm2.5 0c0 .94-.2 1.82-.54 2.64l1.51 1.51C20.63 14.91 21 13.5 21 12c0-4.28-2.99-7.86-7-8.77v2.06c2.89.86 5 3.54 5 6.71zM4.27 3L3 4.27 7.73 9H3v6h4l5 5v-6.73l4.25 4.25c-.67.52-1.42.93-2.25 1.18v2.06c1.38-.31 2.63-.95 3.69-1.81L19.73 21 21 19.73l-9-9L4.27 3zM12 4L9.91 6.09 12 8.18V4z",
    "Speaker crossed out."
);
define_icon!(
    speaker_low,
    "M18.5 12c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM5 9v6h4l5 5V4L9 9H5z",
    "Speaker with one sound wave."
);
define_icon!(
    speaker_high,
    "M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 7-4.49 7-8.77s-2.99-7.86-7-8.77z",
    "Speaker with two sound waves."
);

// =============================================================================
// Window
// =============================================================================

define_icon!(
    corners_out,
    "M7 14H5v5h5v-2H7v-3zm-2-4h2V7h3V5H5v5zm12 7h-3v2h5v-5h-2v3zM14 5v2h3v3h2V5h-5z",
    "Four corners pointing outwards (enter fullscreen)."
);
define_icon!(
    corners_in,
    "M5 16h3v3h2v-5H5v2zm3-8H5v2h5V5H8v3zm6 11h2v-3h3v-2h-5v5zm2-11V5h-2v5h5V8h-3z",
    "Four corners pointing inwards (exit fullscreen)."
);

/// Creates a square icon of the given size.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load() {
        let _ = play();
        let _ = pause();
        let _ = speaker_off();
        let _ = speaker_low();
        let _ = speaker_high();
        let _ = corners_out();
        let _ = corners_in();
    }

    #[test]
    fn sized_helper_works() {
        let icon = sized(play(), 32.0);
        let _ = icon;
    }
}

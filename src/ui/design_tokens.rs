// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, opacities, spacing and sizes shared by the player widgets.

## Organization

- **Palette**: Base colors (dark stage, blue accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_reel::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.01, 0.03, 0.07);
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.61, 0.64, 0.69);

    // Accent (blue scale)
    pub const PRIMARY_300: Color = Color::from_rgb(0.58, 0.77, 0.99);
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.39, 0.92);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Hover preview band on the progress track
    pub const HOVER_PREVIEW: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Bottom of the controls gradient
    pub const SCRIM: f32 = 0.8;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 40.0;
    pub const ICON_XXL: f32 = 64.0;

    /// Play/pause button (icon morph area)
    pub const PLAY_BUTTON: f32 = 48.0;
    pub const ICON_BUTTON: f32 = 40.0;

    // Progress track
    pub const TRACK_HEIGHT: f32 = 8.0;
    pub const TRACK_HANDLE: f32 = 16.0;
    /// Pointer hit area around the track
    pub const TRACK_HIT_HEIGHT: f32 = 20.0;

    /// Fully expanded volume slider width
    pub const VOLUME_SLIDER_WIDTH: f32 = 100.0;

    /// Max width of the player frame
    pub const PLAYER_MAX_WIDTH: f32 = 896.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Window heading
    pub const TITLE_LG: f32 = 30.0;

    /// Time readout
    pub const BODY_SM: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const LG: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::HOVER_PREVIEW > 0.0 && opacity::HOVER_PREVIEW < 1.0);

    assert!(sizing::TRACK_HIT_HEIGHT >= sizing::TRACK_HANDLE);
    assert!(sizing::TRACK_HANDLE > sizing::TRACK_HEIGHT);
    assert!(sizing::PLAY_BUTTON > sizing::ICON_LG);
};

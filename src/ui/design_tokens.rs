// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (dark gallery theme)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use reel_play::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create an overlay color
let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
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
    /// Card surface (#111)
    pub const GRAY_950: Color = Color::from_rgb(0.067, 0.067, 0.067);
    /// Thumbnail placeholder (#222)
    pub const GRAY_900: Color = Color::from_rgb(0.133, 0.133, 0.133);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Secondary text (#999)
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);

    /// Activity indicator blue (#007AFF)
    pub const ACCENT_500: Color = Color::from_rgb(0.0, 0.478, 1.0);
    pub const ACCENT_400: Color = Color::from_rgb(0.25, 0.6, 1.0);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.3;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    /// Play indicator disc
    pub const PLAY_DISC: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 32.0;

    /// Horizontal gutter of the two-column grid
    pub const GRID_GUTTER: f32 = 10.0;
    /// Inner padding of a card's text block
    pub const CARD_PADDING: f32 = 12.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Diameter of the play indicator disc on cards
    pub const PLAY_DISC: f32 = 40.0;

    /// Spinner diameter
    pub const SPINNER: f32 = 36.0;

    /// Thumbnail aspect ratio (height / width)
    pub const THUMBNAIL_RATIO: f32 = 9.0 / 16.0;

    /// Width requested from the thumbnail extractor, in pixels
    pub const THUMBNAIL_EXTRACT_WIDTH: u32 = 480;

    // Video controls
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TIMELINE_TRACK: f32 = 4.0;
    pub const SCRUBBER_THUMB: f32 = 12.0;

    /// Smallest card width the layout will produce
    pub const MIN_CARD_WIDTH: f32 = 80.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: Header and player title
    //! - Body: Card names, labels
    //! - Caption: Badges, dates

    /// Gallery header title
    pub const TITLE_LG: f32 = 28.0;

    /// Player title
    pub const TITLE_SM: f32 = 18.0;

    /// Header subtitle, loading label, back control
    pub const BODY_LG: f32 = 16.0;

    /// Card names
    pub const BODY: f32 = 14.0;

    /// Badges, dates
    pub const CAPTION: f32 = 12.0;

    /// Line height of card names, in pixels
    pub const CARD_TITLE_LINE: f32 = 18.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
    pub const PILL: f32 = 25.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
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
    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_STRONG < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::THUMBNAIL_RATIO > 0.0 && sizing::THUMBNAIL_RATIO < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_title_line_fits_body_text() {
        assert!(typography::CARD_TITLE_LINE > typography::BODY);
    }
}

// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by the showcase screens and the default renderers.

## Organization

- **Palette**: Base colors (violet/pink brand on a deep indigo night background)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_image_loader::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let badge_bg = Color {
    a: opacity::BADGE,
    ..palette::VIOLET_500
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand
    pub const VIOLET_500: Color = Color::from_rgb8(0x8b, 0x5c, 0xf6);
    pub const VIOLET_400: Color = Color::from_rgb8(0xa7, 0x8b, 0xfa);
    pub const VIOLET_700: Color = Color::from_rgb8(0x6d, 0x28, 0xd9);
    pub const PINK_500: Color = Color::from_rgb8(0xec, 0x48, 0x99);
    pub const CYAN_500: Color = Color::from_rgb8(0x06, 0xb6, 0xd4);
    pub const AMBER_500: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);
    pub const EMERALD_500: Color = Color::from_rgb8(0x10, 0xb9, 0x81);
    pub const BLUE_500: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);

    // Night backgrounds
    pub const NIGHT_900: Color = Color::from_rgb8(0x0f, 0x17, 0x2a);
    pub const NIGHT_800: Color = Color::from_rgb8(0x1e, 0x1b, 0x4b);
    pub const ERROR_SURFACE: Color = Color::from_rgb8(0x1a, 0x1a, 0x2e);

    // Light backgrounds
    pub const MIST_50: Color = Color::from_rgb8(0xf5, 0xf3, 0xff);
    pub const MIST_100: Color = Color::from_rgb8(0xed, 0xe9, 0xfe);

    // Semantic colors
    pub const LIKE_500: Color = Color::from_rgb8(0xef, 0x44, 0x44);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const CARD: f32 = 0.05;
    pub const FAINT: f32 = 0.1;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const MUTED: f32 = 0.5;
    pub const SECONDARY: f32 = 0.7;
    pub const SCRIM: f32 = 0.8;
    pub const BADGE: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_XL: f32 = 48.0;
    pub const ICON_XXL: f32 = 64.0;

    /// Height of one showcase card.
    pub const CARD_HEIGHT: f32 = 280.0;

    /// Maximum width of the card column.
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;

    /// Width of modal dialogs.
    pub const DIALOG_WIDTH: f32 = 440.0;

    /// Edge of the fullscreen spinner.
    pub const SPINNER: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name in the top bar.
    pub const TITLE_LG: f32 = 26.0;

    /// Card and dialog titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers.
    pub const TITLE_SM: f32 = 17.0;

    pub const BODY: f32 = 14.0;

    /// Badges, hints.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
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

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
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

    assert!(opacity::CARD < opacity::FAINT);
    assert!(opacity::MUTED < opacity::SECONDARY);

    assert!(sizing::ICON_XXL > sizing::ICON_XL);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_violet_matches_hex() {
        let violet = palette::VIOLET_500;
        assert!((violet.r - 0x8b as f32 / 255.0).abs() < 1e-6);
        assert!(violet.b > violet.r && violet.b > violet.g);
    }
}

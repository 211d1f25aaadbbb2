// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces
    pub background_top: Color,
    pub background_bottom: Color,
    pub card: Color,
    pub dialog: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand
    pub brand_primary: Color,
    pub brand_secondary: Color,

    pub like: Color,
    pub error: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background_top: palette::MIST_50,
            background_bottom: palette::MIST_100,
            card: Color {
                a: opacity::FAINT,
                ..palette::VIOLET_700
            },
            dialog: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_muted: palette::GRAY_400,

            brand_primary: palette::VIOLET_700,
            brand_secondary: palette::PINK_500,

            like: palette::LIKE_500,
            error: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background_top: palette::NIGHT_900,
            background_bottom: palette::NIGHT_800,
            card: Color {
                a: opacity::CARD,
                ..palette::WHITE
            },
            dialog: palette::NIGHT_800,

            text_primary: palette::WHITE,
            text_secondary: Color {
                a: opacity::SECONDARY,
                ..palette::WHITE
            },
            text_muted: Color {
                a: opacity::MUTED,
                ..palette::WHITE
            },

            brand_primary: palette::VIOLET_500,
            brand_secondary: palette::PINK_500,

            like: palette::LIKE_500,
            error: palette::ERROR_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Resolved theme: mode plus the colors it implies.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = if mode.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode }
    }

    /// Builds the iced theme the widgets are styled with.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let base = if self.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        let mut colors = base.palette();
        colors.background = self.colors.background_top;
        colors.text = self.colors.text_primary;
        colors.primary = self.colors.brand_primary;
        colors.danger = self.colors.error;

        Theme::custom(String::from("Showcase"), colors)
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_background() {
        let scheme = ColorScheme::light();
        assert!(scheme.background_top.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_background() {
        let scheme = ColorScheme::dark();
        assert!(scheme.background_top.r < 0.2);
    }

    #[test]
    fn both_themes_use_violet_brand() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.g);
        assert!(dark.brand_primary.b > dark.brand_primary.g);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the host; only check it doesn't panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn iced_theme_uses_brand_primary() {
        let theme = AppTheme::new(ThemeMode::Dark);
        assert_eq!(theme.iced_theme().palette().primary, palette::VIOLET_500);
    }
}

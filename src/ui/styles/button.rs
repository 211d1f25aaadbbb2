// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::scheme;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (dialog confirmation, retry).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::VIOLET_400,
        button::Status::Pressed => palette::VIOLET_700,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active => palette::VIOLET_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Round, mostly transparent icon button (top bar, close).
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::MUTED,
        _ => opacity::FAINT,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..colors.brand_primary
        })),
        text_color: colors.text_primary,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Icon button drawn over imagery (fullscreen viewer controls).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::BADGE,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Borderless like toggle; the heart turns red when liked.
pub fn like(liked: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if liked {
            palette::LIKE_500
        } else {
            Color {
                a: opacity::SECONDARY,
                ..WHITE
            }
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::FAINT,
                ..WHITE
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Whole-card hit area; draws nothing itself.
pub fn card_surface(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::VIOLET_500)));
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn like_button_turns_red_when_liked() {
        let liked = like(true)(&Theme::Dark, button::Status::Active);
        let not_liked = like(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(liked.text_color, palette::LIKE_500);
        assert_ne!(not_liked.text_color, palette::LIKE_500);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::scheme;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Gradient, Radians, Theme};
use std::f32::consts::PI;

/// Vertical night gradient behind every screen.
pub fn app_background(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    let gradient = Linear::new(Radians(PI))
        .add_stop(0.0, colors.background_top)
        .add_stop(1.0, colors.background_bottom);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Translucent showcase card.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.card)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Bottom fade over a card image so the title stays readable.
pub fn card_scrim(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Radians(PI))
        .add_stop(0.45, Color::TRANSPARENT)
        .add_stop(
            1.0,
            Color {
                a: opacity::SCRIM,
                ..BLACK
            },
        );

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Feature badge pinned to the top-left corner of a card.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BADGE,
            ..palette::VIOLET_500
        })),
        text_color: Some(WHITE),
        border: Border {
            radius: iced::border::Radius {
                top_left: radius::LG,
                top_right: 0.0,
                bottom_right: radius::XL,
                bottom_left: 0.0,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded search field wrapper.
pub fn search_field(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::FAINT,
            ..colors.text_primary
        })),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.brand_primary
            },
        },
        ..Default::default()
    }
}

/// Full-window dimming behind dialogs.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SCRIM,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Dialog panel.
pub fn dialog(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.dialog)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::XL.into(),
            width: 1.0,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.brand_primary
            },
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Row of the features dialog, tinted with the feature's accent color.
pub fn feature_row(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::FAINT,
            ..accent
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Rounded square holding a feature glyph.
pub fn feature_icon(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        text_color: Some(accent),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Black stage of the fullscreen viewer.
pub fn viewer_stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Translucent header and footer bars over the fullscreen image.
pub fn viewer_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::MUTED,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill hint over the fullscreen image.
pub fn hint_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SECONDARY,
            ..BLACK
        })),
        text_color: Some(Color {
            a: opacity::SCRIM,
            ..WHITE
        }),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Flat fill with a color, used by placeholder and error renderers.
pub fn fill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uses_violet_background() {
        let style = badge(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.a, opacity::BADGE);
                assert_eq!(color.r, palette::VIOLET_500.r);
            }
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn app_background_is_gradient() {
        let style = app_background(&Theme::Dark);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use super::scheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Borderless input meant to sit inside [`super::container::search_field`].
pub fn search(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = scheme(theme);
    let border_color = match status {
        text_input::Status::Focused { .. } => colors.brand_primary,
        _ => Color::TRANSPARENT,
    };

    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: border_color,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: colors.text_muted,
        placeholder: colors.text_muted,
        value: colors.text_primary,
        selection: Color {
            a: 0.4,
            ..colors.brand_primary
        },
    }
}

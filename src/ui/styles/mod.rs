// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod text_input;

use crate::ui::theming::ColorScheme;
use iced::Theme;

/// Picks the showcase color scheme matching the active iced theme.
pub(crate) fn scheme(theme: &Theme) -> ColorScheme {
    let bg = theme.palette().background;
    if (bg.r + bg.g + bg.b) / 3.0 < 0.5 {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}

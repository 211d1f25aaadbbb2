// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced_image_loader::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_image_loader::ui::styles::{button, container, text_input};
    use iced_image_loader::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_styles_are_callable() {
        let theme = AppTheme::new(ThemeMode::Dark).iced_theme();

        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::icon(&theme, iced::widget::button::Status::Hovered);
        let _ = button::overlay(palette::WHITE, 0.5, 0.8)(&theme, iced::widget::button::Status::Active);
        let _ = button::like(true)(&theme, iced::widget::button::Status::Pressed);
        let _ = container::app_background(&theme);
        let _ = container::dialog(&theme);
        let _ = container::feature_row(palette::CYAN_500)(&theme);
        let _ = text_input::search(&theme, iced::widget::text_input::Status::Active);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::VIOLET_500;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::SCRIM;
        let _ = sizing::CARD_HEIGHT;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Backgrounds and text are visually opposite between light and dark
        assert!(light.colors.background_top.r > dark.colors.background_top.r);
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }

    #[test]
    fn custom_theme_keeps_brand_color() {
        let theme = AppTheme::new(ThemeMode::Dark).iced_theme();
        assert_eq!(theme.palette().primary, palette::VIOLET_500);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Info and features dialogs.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Dialog shown above the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Info,
    Features,
}

/// One row of the features dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub glyph: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
    pub accent: Color,
}

/// Features of the image component, in display order.
pub const FEATURES: [Feature; 7] = [
    Feature {
        glyph: "◆",
        title_key: "feature-unified-api-title",
        description_key: "feature-unified-api-description",
        accent: palette::VIOLET_500,
    },
    Feature {
        glyph: "◐",
        title_key: "feature-transformations-title",
        description_key: "feature-transformations-description",
        accent: palette::PINK_500,
    },
    Feature {
        glyph: "⚡",
        title_key: "feature-loading-states-title",
        description_key: "feature-loading-states-description",
        accent: palette::CYAN_500,
    },
    Feature {
        glyph: "▣",
        title_key: "feature-sources-title",
        description_key: "feature-sources-description",
        accent: palette::EMERALD_500,
    },
    Feature {
        glyph: "✋",
        title_key: "feature-gestures-title",
        description_key: "feature-gestures-description",
        accent: palette::AMBER_500,
    },
    Feature {
        glyph: "✎",
        title_key: "feature-customizable-title",
        description_key: "feature-customizable-description",
        accent: palette::LIKE_500,
    },
    Feature {
        glyph: "➚",
        title_key: "feature-engine-title",
        description_key: "feature-engine-description",
        accent: palette::BLUE_500,
    },
];

/// Renders `modal` over a dimmed backdrop; clicking the backdrop dismisses.
pub fn view<'a>(modal: Modal, i18n: &I18n) -> Element<'a, Message> {
    let panel = match modal {
        Modal::Info => view_info(i18n),
        Modal::Features => view_features(i18n),
    };

    let backdrop = opaque(
        mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(container_styles::modal_backdrop),
        )
        .on_press(Message::Dismiss),
    );

    let centered = Container::new(opaque(
        Container::new(panel)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(container_styles::dialog),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    Stack::new().push(backdrop).push(centered).into()
}

fn header<'a>(title: String, subtitle: Option<String>) -> Element<'a, Message> {
    let mut titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::TITLE_MD));
    if let Some(subtitle) = subtitle {
        titles = titles.push(
            Text::new(subtitle)
                .size(typography::CAPTION)
                .color(palette::VIOLET_400),
        );
    }

    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("✕").size(typography::BODY))
                .padding(spacing::XS)
                .style(button_styles::icon)
                .on_press(Message::Dismiss),
        )
        .into()
}

fn view_info<'a>(i18n: &I18n) -> Element<'a, Message> {
    let secondary = Color {
        a: opacity::SECONDARY,
        ..palette::WHITE
    };

    Column::new()
        .spacing(spacing::MD)
        .push(header(i18n.tr("info-dialog-title"), None))
        .push(
            Text::new(i18n.tr("app-title"))
                .size(typography::TITLE_MD)
                .color(palette::VIOLET_400),
        )
        .push(
            Text::new(i18n.tr("info-dialog-body"))
                .size(typography::BODY)
                .color(secondary),
        )
        .push(
            button(
                Container::new(Text::new(i18n.tr("dialog-got-it")).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(button_styles::primary)
            .on_press(Message::Dismiss),
        )
        .into()
}

fn view_features<'a>(i18n: &I18n) -> Element<'a, Message> {
    let rows = FEATURES.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, feature| column.push(view_feature(feature, i18n)),
    );

    Column::new()
        .spacing(spacing::MD)
        .push(header(
            i18n.tr("features-dialog-title"),
            Some(i18n.tr("features-dialog-subtitle")),
        ))
        .push(Scrollable::new(rows).height(Length::Shrink))
        .into()
}

fn view_feature<'a>(feature: &Feature, i18n: &I18n) -> Element<'a, Message> {
    let icon = Container::new(Text::new(feature.glyph).size(typography::TITLE_SM))
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::feature_icon(feature.accent));

    let text = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr(feature.title_key)).size(typography::BODY))
        .push(
            Text::new(i18n.tr(feature.description_key))
                .size(typography::CAPTION)
                .color(Color {
                    a: opacity::SECONDARY,
                    ..palette::WHITE
                }),
        );

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(text),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(container_styles::feature_row(feature.accent))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seven_features_with_distinct_keys() {
        let titles: HashSet<&str> = FEATURES.iter().map(|f| f.title_key).collect();
        let descriptions: HashSet<&str> = FEATURES.iter().map(|f| f.description_key).collect();
        assert_eq!(titles.len(), 7);
        assert_eq!(descriptions.len(), 7);
    }

    #[test]
    fn every_feature_key_is_translated() {
        let i18n = I18n::default();
        for feature in FEATURES {
            assert!(!i18n.tr(feature.title_key).starts_with("MISSING"));
            assert!(!i18n.tr(feature.description_key).starts_with("MISSING"));
        }
    }

    #[test]
    fn dialogs_render() {
        let i18n = I18n::default();
        let _ = view(Modal::Info, &i18n);
        let _ = view(Modal::Features, &i18n);
    }
}

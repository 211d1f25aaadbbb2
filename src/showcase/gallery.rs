// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: top bar with search, card list and empty state.

use super::dialogs::Modal;
use super::viewer::like_glyph;
use super::{Message, ShowcaseItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles::{
    button as button_styles, container as container_styles, text_input as text_input_styles,
};
use iced::widget::{button, text_input, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub query: &'a str,
    /// Visible items with their already rendered image slot.
    pub cards: Vec<(&'a ShowcaseItem, Element<'a, Message>)>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let top_bar = view_top_bar(ctx.i18n, ctx.query);

    let body: Element<'_, Message> = if ctx.cards.is_empty() {
        view_empty_state(ctx.i18n)
    } else {
        let list = ctx
            .cards
            .into_iter()
            .fold(
                Column::new().spacing(spacing::MD).padding(spacing::MD),
                |column, (item, image)| column.push(view_card(item, image)),
            )
            .max_width(sizing::CONTENT_MAX_WIDTH);

        Scrollable::new(
            Container::new(list)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    };

    Container::new(Column::new().push(top_bar).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::app_background)
        .into()
}

fn view_top_bar<'a>(i18n: &I18n, query: &str) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("app-title")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr("app-subtitle"))
                .size(typography::CAPTION)
                .color(palette::VIOLET_400),
        );

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("✨").size(typography::TITLE_SM))
                .padding(spacing::XS)
                .style(button_styles::icon)
                .on_press(Message::OpenModal(Modal::Features)),
        )
        .push(
            button(Text::new("ⓘ").size(typography::TITLE_SM))
                .padding(spacing::XS)
                .style(button_styles::icon)
                .on_press(Message::OpenModal(Modal::Info)),
        );

    let search = Container::new(
        text_input(&i18n.tr("search-placeholder"), query)
            .on_input(Message::SearchChanged)
            .padding(spacing::SM)
            .size(typography::BODY)
            .style(text_input_styles::search),
    )
    .style(container_styles::search_field);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(search)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .style(container_styles::viewer_bar)
    .into()
}

fn view_card<'a>(item: &'a ShowcaseItem, image: Element<'a, Message>) -> Element<'a, Message> {
    let badge = Container::new(
        Text::new(item.feature_label.as_str()).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(container_styles::badge);

    let like = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(like_glyph(item.liked)).size(typography::TITLE_SM))
            .push(
                Text::new(item.like_count.to_string())
                    .size(typography::BODY)
                    .color(Color {
                        a: opacity::SCRIM,
                        ..palette::WHITE
                    }),
            ),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(button_styles::like(item.liked))
    .on_press(Message::ToggleLike(item.id));

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(item.title.as_str())
                .size(typography::TITLE_MD)
                .color(palette::WHITE)
                .width(Length::Fill),
        )
        .push(like);

    let overlay = Column::new()
        .push(badge)
        .push(Space::new().height(Length::Fill))
        .push(Container::new(footer).padding(spacing::MD));

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(image)
        .push(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(container_styles::card_scrim),
        )
        .push(overlay);

    button(
        Container::new(layers)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_HEIGHT))
            .style(container_styles::card),
    )
    .padding(0)
    .width(Length::Fill)
    .style(button_styles::card_surface)
    .on_press(Message::OpenViewer(item.id))
    .into()
}

fn view_empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new("🔍")
                .size(sizing::ICON_XXL)
                .color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                }),
        )
        .push(Text::new(i18n.tr("empty-title")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr("empty-hint"))
                .size(typography::BODY)
                .color(Color {
                    a: opacity::MUTED,
                    ..palette::WHITE
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

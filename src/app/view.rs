// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::showcase::Showcase;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub showcase: &'a Showcase,
    pub phase: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Container::new(ctx.showcase.view(ctx.i18n, ctx.phase).map(Message::Showcase))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

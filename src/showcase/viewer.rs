// SPDX-License-Identifier: MPL-2.0
//! Fullscreen viewer for one showcase item.
//!
//! The image is shown unclipped with a contain fit on a dark stage, and can
//! be pinch-zoomed, wheel-zoomed, dragged and double-tapped. Zoom state lives
//! here, so closing the viewer (dropping its state) resets it.

use super::{Message, ShowcaseItem};
use crate::i18n::fluent::I18n;
use crate::loader::ImageEngine;
use crate::loader::LoadError;
use crate::request::{ContentFit, ImageRequest, RenderContext, Renderer};
use crate::ui::async_image::{self, Effect};
use crate::ui::components::error_display::ErrorDisplay;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::state::{GestureConfig, GestureEvent, ZoomState};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, opaque, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length};
use std::sync::Arc;

/// Viewer state: which item is open, its image slot and the zoom.
#[derive(Debug, Clone)]
pub struct State {
    item_id: u32,
    image: async_image::State,
    zoom: ZoomState,
}

impl State {
    #[must_use]
    pub fn new(item_id: u32) -> Self {
        Self {
            item_id,
            image: async_image::State::new(),
            zoom: ZoomState::new(),
        }
    }

    #[must_use]
    pub fn item_id(&self) -> u32 {
        self.item_id
    }

    #[must_use]
    pub fn image(&self) -> &async_image::State {
        &self.image
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn observe(&mut self, request: &ImageRequest<Message>, engine: &dyn ImageEngine) -> Effect {
        self.image.observe(request, engine)
    }

    pub fn handle_image(&mut self, message: async_image::Message) -> Effect {
        self.image.handle(message)
    }

    pub fn handle_gesture(&mut self, event: GestureEvent) {
        self.zoom.handle(event);
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a, '_>) -> Element<'a, Message> {
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Text::new(ctx.item.title.as_str())
                            .size(typography::TITLE_MD)
                            .color(palette::WHITE),
                    )
                    .push(
                        Text::new(ctx.item.feature_label.as_str())
                            .size(typography::CAPTION)
                            .color(palette::VIOLET_400),
                    ),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new("✕").size(typography::TITLE_SM))
                    .padding(spacing::XS)
                    .style(button_styles::overlay(
                        palette::WHITE,
                        opacity::FAINT,
                        opacity::OVERLAY_SUBTLE,
                    ))
                    .on_press(Message::Dismiss),
            );

        let image = self.image.view_zoomable(
            ctx.request,
            ContentFit::Contain,
            ctx.phase,
            &self.zoom,
            ctx.gestures,
            Message::Gesture,
        );

        let mut footer = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(
                    Text::new(ctx.i18n.tr("viewer-gesture-hint"))
                        .size(typography::CAPTION)
                        .color(Color {
                            a: opacity::SECONDARY,
                            ..palette::WHITE
                        }),
                )
                .padding([spacing::XXS, spacing::SM])
                .style(container_styles::hint_pill),
            );

        if !self.zoom.is_identity() {
            footer = footer.push(
                Text::new(format!("{:.1}×", self.zoom.scale()))
                    .size(typography::CAPTION)
                    .color(palette::VIOLET_400),
            );
        }

        let footer = footer.push(Space::new().width(Length::Fill)).push(
            button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(alignment::Vertical::Center)
                    .push(Text::new(like_glyph(ctx.item.liked)).size(typography::TITLE_SM))
                    .push(Text::new(ctx.item.like_count.to_string()).size(typography::BODY)),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(button_styles::like(ctx.item.liked))
            .on_press(Message::ToggleLike(ctx.item.id)),
        );

        let content = Column::new()
            .push(
                Container::new(header)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(container_styles::viewer_bar),
            )
            .push(
                Container::new(image)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(
                Container::new(footer)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(container_styles::viewer_bar),
            );

        opaque(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(container_styles::viewer_stage),
        )
    }
}

/// Contextual data needed to render the viewer.
///
/// The request is only read while building the element, so it may be a
/// temporary owned by the caller.
pub struct ViewContext<'a, 'r> {
    pub i18n: &'a I18n,
    pub item: &'a ShowcaseItem,
    pub request: &'r ImageRequest<Message>,
    pub phase: f32,
    pub gestures: GestureConfig,
}

/// Error panel naming the image, with a localized cause and retry button.
pub fn error_renderer(i18n: &I18n, title: &str) -> Renderer<Message> {
    let headline = i18n.tr_with_args("image-error-label", &[("label", title)]);
    let no_source = i18n.tr(LoadError::NoSource.i18n_key());
    let fetch_failed = i18n.tr(LoadError::FetchFailed(String::new()).i18n_key());
    let retry_label = i18n.tr("image-retry");

    Arc::new(move |ctx: RenderContext<'_, Message>| -> Element<'static, Message> {
        let mut display = ErrorDisplay::new()
            .title(headline.clone())
            .icon_size(sizing::ICON_XXL);
        match ctx.cause {
            Some(LoadError::NoSource) => display = display.caption(no_source.clone()),
            Some(LoadError::FetchFailed(_)) => display = display.caption(fetch_failed.clone()),
            None => {}
        }
        if let Some(retry) = ctx.retry {
            display = display.action(retry_label.clone(), retry);
        }
        display.view()
    })
}

/// Filled or outlined heart.
pub(crate) fn like_glyph(liked: bool) -> &'static str {
    if liked {
        "♥"
    } else {
        "♡"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Vector;

    #[test]
    fn new_viewer_is_unzoomed() {
        let state = State::new(7);
        assert_eq!(state.item_id(), 7);
        assert!(state.zoom().is_identity());
    }

    #[test]
    fn gestures_drive_zoom() {
        let mut state = State::new(7);
        state.handle_gesture(GestureEvent::DoubleTap);
        assert!((state.zoom().scale() - 3.0).abs() < f32::EPSILON);

        state.handle_gesture(GestureEvent::Transform {
            pan: Vector::new(10.0, 0.0),
            zoom: 1.0,
        });
        assert_eq!(state.zoom().offset(), Vector::new(10.0, 0.0));

        state.handle_gesture(GestureEvent::DoubleTap);
        assert!(state.zoom().is_identity());
    }

    #[test]
    fn error_renderer_builds_for_both_causes() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let renderer = error_renderer(&i18n, "Forest Path");
        for cause in [LoadError::NoSource, LoadError::FetchFailed("404".into())] {
            let _ = renderer.render(RenderContext {
                phase: 0.0,
                label: Some("Forest Path"),
                cause: Some(&cause),
                retry: Some(Message::Dismiss),
            });
        }
    }

    #[test]
    fn like_glyph_reflects_state() {
        assert_ne!(like_glyph(true), like_glyph(false));
    }
}

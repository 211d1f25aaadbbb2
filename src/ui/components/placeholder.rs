// SPDX-License-Identifier: MPL-2.0
//! Stock renderers for the non-image branches of the async image component.
//!
//! The stock renderers are plain functions of the render context; they
//! coerce to a [`Renderer`] through the blanket `Fn` impl.

use crate::loader::LoadError;
use crate::request::{RenderContext, Renderer};
use crate::ui::async_image::describe_error;
use crate::ui::components::error_display::ErrorDisplay;
use crate::ui::design_tokens::{opacity, palette, sizing};
use crate::ui::widgets::{AnimatedSpinner, Pulse, Shimmer};
use iced::widget::Container;
use iced::{alignment, Color, Element, Length};
use std::sync::Arc;

/// Label of the retry button in the stock error panel.
const RETRY_GLYPH: &str = "↻";

/// Sweeping gray shimmer with an image glyph.
pub fn default_shimmer<Message: 'static>(ctx: RenderContext<'_, Message>) -> Element<'static, Message> {
    Shimmer::new(ctx.phase).into_element()
}

/// Broken-image glyph on a faint gray panel, with a retry button when the
/// request has one.
pub fn default_error<Message: Clone + 'static>(
    ctx: RenderContext<'_, Message>,
) -> Element<'static, Message> {
    let mut display = ErrorDisplay::new().colors(
        Color {
            a: opacity::FAINT,
            ..palette::GRAY_200
        },
        Color {
            a: opacity::SECONDARY,
            ..palette::GRAY_700
        },
    );
    if let Some(cause) = ctx.cause {
        display = display.caption(describe_error(ctx.label, cause));
    }
    if let Some(retry) = ctx.retry {
        display = display.action(RETRY_GLYPH, retry);
    }
    display.view()
}

/// Branded breathing glow with a rotating search glyph.
pub fn pulse<Message: 'static>(ctx: RenderContext<'_, Message>) -> Element<'static, Message> {
    Pulse::new(ctx.phase).into_element()
}

/// Centered violet/pink spinner on a transparent background.
pub fn spinner<Message: 'static>(ctx: RenderContext<'_, Message>) -> Element<'static, Message> {
    Container::new(
        AnimatedSpinner::new(palette::VIOLET_500, palette::PINK_500, ctx.phase)
            .size(sizing::SPINNER)
            .into_element(),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// Error panel with a localized headline, the accessibility text as caption,
/// the cause as told by `describe_cause` and a labeled retry button.
pub fn titled_error<Message: Clone + 'static>(
    headline: impl Into<String>,
    retry_label: impl Into<String>,
    describe_cause: impl Fn(&LoadError) -> String + Send + Sync + 'static,
) -> Renderer<Message> {
    let headline = headline.into();
    let retry_label = retry_label.into();

    Arc::new(move |ctx: RenderContext<'_, Message>| -> Element<'static, Message> {
        let mut display = ErrorDisplay::new().title(headline.clone());
        if let Some(label) = ctx.label {
            display = display.caption(label.to_string());
        }
        if let Some(cause) = ctx.cause {
            display = display.detail(describe_cause(cause));
        }
        if let Some(retry) = ctx.retry {
            display = display.action(retry_label.clone(), retry);
        }
        display.view()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
    }

    fn ctx<'a>(
        label: Option<&'a str>,
        cause: Option<&'a LoadError>,
    ) -> RenderContext<'a, TestMessage> {
        RenderContext {
            phase: 0.25,
            label,
            cause,
            retry: Some(TestMessage::Retry),
        }
    }

    #[test]
    fn stock_renderers_build_elements() {
        let cause = LoadError::FetchFailed("network".into());
        let _ = default_shimmer(ctx(None, None));
        let _ = default_error(ctx(Some("Ocean Sunset"), Some(&cause)));
        let _ = pulse(ctx(None, None));
        let _ = spinner(ctx(None, None));
    }

    #[test]
    fn titled_error_is_a_shared_renderer() {
        let renderer: Renderer<TestMessage> =
            titled_error("Failed to load", "Retry", |cause| cause.to_string());
        let cause = LoadError::NoSource;
        let _ = renderer.render(ctx(Some("Forest Path"), Some(&cause)));
        let clone = Arc::clone(&renderer);
        assert_eq!(Arc::strong_count(&renderer), 2);
        drop(clone);
    }

    #[test]
    fn titled_error_describes_the_cause() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let renderer: Renderer<TestMessage> = titled_error("Failed to load", "Retry", move |cause| {
            if let Ok(mut log) = log.lock() {
                log.push(cause.clone());
            }
            cause.i18n_key().to_string()
        });

        let cause = LoadError::FetchFailed("network".into());
        let _ = renderer.render(ctx(Some("Ocean Sunset"), Some(&cause)));
        let _ = renderer.render(ctx(Some("Ocean Sunset"), None));

        assert_eq!(*seen.lock().expect("lock"), vec![cause]);
    }
}

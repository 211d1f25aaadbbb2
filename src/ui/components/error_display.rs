// SPDX-License-Identifier: MPL-2.0
//! Reusable "image failed" panel.
//!
//! Shows a broken-image glyph, an optional headline and caption, and an
//! optional retry button. Fills its container so it can stand in for the
//! image it replaces.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::new()
//!     .title("Failed to load")
//!     .caption("Forest Path")
//!     .action("Retry", Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::shimmer::draw_image_glyph;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// Configuration for the ErrorDisplay component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    title: Option<String>,
    caption: Option<String>,
    detail: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
    background: Color,
    tint: Color,
    icon_size: f32,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            title: None,
            caption: None,
            detail: None,
            action_label: None,
            action_message: None,
            background: palette::ERROR_SURFACE,
            tint: Color {
                a: opacity::MUTED,
                ..palette::WHITE
            },
            icon_size: sizing::ICON_XL,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the headline (e.g. "Failed to load").
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the secondary line, typically the image's accessibility text.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets a third, smaller line below the caption, typically the cause.
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Sets the panel fill and the glyph/text tint.
    pub fn colors(mut self, background: Color, tint: Color) -> Self {
        self.background = background;
        self.tint = tint;
        self
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }

    /// Renders the error display component.
    pub fn view(self) -> Element<'static, Message> {
        let tint = self.tint;
        let icon = Canvas::new(BrokenImageIcon {
            color: tint,
            background: self.background,
        })
        .width(Length::Fixed(self.icon_size))
        .height(Length::Fixed(self.icon_size));

        let mut content = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(icon);

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::BODY).style(
                move |_theme: &Theme| text::Style {
                    color: Some(Color {
                        a: (tint.a * 1.4).min(1.0),
                        ..tint
                    }),
                },
            ));
        }

        if let Some(caption) = self.caption {
            content = content.push(Text::new(caption).size(typography::CAPTION).style(
                move |_theme: &Theme| text::Style { color: Some(tint) },
            ));
        }

        if let Some(detail) = self.detail {
            content = content.push(Text::new(detail).size(typography::CAPTION).style(
                move |_theme: &Theme| text::Style {
                    color: Some(Color {
                        a: tint.a * 0.8,
                        ..tint
                    }),
                },
            ));
        }

        if let (Some(label), Some(message)) = (self.action_label, self.action_message) {
            content = content.push(
                button(Text::new(label).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(message)
                    .style(button_styles::primary),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::MD)
            .style(container_styles::fill(self.background))
            .into()
    }
}

/// Framed landscape crossed by a crack.
struct BrokenImageIcon {
    color: Color,
    background: Color,
}

impl<Message> canvas::Program<Message> for BrokenImageIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = frame.width().min(frame.height()) * 0.9;
        let center = frame.center();
        draw_image_glyph(&mut frame, center, size, self.color);

        let half = size / 2.0;
        let crack = Path::new(|p| {
            p.move_to(Point::new(center.x + half * 0.1, center.y - half));
            p.line_to(Point::new(center.x - half * 0.15, center.y - half * 0.2));
            p.line_to(Point::new(center.x + half * 0.15, center.y + half * 0.15));
            p.line_to(Point::new(center.x - half * 0.05, center.y + half));
        });
        frame.stroke(
            &crack,
            Stroke::default()
                .with_width(size * 0.08)
                .with_color(Color {
                    a: 1.0,
                    ..self.background
                }),
        );

        vec![frame.into_geometry()]
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while the fullscreen image loads.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

const ARC_SEGMENTS: usize = 30;
const STROKE_WIDTH: f32 = 4.0;

/// Two-tone spinner: a faint track plus a 270° arc fading from `color` to `tail`.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    tail: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner for an animation `phase` in `[0, 1)`.
    #[must_use]
    pub fn new(color: Color, tail: Color, phase: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation: phase.rem_euclid(1.0) * TAU,
            color,
            tail,
            size: sizing::SPINNER,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.15,
                        ..self.color
                    }),
                );

                // -90° so the head starts at the top
                let start_angle = self.rotation - PI / 2.0;
                let sweep = PI * 1.5;
                let point_at = |angle: f32| {
                    Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    )
                };

                // One stroke per segment so the color can fade along the arc.
                #[allow(clippy::cast_precision_loss)]
                for i in 0..ARC_SEGMENTS {
                    let t0 = i as f32 / ARC_SEGMENTS as f32;
                    let t1 = (i + 1) as f32 / ARC_SEGMENTS as f32;
                    let segment = Path::line(
                        point_at(start_angle + sweep * t0),
                        point_at(start_angle + sweep * t1),
                    );
                    frame.stroke(
                        &segment,
                        Stroke::default()
                            .with_width(STROKE_WIDTH)
                            .with_color(lerp_color(self.tail, self.color, t1))
                            .with_line_cap(canvas::LineCap::Round),
                    );
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_into_one_turn() {
        let spinner = AnimatedSpinner::new(Color::WHITE, Color::BLACK, 1.25);
        assert!((spinner.rotation - TAU * 0.25).abs() < 1e-4);
    }

    #[test]
    fn lerp_color_hits_endpoints() {
        let a = Color::from_rgb(0.0, 0.0, 0.0);
        let b = Color::from_rgb(1.0, 0.5, 0.25);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
    }
}

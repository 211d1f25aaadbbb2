// SPDX-License-Identifier: MPL-2.0
//! Branded placeholder: a breathing radial glow in violet, pink and cyan
//! behind a slowly rotating search glyph.

use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme, Vector};
use std::f32::consts::{PI, TAU};

const GLYPH_SIZE: f32 = 64.0;
const MIN_ALPHA: f32 = 0.3;
const MAX_ALPHA: f32 = 0.9;

pub struct Pulse {
    cache: Cache,
    phase: f32,
}

impl Pulse {
    #[must_use]
    pub fn new(phase: f32) -> Self {
        Self {
            cache: Cache::default(),
            phase: phase.rem_euclid(1.0),
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Glow intensity: eases between the bounds twice per phase cycle.
#[must_use]
pub fn breathing_alpha(phase: f32) -> f32 {
    let wave = 0.5 - 0.5 * (phase.rem_euclid(1.0) * 2.0 * TAU).cos();
    MIN_ALPHA + (MAX_ALPHA - MIN_ALPHA) * wave
}

impl<Message> canvas::Program<Message> for Pulse {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let alpha = breathing_alpha(self.phase);

        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let reach = frame.width().max(frame.height()) * 0.75;

                // Outer to inner rings approximate a radial gradient.
                let rings = [
                    (1.0, palette::CYAN_500, alpha * 0.1),
                    (0.66, palette::PINK_500, alpha * 0.2),
                    (0.33, palette::VIOLET_500, alpha * 0.3),
                ];
                for (scale, color, a) in rings {
                    frame.fill(&Path::circle(center, reach * scale), Color { a, ..color });
                }

                frame.with_save(|frame| {
                    frame.translate(Vector::new(center.x, center.y));
                    frame.rotate(self.phase * TAU);

                    let glyph = Color {
                        a: alpha * 0.6,
                        ..palette::WHITE
                    };
                    let lens_radius = GLYPH_SIZE * 0.28;
                    let lens_center = Point::new(-GLYPH_SIZE * 0.08, -GLYPH_SIZE * 0.08);
                    frame.stroke(
                        &Path::circle(lens_center, lens_radius),
                        Stroke::default().with_width(4.0).with_color(glyph),
                    );

                    let handle_dir = Vector::new((PI / 4.0).cos(), (PI / 4.0).sin());
                    let handle_start = lens_center + handle_dir * lens_radius;
                    let handle_end = handle_start + handle_dir * (GLYPH_SIZE * 0.3);
                    frame.stroke(
                        &Path::line(handle_start, handle_end),
                        Stroke::default()
                            .with_width(5.0)
                            .with_color(glyph)
                            .with_line_cap(canvas::LineCap::Round),
                    );
                });
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breathing_alpha_stays_in_bounds() {
        for step in 0..100 {
            let alpha = breathing_alpha(step as f32 / 100.0);
            assert!((MIN_ALPHA - 1e-5..=MAX_ALPHA + 1e-5).contains(&alpha));
        }
    }

    #[test]
    fn breathing_alpha_starts_dim() {
        assert!((breathing_alpha(0.0) - MIN_ALPHA).abs() < 1e-5);
    }
}

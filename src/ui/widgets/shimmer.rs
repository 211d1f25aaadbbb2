// SPDX-License-Identifier: MPL-2.0
//! Shimmer placeholder: a light band sweeping across a soft gray surface,
//! with an image glyph in the middle.

use iced::widget::canvas::{self, gradient, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Width of the moving band relative to the surface width.
const BAND_FRACTION: f32 = 0.6;
const GLYPH_SIZE: f32 = 28.0;

const SURFACE: Color = Color::from_rgba(0.8, 0.8, 0.8, 0.2);
const HIGHLIGHT: Color = Color::from_rgba(0.8, 0.8, 0.8, 0.6);
const GLYPH: Color = Color::from_rgba(0.27, 0.27, 0.27, 0.5);

pub struct Shimmer {
    cache: Cache,
    phase: f32,
}

impl Shimmer {
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

/// Horizontal span of the highlight band for a phase; the band enters from
/// the left edge and fully leaves on the right.
#[must_use]
pub fn band_span(phase: f32, width: f32) -> (f32, f32) {
    let band = width * BAND_FRACTION;
    let start = -band + (width + band) * phase.rem_euclid(1.0);
    (start, start + band)
}

/// Draws a framed landscape glyph centered on `center`.
pub(crate) fn draw_image_glyph(frame: &mut Frame, center: Point, size: f32, color: Color) {
    let half = size / 2.0;
    let top_left = Point::new(center.x - half, center.y - half * 0.8);
    let frame_size = Size::new(size, size * 0.8);
    frame.stroke(
        &Path::rounded_rectangle(top_left, frame_size, (size * 0.12).into()),
        Stroke::default().with_width(2.0).with_color(color),
    );

    let sun = Point::new(center.x + half * 0.45, center.y - half * 0.35);
    frame.fill(&Path::circle(sun, size * 0.08), color);

    let mountains = Path::new(|p| {
        p.move_to(Point::new(top_left.x + size * 0.1, top_left.y + frame_size.height * 0.85));
        p.line_to(Point::new(center.x - half * 0.2, center.y));
        p.line_to(Point::new(center.x + half * 0.15, center.y + half * 0.3));
        p.line_to(Point::new(center.x + half * 0.4, center.y + half * 0.1));
        p.line_to(Point::new(top_left.x + size * 0.9, top_left.y + frame_size.height * 0.85));
        p.close();
    });
    frame.fill(&mountains, color);
}

impl<Message> canvas::Program<Message> for Shimmer {
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
                frame.fill_rectangle(Point::ORIGIN, frame.size(), SURFACE);

                let (start, end) = band_span(self.phase, frame.width());
                let band = gradient::Linear::new(
                    Point::new(start, 0.0),
                    Point::new(end, frame.height()),
                )
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.5, HIGHLIGHT)
                .add_stop(1.0, Color::TRANSPARENT);
                frame.fill_rectangle(Point::ORIGIN, frame.size(), band);

                draw_image_glyph(frame, frame.center(), GLYPH_SIZE, GLYPH);
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_starts_off_screen_left() {
        let (start, end) = band_span(0.0, 100.0);
        assert!(start < 0.0);
        assert!(end <= 0.0 + f32::EPSILON);
    }

    #[test]
    fn band_ends_off_screen_right() {
        let (start, _) = band_span(0.999_99, 100.0);
        assert!(start >= 99.9);
    }

    #[test]
    fn band_width_is_constant() {
        for phase in [0.1, 0.4, 0.8] {
            let (start, end) = band_span(phase, 200.0);
            assert!((end - start - 200.0 * BAND_FRACTION).abs() < 1e-3);
        }
    }
}

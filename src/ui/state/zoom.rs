// SPDX-License-Identifier: MPL-2.0
//! Zoom/pan state of the fullscreen viewer.
//!
//! The state machine consumes [`GestureEvent`]s produced by the input layer:
//!
//! - `Transform { pan, zoom }`: `scale = clamp(last_scale * zoom)`,
//!   `offset += pan`. `zoom` is cumulative since the gesture started.
//! - `TransformEnd`: commits `last_scale = scale`.
//! - `DoubleTap`: toggles between the resting scale (offset reset) and the
//!   double-tap scale, committing `last_scale`.
//!
//! The offset is not clamped; the image can be dragged past the edges.

pub use crate::config::{DOUBLE_TAP_ZOOM_SCALE, MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
use crate::ui::state::gesture::GestureEvent;
use iced::{Point, Rectangle, Size, Vector};

/// Zoom scale, guaranteed to be within `[MIN_ZOOM_SCALE, MAX_ZOOM_SCALE]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a scale, clamping it to the valid range. NaN maps to the minimum.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self(MIN_ZOOM_SCALE);
        }
        Self(scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM_SCALE
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(MIN_ZOOM_SCALE)
    }
}

/// Pinch-zoom and pan state for one zoomable surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoomState {
    scale: ZoomScale,
    offset: Vector,
    last_scale: ZoomScale,
}

impl ZoomState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Scale committed at the end of the last gesture.
    #[must_use]
    pub fn last_scale(&self) -> f32 {
        self.last_scale.value()
    }

    /// Returns true when the surface is neither scaled nor moved.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale.is_min() && self.offset == Vector::ZERO
    }

    /// Applies one gesture event.
    pub fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Transform { pan, zoom } => {
                self.scale = ZoomScale::new(self.last_scale.value() * zoom);
                self.offset = self.offset + pan;
            }
            GestureEvent::TransformEnd => {
                self.last_scale = self.scale;
            }
            GestureEvent::DoubleTap => {
                if self.scale.value() > MIN_ZOOM_SCALE {
                    self.scale = ZoomScale::new(MIN_ZOOM_SCALE);
                    self.offset = Vector::ZERO;
                } else {
                    self.scale = ZoomScale::new(DOUBLE_TAP_ZOOM_SCALE);
                }
                self.last_scale = self.scale;
            }
        }
    }

    /// Where content laid out at `content` ends up after scaling about the
    /// center of `bounds` and translating by the offset.
    #[must_use]
    pub fn apply_to(&self, bounds: Rectangle, content: Rectangle) -> Rectangle {
        let scale = self.scale.value();
        let center = bounds.center();
        let size = Size::new(content.width * scale, content.height * scale);
        let position = Point::new(
            center.x + (content.x - center.x) * scale + self.offset.x,
            center.y + (content.y - center.y) * scale + self.offset.y,
        );
        Rectangle::new(position, size)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Pure geometry of the image surface: content fit, transform-to-clip
//! mapping, and the source crop needed to draw a clipped image.

use crate::request::{ContentFit, ImageTransform};
use iced::{Point, Rectangle, Size};

/// Clip region applied to a rendered surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipShape {
    /// Rectangular clip to the surface itself.
    None,
    /// Inscribed circle of the surface.
    Circle { center: Point, radius: f32 },
    /// Rounded rectangle covering the surface.
    Rounded { rect: Rectangle, radius: f32 },
}

impl ClipShape {
    /// Axis-aligned rectangle the shape is inscribed in.
    #[must_use]
    pub fn bounds(&self, surface: Rectangle) -> Rectangle {
        match *self {
            ClipShape::None => surface,
            ClipShape::Circle { center, radius } => Rectangle::new(
                Point::new(center.x - radius, center.y - radius),
                Size::new(radius * 2.0, radius * 2.0),
            ),
            ClipShape::Rounded { rect, .. } => rect,
        }
    }

    /// Corner radius to apply to [`ClipShape::bounds`].
    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        match *self {
            ClipShape::None => 0.0,
            ClipShape::Circle { radius, .. } | ClipShape::Rounded { radius, .. } => radius,
        }
    }
}

/// Maps a transform onto the clip region of `surface`.
///
/// `RoundedCorners(r)` is clamped to `[0, min(w, h) / 2]`; a radius that
/// reaches the clamp on a square surface is the same shape as a circle.
#[must_use]
pub fn clip_for(transform: ImageTransform, surface: Rectangle) -> ClipShape {
    let half_short_side = surface.width.min(surface.height).max(0.0) / 2.0;
    match transform {
        ImageTransform::None => ClipShape::None,
        ImageTransform::Circle => ClipShape::Circle {
            center: surface.center(),
            radius: half_short_side,
        },
        ImageTransform::RoundedCorners(radius) => {
            let radius = if radius.is_finite() { radius } else { 0.0 };
            ClipShape::Rounded {
                rect: surface,
                radius: radius.clamp(0.0, half_short_side),
            }
        }
    }
}

/// Where an image of `image` pixels is drawn inside `bounds` for a fit.
///
/// `Cover` may overflow `bounds`; callers clip to the bounds.
#[must_use]
pub fn fit_rect(fit: ContentFit, image: Size, bounds: Rectangle) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return bounds;
    }
    let scale_x = bounds.width / image.width;
    let scale_y = bounds.height / image.height;
    let scale = match fit {
        ContentFit::Fill => return bounds,
        ContentFit::Contain => scale_x.min(scale_y),
        ContentFit::Cover => scale_x.max(scale_y),
    };
    let size = Size::new(image.width * scale, image.height * scale);
    Rectangle::new(
        Point::new(
            bounds.x + (bounds.width - size.width) / 2.0,
            bounds.y + (bounds.height - size.height) / 2.0,
        ),
        size,
    )
}

/// The part of the component that shows image pixels.
///
/// `Contain` letterboxes, so its surface is the fitted rectangle; the other
/// fits cover the whole bounds.
#[must_use]
pub fn visible_surface(fit: ContentFit, image: Size, bounds: Rectangle) -> Rectangle {
    match fit {
        ContentFit::Contain => fit_rect(fit, image, bounds),
        ContentFit::Cover | ContentFit::Fill => bounds,
    }
}

/// Pixel rectangle `(x, y, width, height)` of the source image that lands
/// inside `target` when the whole image is drawn at `drawn`.
///
/// Returns `None` when `target` and `drawn` do not overlap.
#[must_use]
pub fn source_crop(
    image_width: u32,
    image_height: u32,
    drawn: Rectangle,
    target: Rectangle,
) -> Option<(u32, u32, u32, u32)> {
    if drawn.width <= 0.0 || drawn.height <= 0.0 || image_width == 0 || image_height == 0 {
        return None;
    }
    let visible = drawn.intersection(&target)?;

    let to_px_x = image_width as f32 / drawn.width;
    let to_px_y = image_height as f32 / drawn.height;

    let x0 = ((visible.x - drawn.x) * to_px_x).floor().max(0.0) as u32;
    let y0 = ((visible.y - drawn.y) * to_px_y).floor().max(0.0) as u32;
    let x1 = (((visible.x + visible.width - drawn.x) * to_px_x).ceil() as u32).min(image_width);
    let y1 = (((visible.y + visible.height - drawn.y) * to_px_y).ceil() as u32).min(image_height);

    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some((x0, y0, x1 - x0, y1 - y0))
}

// SPDX-License-Identifier: MPL-2.0
//! Custom widget that draws a decoded image with a content fit, a clip
//! shape and an optional zoom/pan transform, and turns pointer input into
//! [`GestureEvent`]s.
//!
//! Rounded and circular clips are drawn through the image `border_radius`,
//! which rounds the drawn rectangle. The widget therefore draws exactly the
//! clip's bounding rectangle, using a cropped copy of the pixels when the fit
//! or zoom would put part of the image outside it. The crop is computed during
//! layout and kept in the widget tree so it is built once per image and size.

use crate::loader::DecodedImage;
use crate::request::{ContentFit, ImageTransform};
use crate::ui::async_image::clip::{self, ClipShape};
use crate::ui::state::gesture::{GestureConfig, GestureEvent, GestureRecognizer};
use crate::ui::state::ZoomState;
use iced::advanced::image::{self as advanced_image, Renderer as _};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::mouse::{self, ScrollDelta};
use iced::widget::image;
use iced::{touch, Element, Event, Length, Point, Rectangle, Size, Theme};
use std::time::Instant;

/// Pixels per wheel "line" when the platform reports pixel deltas.
const PIXELS_PER_LINE: f32 = 50.0;

/// Draws one decoded image.
pub struct ImageSurface<'a, Message> {
    image: DecodedImage,
    fit: ContentFit,
    transform: ImageTransform,
    zoom: Option<ZoomState>,
    on_gesture: Option<Box<dyn Fn(GestureEvent) -> Message + 'a>>,
    gestures: GestureConfig,
    width: Length,
    height: Length,
    opacity: f32,
}

impl<'a, Message> ImageSurface<'a, Message> {
    #[must_use]
    pub fn new(image: DecodedImage) -> Self {
        Self {
            image,
            fit: ContentFit::default(),
            transform: ImageTransform::default(),
            zoom: None,
            on_gesture: None,
            gestures: GestureConfig::default(),
            width: Length::Fill,
            height: Length::Fill,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn fit(mut self, fit: ContentFit) -> Self {
        self.fit = fit;
        self
    }

    #[must_use]
    pub fn transform(mut self, transform: ImageTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Applies a zoom/pan state and reports gestures through `on_gesture`.
    #[must_use]
    pub fn zoomable(
        mut self,
        zoom: ZoomState,
        gestures: GestureConfig,
        on_gesture: impl Fn(GestureEvent) -> Message + 'a,
    ) -> Self {
        self.zoom = Some(zoom);
        self.gestures = gestures;
        self.on_gesture = Some(Box::new(on_gesture));
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    fn image_size(&self) -> Size {
        Size::new(self.image.width as f32, self.image.height as f32)
    }

    /// Resolves what to draw for component bounds.
    ///
    /// A zoom scales the fitted image and its clip together, so the clip
    /// follows the image and is then limited to `bounds`.
    fn plan(&self, bounds: Rectangle) -> DrawPlan {
        let image_size = self.image_size();
        let surface = clip::visible_surface(self.fit, image_size, bounds);
        let clip = clip::clip_for(self.transform, surface);
        let mut drawn = clip::fit_rect(self.fit, image_size, bounds);
        let (clip_rect, radius) = match clip {
            ClipShape::None => (surface, 0.0),
            shape => (shape.bounds(surface), shape.corner_radius()),
        };
        let (clip_rect, radius) = match &self.zoom {
            Some(zoom) => {
                drawn = zoom.apply_to(bounds, drawn);
                (zoom.apply_to(bounds, clip_rect), radius * zoom.scale())
            }
            None => (clip_rect, radius),
        };
        let clip_bounds = clip_rect
            .intersection(&bounds)
            .unwrap_or(Rectangle::new(bounds.position(), Size::ZERO));

        match clip {
            ClipShape::None => DrawPlan {
                drawn,
                target: drawn,
                clip_bounds,
                radius: 0.0,
                crop: None,
            },
            _ => {
                let target = drawn.intersection(&clip_rect).unwrap_or(clip_rect);
                let crop = clip::source_crop(self.image.width, self.image.height, drawn, clip_rect)
                    .filter(|&(_, _, w, h)| (w, h) != (self.image.width, self.image.height));
                DrawPlan {
                    drawn,
                    target,
                    clip_bounds,
                    radius,
                    crop,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DrawPlan {
    /// The whole image after fit and zoom.
    drawn: Rectangle,
    /// What is actually drawn: `drawn`, or its part inside the clip.
    target: Rectangle,
    clip_bounds: Rectangle,
    radius: f32,
    crop: Option<(u32, u32, u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CropKey {
    image_id: u64,
    region: (u32, u32, u32, u32),
}

#[derive(Debug, Default)]
struct State {
    recognizer: GestureRecognizer,
    cropped: Option<(CropKey, image::Handle)>,
}

impl State {
    fn cropped_handle(&self, image_id: u64, region: (u32, u32, u32, u32)) -> Option<&image::Handle> {
        self.cropped
            .as_ref()
            .filter(|(key, _)| key.image_id == image_id && key.region == region)
            .map(|(_, handle)| handle)
    }
}

fn crop_handle(image: &DecodedImage, (x, y, width, height): (u32, u32, u32, u32)) -> image::Handle {
    let cropped = image_rs::imageops::crop_imm(image.pixels(), x, y, width, height).to_image();
    image::Handle::from_rgba(width, height, cropped.into_raw())
}

impl<Message> Widget<Message, Theme, iced::Renderer> for ImageSurface<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            recognizer: GestureRecognizer::new(self.gestures),
            cropped: None,
        })
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let node = layout::atomic(limits, self.width, self.height);

        let state = tree.state.downcast_mut::<State>();
        if state.recognizer.config() != self.gestures {
            state.recognizer.set_config(self.gestures);
        }

        // Crops only depend on sizes, so an origin-anchored plan is enough.
        let plan = self.plan(Rectangle::with_size(node.size()));
        if let Some(region) = plan.crop {
            if state.cropped_handle(self.image.id(), region).is_none() {
                let handle = crop_handle(&self.image, region);
                state.cropped = Some((
                    CropKey {
                        image_id: self.image.id(),
                        region,
                    },
                    handle,
                ));
            }
        }

        node
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let plan = self.plan(bounds);
        let state = tree.state.downcast_ref::<State>();

        // Same origin-anchored region as computed in layout.
        let region = self.plan(Rectangle::with_size(bounds.size())).crop;
        let cropped = region.and_then(|region| state.cropped_handle(self.image.id(), region));
        let (handle, target, radius) = match (region, cropped) {
            (Some(_), Some(handle)) => (handle.clone(), plan.target, plan.radius),
            // Layout has not produced the crop yet; draw uncropped and square.
            (Some(_), None) => (self.image.handle.clone(), plan.drawn, 0.0),
            (None, _) => (self.image.handle.clone(), plan.target, plan.radius),
        };

        renderer.with_layer(bounds, |renderer| {
            let image = advanced_image::Image {
                handle,
                filter_method: advanced_image::FilterMethod::Linear,
                rotation: iced::Radians(0.0),
                opacity: self.opacity,
                snap: true,
                border_radius: radius.into(),
            };
            renderer.draw_image(image, target, plan.clip_bounds);
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let Some(on_gesture) = &self.on_gesture else {
            return;
        };
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();
        let recognizer = &mut state.recognizer;

        let events = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                match cursor.position_over(bounds) {
                    Some(position) => recognizer.mouse_pressed(position),
                    None => return,
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                recognizer.mouse_moved(*position)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let position = cursor.position().unwrap_or(Point::ORIGIN);
                recognizer.mouse_released(position, Instant::now())
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if !cursor.is_over(bounds) {
                    return;
                }
                let lines = match delta {
                    ScrollDelta::Lines { y, .. } => *y,
                    ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_LINE,
                };
                recognizer.wheel(lines)
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return;
                }
                recognizer.finger_pressed(id.0, *position)
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                recognizer.finger_moved(id.0, *position)
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) => {
                recognizer.finger_lifted(id.0, *position, Instant::now())
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => recognizer.finger_lost(id.0),
            _ => return,
        };

        if events.is_empty() {
            return;
        }
        for gesture in events {
            shell.publish(on_gesture(gesture));
        }
        shell.capture_event();
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if self.on_gesture.is_none() {
            return mouse::Interaction::default();
        }
        let state = tree.state.downcast_ref::<State>();
        if state.recognizer.is_active() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<ImageSurface<'a, Message>> for Element<'a, Message> {
    fn from(surface: ImageSurface<'a, Message>) -> Self {
        Element::new(surface)
    }
}

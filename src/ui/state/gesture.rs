// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition for the zoomable surface.
//!
//! [`GestureRecognizer`] turns raw pointer input (mouse buttons, wheel,
//! touch fingers) into an ordered stream of [`GestureEvent`]s:
//!
//! - one pointer dragging → `Transform { pan, zoom: 1.0 }` per move,
//!   `TransformEnd` on release;
//! - two fingers → `Transform { pan: centroid delta, zoom: spread ratio }`,
//!   `TransformEnd` when either finger lifts;
//! - wheel → `Transform { zoom: step^lines }` immediately followed by
//!   `TransformEnd`;
//! - two taps inside the double-tap window and slop radius → one
//!   `DoubleTap`. Single taps are never reported, so a double tap cannot be
//!   seen as two single taps.
//!
//! The recognizer takes timestamps as arguments so it stays deterministic.

use crate::config::{DEFAULT_DOUBLE_TAP_WINDOW_MS, DEFAULT_WHEEL_ZOOM_STEP, DOUBLE_TAP_SLOP};
use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Abstract gesture events consumed by [`super::zoom::ZoomState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Incremental pan plus zoom factor cumulative since the gesture started.
    Transform { pan: Vector, zoom: f32 },
    /// The current transform gesture finished.
    TransformEnd,
    DoubleTap,
}

/// Tuning knobs of the recognizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub double_tap_window: Duration,
    /// Maximum travel, in logical pixels, for a press/release to count as a tap
    /// and between the two taps of a double tap.
    pub slop: f32,
    pub wheel_step: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_window: Duration::from_millis(DEFAULT_DOUBLE_TAP_WINDOW_MS),
            slop: DOUBLE_TAP_SLOP,
            wheel_step: DEFAULT_WHEEL_ZOOM_STEP,
        }
    }
}

/// Pointer currently held down.
#[derive(Debug, Clone, Copy)]
struct Contact {
    id: u64,
    origin: Point,
    position: Point,
}

#[derive(Debug, Clone, Copy)]
struct Tap {
    position: Point,
    at: Instant,
}

#[derive(Debug, Clone, Copy)]
struct Pinch {
    initial_spread: f32,
    last_centroid: Point,
}

/// Pointer id reserved for the mouse; touch ids are offset past it.
const MOUSE_ID: u64 = u64::MAX;

#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    contacts: Vec<Contact>,
    pinch: Option<Pinch>,
    transforming: bool,
    /// Set once a pinch happened; the remaining finger is ignored until all lift.
    multi_touch: bool,
    last_tap: Option<Tap>,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Returns true while at least one pointer is held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.contacts.is_empty()
    }

    // ----------------------------------------------------------------------
    // Mouse
    // ----------------------------------------------------------------------

    pub fn mouse_pressed(&mut self, position: Point) -> Vec<GestureEvent> {
        self.pointer_down(MOUSE_ID, position)
    }

    pub fn mouse_moved(&mut self, position: Point) -> Vec<GestureEvent> {
        self.pointer_moved(MOUSE_ID, position)
    }

    pub fn mouse_released(&mut self, position: Point, now: Instant) -> Vec<GestureEvent> {
        self.pointer_up(MOUSE_ID, position, now)
    }

    /// Wheel scroll by `lines` (positive zooms in).
    pub fn wheel(&mut self, lines: f32) -> Vec<GestureEvent> {
        if lines == 0.0 || !lines.is_finite() || self.transforming {
            return Vec::new();
        }
        vec![
            GestureEvent::Transform {
                pan: Vector::ZERO,
                zoom: self.config.wheel_step.powf(lines),
            },
            GestureEvent::TransformEnd,
        ]
    }

    // ----------------------------------------------------------------------
    // Touch
    // ----------------------------------------------------------------------

    pub fn finger_pressed(&mut self, finger: u64, position: Point) -> Vec<GestureEvent> {
        self.pointer_down(finger, position)
    }

    pub fn finger_moved(&mut self, finger: u64, position: Point) -> Vec<GestureEvent> {
        self.pointer_moved(finger, position)
    }

    pub fn finger_lifted(&mut self, finger: u64, position: Point, now: Instant) -> Vec<GestureEvent> {
        self.pointer_up(finger, position, now)
    }

    /// The platform cancelled a finger; no tap is recorded.
    pub fn finger_lost(&mut self, finger: u64) -> Vec<GestureEvent> {
        let events = self.end_transform();
        self.contacts.retain(|c| c.id != finger);
        self.pinch = None;
        self.multi_touch = !self.contacts.is_empty();
        events
    }

    // ----------------------------------------------------------------------
    // Shared pointer logic
    // ----------------------------------------------------------------------

    fn pointer_down(&mut self, id: u64, position: Point) -> Vec<GestureEvent> {
        if self.contacts.iter().any(|c| c.id == id) {
            return Vec::new();
        }
        if self.contacts.len() >= 2 {
            return Vec::new();
        }

        let mut events = Vec::new();
        self.contacts.push(Contact {
            id,
            origin: position,
            position,
        });

        if self.contacts.len() == 2 {
            // A pan in progress ends where the pinch begins.
            events.extend(self.end_transform());
            self.multi_touch = true;
            self.last_tap = None;
            self.pinch = Some(Pinch {
                initial_spread: self.spread().max(1.0),
                last_centroid: self.centroid(),
            });
        }
        events
    }

    fn pointer_moved(&mut self, id: u64, position: Point) -> Vec<GestureEvent> {
        let Some(index) = self.contacts.iter().position(|c| c.id == id) else {
            return Vec::new();
        };
        let previous = self.contacts[index].position;
        self.contacts[index].position = position;

        if let Some(pinch) = self.pinch {
            let centroid = self.centroid();
            let zoom = self.spread() / pinch.initial_spread;
            let pan = centroid - pinch.last_centroid;
            self.pinch = Some(Pinch {
                last_centroid: centroid,
                ..pinch
            });
            self.transforming = true;
            return vec![GestureEvent::Transform { pan, zoom }];
        }

        if self.multi_touch {
            return Vec::new();
        }

        let contact = self.contacts[index];
        if !self.transforming && contact.origin.distance(position) <= self.config.slop {
            return Vec::new();
        }

        // The first event of a drag covers the travel inside the slop radius too.
        let pan = if self.transforming {
            position - previous
        } else {
            position - contact.origin
        };
        self.transforming = true;
        vec![GestureEvent::Transform { pan, zoom: 1.0 }]
    }

    fn pointer_up(&mut self, id: u64, position: Point, now: Instant) -> Vec<GestureEvent> {
        let Some(index) = self.contacts.iter().position(|c| c.id == id) else {
            return Vec::new();
        };
        let contact = self.contacts.remove(index);

        if self.pinch.take().is_some() || self.multi_touch {
            let events = self.end_transform();
            self.multi_touch = !self.contacts.is_empty();
            return events;
        }

        if self.transforming {
            return self.end_transform();
        }

        if contact.origin.distance(position) > self.config.slop {
            return Vec::new();
        }
        self.register_tap(position, now)
    }

    fn register_tap(&mut self, position: Point, now: Instant) -> Vec<GestureEvent> {
        if let Some(previous) = self.last_tap.take() {
            let within_window = now.saturating_duration_since(previous.at) <= self.config.double_tap_window;
            let within_slop = previous.position.distance(position) <= self.config.slop;
            if within_window && within_slop {
                return vec![GestureEvent::DoubleTap];
            }
        }
        self.last_tap = Some(Tap { position, at: now });
        Vec::new()
    }

    fn end_transform(&mut self) -> Vec<GestureEvent> {
        if std::mem::take(&mut self.transforming) {
            vec![GestureEvent::TransformEnd]
        } else {
            Vec::new()
        }
    }

    fn centroid(&self) -> Point {
        let count = self.contacts.len().max(1) as f32;
        let (x, y) = self
            .contacts
            .iter()
            .fold((0.0, 0.0), |(x, y), c| (x + c.position.x, y + c.position.y));
        Point::new(x / count, y / count)
    }

    fn spread(&self) -> f32 {
        match self.contacts.as_slice() {
            [a, b] => a.position.distance(b.position),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(GestureConfig::default())
    }

    fn click(r: &mut GestureRecognizer, at: Point, now: Instant) -> Vec<GestureEvent> {
        let mut events = r.mouse_pressed(at);
        events.extend(r.mouse_released(at, now));
        events
    }

    #[test]
    fn single_click_produces_nothing() {
        let mut r = recognizer();
        assert!(click(&mut r, Point::new(10.0, 10.0), Instant::now()).is_empty());
    }

    #[test]
    fn two_quick_clicks_produce_one_double_tap() {
        let mut r = recognizer();
        let t0 = Instant::now();
        assert!(click(&mut r, Point::new(10.0, 10.0), t0).is_empty());
        let events = click(&mut r, Point::new(12.0, 11.0), t0 + Duration::from_millis(120));
        assert_eq!(events, vec![GestureEvent::DoubleTap]);

        // A third click starts a new sequence.
        let events = click(&mut r, Point::new(12.0, 11.0), t0 + Duration::from_millis(200));
        assert!(events.is_empty());
    }

    #[test]
    fn slow_second_click_is_not_a_double_tap() {
        let mut r = recognizer();
        let t0 = Instant::now();
        click(&mut r, Point::new(10.0, 10.0), t0);
        let events = click(&mut r, Point::new(10.0, 10.0), t0 + Duration::from_millis(900));
        assert!(events.is_empty());
    }

    #[test]
    fn distant_second_click_is_not_a_double_tap() {
        let mut r = recognizer();
        let t0 = Instant::now();
        click(&mut r, Point::new(10.0, 10.0), t0);
        let events = click(&mut r, Point::new(200.0, 10.0), t0 + Duration::from_millis(100));
        assert!(events.is_empty());
    }

    #[test]
    fn drag_pans_and_ends() {
        let mut r = recognizer();
        assert!(r.mouse_pressed(Point::new(0.0, 0.0)).is_empty());
        assert!(r.mouse_moved(Point::new(5.0, 0.0)).is_empty());

        let events = r.mouse_moved(Point::new(40.0, 0.0));
        assert_eq!(
            events,
            vec![GestureEvent::Transform {
                pan: Vector::new(40.0, 0.0),
                zoom: 1.0
            }]
        );
        let events = r.mouse_moved(Point::new(50.0, 10.0));
        assert_eq!(
            events,
            vec![GestureEvent::Transform {
                pan: Vector::new(10.0, 10.0),
                zoom: 1.0
            }]
        );
        let events = r.mouse_released(Point::new(50.0, 10.0), Instant::now());
        assert_eq!(events, vec![GestureEvent::TransformEnd]);
    }

    #[test]
    fn wheel_emits_transform_then_end() {
        let mut r = recognizer();
        let events = r.wheel(1.0);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            GestureEvent::Transform { zoom, .. } if (zoom - DEFAULT_WHEEL_ZOOM_STEP).abs() < 1e-6
        ));
        assert_eq!(events[1], GestureEvent::TransformEnd);
        assert!(r.wheel(0.0).is_empty());
    }

    #[test]
    fn two_finger_pinch_reports_spread_ratio() {
        let mut r = recognizer();
        r.finger_pressed(1, Point::new(100.0, 100.0));
        r.finger_pressed(2, Point::new(200.0, 100.0));

        let events = r.finger_moved(2, Point::new(300.0, 100.0));
        match events.as_slice() {
            [GestureEvent::Transform { pan, zoom }] => {
                assert!((zoom - 2.0).abs() < 1e-5);
                assert_eq!(*pan, Vector::new(50.0, 0.0));
            }
            other => panic!("unexpected events {other:?}"),
        }

        let events = r.finger_lifted(1, Point::new(100.0, 100.0), Instant::now());
        assert_eq!(events, vec![GestureEvent::TransformEnd]);

        // The remaining finger neither pans nor taps.
        assert!(r.finger_moved(2, Point::new(400.0, 100.0)).is_empty());
        assert!(r
            .finger_lifted(2, Point::new(400.0, 100.0), Instant::now())
            .is_empty());
        assert!(!r.is_active());
    }

    #[test]
    fn double_tap_with_fingers() {
        let mut r = recognizer();
        let t0 = Instant::now();
        r.finger_pressed(7, Point::new(50.0, 50.0));
        assert!(r.finger_lifted(7, Point::new(50.0, 50.0), t0).is_empty());
        r.finger_pressed(8, Point::new(52.0, 50.0));
        let events = r.finger_lifted(8, Point::new(52.0, 50.0), t0 + Duration::from_millis(150));
        assert_eq!(events, vec![GestureEvent::DoubleTap]);
    }

    #[test]
    fn lost_finger_ends_transform() {
        let mut r = recognizer();
        r.finger_pressed(1, Point::new(0.0, 0.0));
        r.finger_moved(1, Point::new(100.0, 0.0));
        assert_eq!(r.finger_lost(1), vec![GestureEvent::TransformEnd]);
        assert!(!r.is_active());
    }
}

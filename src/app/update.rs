// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::Message;
use crate::loader::ImageEngine;
use crate::showcase::{self, Showcase};
use iced::Task;
use std::time::Duration;

/// Length of one placeholder animation cycle.
pub const ANIMATION_PERIOD: Duration = Duration::from_millis(1200);

/// Mutable state `update` needs to borrow from the app.
pub struct UpdateContext<'a> {
    pub showcase: &'a mut Showcase,
    pub engine: &'a dyn ImageEngine,
    pub phase: &'a mut f32,
    pub elapsed: Duration,
}

pub fn update(ctx: UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Showcase(message) => ctx
            .showcase
            .update(message, ctx.engine)
            .map(Message::Showcase),
        Message::Tick(_) => {
            *ctx.phase = animation_phase(ctx.elapsed);
            Task::none()
        }
        Message::EscapePressed => ctx
            .showcase
            .update(showcase::Message::Dismiss, ctx.engine)
            .map(Message::Showcase),
    }
}

/// Position in the animation cycle, in `[0, 1)`.
#[must_use]
pub fn animation_phase(elapsed: Duration) -> f32 {
    let period = ANIMATION_PERIOD.as_secs_f32();
    (elapsed.as_secs_f32() % period) / period
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_each_period() {
        assert_eq!(animation_phase(Duration::ZERO), 0.0);
        let half = animation_phase(ANIMATION_PERIOD / 2);
        assert!((half - 0.5).abs() < 1e-4);
        let wrapped = animation_phase(ANIMATION_PERIOD * 3 + ANIMATION_PERIOD / 4);
        assert!((wrapped - 0.25).abs() < 1e-3);
    }

    #[test]
    fn phase_stays_in_unit_interval() {
        for ms in (0..10_000).step_by(37) {
            let phase = animation_phase(Duration::from_millis(ms));
            assert!((0.0..1.0).contains(&phase));
        }
    }
}

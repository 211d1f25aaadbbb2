// SPDX-License-Identifier: MPL-2.0
//! Async image component.
//!
//! Follows the same state-down/messages-up shape as the other components:
//! [`State`] tracks one image slot, [`State::observe`] is called with the
//! current [`ImageRequest`] whenever the owner updates, and [`State::handle`]
//! consumes the component's own [`Message`]s. Both return an [`Effect`] that
//! the owner turns into a [`Task`] with [`Effect::into_task`].
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──observe(source)──▶ Loading ──engine ok──▶ Success(image)
//!   │                          │
//!   │                          └──engine err──▶ Error(cause) ──Retry──▶ Loading
//!   └──observe(no source)──▶ Error(NoSource)
//! ```
//!
//! Only a change of the *resolved* source starts a new load. Every load gets a
//! fresh ticket; results carrying an older ticket are dropped, so a slow
//! response for a previous source can never overwrite the current one.

pub mod clip;

use crate::loader::{DecodedImage, ImageEngine, LoadError, LoadResult};
use crate::request::{ContentFit, ImageRequest, RenderContext, ResolvedSource};
use crate::ui::state::gesture::{GestureConfig, GestureEvent};
use crate::ui::state::ZoomState;
use crate::ui::widgets::ImageSurface;
use iced::{Element, Task};

/// Where a slot is in its load lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// Nothing observed yet.
    #[default]
    Idle,
    Loading,
    Success(DecodedImage),
    Error(LoadError),
}

impl LoadState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadState::Success(_) | LoadState::Error(_))
    }
}

/// Which subtree the component renders for a load state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Placeholder,
    Image,
    Error,
}

impl From<&LoadState> for Branch {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Idle | LoadState::Loading => Branch::Placeholder,
            LoadState::Success(_) => Branch::Image,
            LoadState::Error(_) => Branch::Error,
        }
    }
}

/// Messages owned by the component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The engine finished the load identified by `ticket`.
    Loaded { ticket: u64, result: LoadResult },
    /// Re-issue the current source.
    Retry,
}

/// Work the owner must schedule.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Fetch { ticket: u64, source: ResolvedSource },
}

impl Effect {
    /// Turns the effect into an iced task resolving to a component message.
    pub fn into_task(self, engine: &dyn ImageEngine) -> Task<Message> {
        match self {
            Effect::None => Task::none(),
            Effect::Fetch { ticket, source } => Task::perform(engine.load(source), move |result| {
                Message::Loaded { ticket, result }
            }),
        }
    }
}

/// State of one image slot.
#[derive(Debug, Clone, Default)]
pub struct State {
    source: Option<ResolvedSource>,
    load: LoadState,
    ticket: u64,
    observed: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn branch(&self) -> Branch {
        Branch::from(&self.load)
    }

    /// Source currently tracked, after precedence was applied.
    #[must_use]
    pub fn source(&self) -> Option<&ResolvedSource> {
        self.source.as_ref()
    }

    /// Synchronizes the slot with `request`.
    ///
    /// Idempotent for an unchanged resolved source. A changed source resets
    /// the slot: to `Success` straight away on a cache hit, to
    /// `Error(NoSource)` when nothing is set, otherwise to `Loading` with a
    /// fetch effect.
    pub fn observe<M>(&mut self, request: &ImageRequest<M>, engine: &dyn ImageEngine) -> Effect {
        let resolved = request.resolved_source();
        if self.observed && resolved == self.source {
            return Effect::None;
        }

        self.observed = true;
        self.source = resolved;
        self.ticket += 1;

        let Some(source) = self.source.clone() else {
            self.load = LoadState::Error(LoadError::NoSource);
            return Effect::None;
        };

        if let Some(image) = engine.peek(&source) {
            self.load = LoadState::Success(image);
            return Effect::None;
        }

        self.load = LoadState::Loading;
        Effect::Fetch {
            ticket: self.ticket,
            source,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Loaded { ticket, result } => {
                if ticket != self.ticket {
                    log::trace!("dropping stale image result (ticket {ticket}, current {})", self.ticket);
                    return Effect::None;
                }
                self.load = match result {
                    Ok(image) => LoadState::Success(image),
                    Err(cause) => LoadState::Error(cause),
                };
                Effect::None
            }
            Message::Retry => {
                if self.load == LoadState::Loading {
                    return Effect::None;
                }
                let Some(source) = self.source.clone() else {
                    return Effect::None;
                };
                self.ticket += 1;
                self.load = LoadState::Loading;
                Effect::Fetch {
                    ticket: self.ticket,
                    source,
                }
            }
        }
    }

    /// Renders the slot with a content fit.
    pub fn view<M: Clone + 'static>(
        &self,
        request: &ImageRequest<M>,
        fit: ContentFit,
        phase: f32,
    ) -> Element<'static, M> {
        self.render(request, phase, |image| {
            ImageSurface::new(image)
                .fit(fit)
                .transform(request.image_transform())
                .into()
        })
    }

    /// Renders the slot as a pinch-zoomable surface.
    pub fn view_zoomable<'a, M: Clone + 'static>(
        &self,
        request: &ImageRequest<M>,
        fit: ContentFit,
        phase: f32,
        zoom: &ZoomState,
        gestures: GestureConfig,
        on_gesture: impl Fn(GestureEvent) -> M + 'a,
    ) -> Element<'a, M> {
        self.render(request, phase, move |image| {
            ImageSurface::new(image)
                .fit(fit)
                .transform(request.image_transform())
                .zoomable(zoom.clone(), gestures, on_gesture)
                .into()
        })
    }

    fn render<'a, M: Clone + 'static>(
        &self,
        request: &ImageRequest<M>,
        phase: f32,
        surface: impl FnOnce(DecodedImage) -> Element<'a, M>,
    ) -> Element<'a, M> {
        match &self.load {
            LoadState::Idle | LoadState::Loading => {
                request.placeholder_renderer().render(RenderContext {
                    phase,
                    label: request.label(),
                    cause: None,
                    retry: None,
                })
            }
            LoadState::Success(image) => surface(image.clone()),
            LoadState::Error(cause) => request.error_renderer().render(RenderContext {
                phase,
                label: request.label(),
                cause: Some(cause),
                retry: request.retry_message().cloned(),
            }),
        }
    }
}

/// Human-readable failure text that always carries the accessibility label.
#[must_use]
pub fn describe_error(label: Option<&str>, cause: &LoadError) -> String {
    match label {
        Some(label) if !label.is_empty() => format!("{label}: {cause}"),
        _ => cause.to_string(),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Showcase gallery exercising every feature of the async image component.
//!
//! The showcase owns the sample items, the search query, one async image
//! slot per card, the open dialog and the fullscreen viewer. The app shell
//! forwards [`Message`]s to [`Showcase::update`] together with the image
//! engine, and renders [`Showcase::view`] with the current animation phase.

pub mod dialogs;
pub mod gallery;
pub mod viewer;

use crate::i18n::fluent::I18n;
use crate::loader::{ImageEngine, LoadError};
use crate::request::{ContentFit, ImageRequest, ImageSource, ImageTransform, RenderContext};
use crate::ui::async_image::{self, LoadState};
use crate::ui::components::placeholder;
use crate::ui::state::{GestureConfig, GestureEvent};
use dialogs::Modal;
use iced::widget::Stack;
use iced::{Element, Task};
use std::collections::HashMap;
use std::sync::Arc;

/// Feature label marking items that demo the alternative placeholder.
const CUSTOM_PLACEHOLDER_FEATURE: &str = "Custom Placeholder";

/// One card of the gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseItem {
    pub id: u32,
    pub title: String,
    pub feature_label: String,
    pub image_url: String,
    pub transform: ImageTransform,
    pub like_count: u32,
    pub liked: bool,
}

impl ShowcaseItem {
    fn new(
        id: u32,
        title: &str,
        feature_label: &str,
        image_url: &str,
        transform: ImageTransform,
        like_count: u32,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            feature_label: feature_label.to_string(),
            image_url: image_url.to_string(),
            transform,
            like_count,
            liked: false,
        }
    }

    /// Whether the card shows the branded pulse instead of the shimmer.
    #[must_use]
    pub fn uses_custom_placeholder(&self) -> bool {
        self.feature_label
            .to_lowercase()
            .contains(&CUSTOM_PLACEHOLDER_FEATURE.to_lowercase())
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.feature_label.to_lowercase().contains(needle)
    }
}

/// The twelve demo items. Item 4 points at an unreachable host on purpose.
#[must_use]
#[rustfmt::skip]
pub fn sample_items() -> Vec<ShowcaseItem> {
    use ImageTransform::{Circle, RoundedCorners};

    vec![
        ShowcaseItem::new(1, "Mountain Peak", "RoundedCorners 16px",
            "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&h=600&fit=crop",
            RoundedCorners(16.0), 234),
        ShowcaseItem::new(2, "Ocean Sunset", "Circle Transform",
            "https://images.unsplash.com/photo-1505142468610-359e7d316be0?w=800&h=600&fit=crop",
            Circle, 189),
        ShowcaseItem::new(3, "City Skyline", "RoundedCorners 25px",
            "https://images.unsplash.com/photo-1514565131-fce0801e5785?w=800&h=600&fit=crop",
            RoundedCorners(25.0), 456),
        ShowcaseItem::new(4, "Forest Path", "Error Handling",
            "https://invalid-url-to-show-error.com/image.jpg",
            RoundedCorners(16.0), 312),
        ShowcaseItem::new(5, "Desert Landscape", "RoundedCorners 30px",
            "https://images.unsplash.com/photo-1509316785289-025f5b846b35?w=800&h=600&fit=crop",
            RoundedCorners(30.0), 278),
        ShowcaseItem::new(6, "Profile Avatar", "Circle Avatar",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&fit=crop",
            Circle, 198),
        ShowcaseItem::new(7, "Tropical Beach", "Zoomable & Contain Fit",
            "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=800&h=600&fit=crop",
            ImageTransform::None, 345),
        ShowcaseItem::new(8, "Night City", "RoundedCorners 40px",
            "https://images.unsplash.com/photo-1519501025264-65ba15a82390?w=800&h=600&fit=crop",
            RoundedCorners(40.0), 221),
        ShowcaseItem::new(9, "Aurora Sky", "Default Shimmer Loading",
            "https://images.unsplash.com/photo-1531366936337-7c912a4589a7?w=800&h=600&fit=crop",
            RoundedCorners(12.0), 567),
        ShowcaseItem::new(10, "Coffee Cup", "Circle Profile",
            "https://images.unsplash.com/photo-1509042239860-f550ce710b93?w=400&h=400&fit=crop",
            Circle, 423),
        ShowcaseItem::new(11, "Mountains Sunset", "Custom Placeholder",
            "https://images.unsplash.com/photo-1540979388789-6cee28a1cdc9?w=800&h=600&fit=crop",
            RoundedCorners(16.0), 689),
        ShowcaseItem::new(12, "Tech Workspace", "Cover Fit",
            "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=600&fit=crop",
            RoundedCorners(14.0), 534),
    ]
}

/// Items whose title or feature label contains `query`, ignoring case.
///
/// An empty query matches everything; order is preserved.
#[must_use]
pub fn filter<'a>(query: &str, items: &'a [ShowcaseItem]) -> Vec<&'a ShowcaseItem> {
    let needle = query.to_lowercase();
    items.iter().filter(|item| item.matches(&needle)).collect()
}

/// Flips the like flag of item `id`, keeping the count in step.
///
/// Returns false when no item has that id.
pub fn toggle_like(items: &mut [ShowcaseItem], id: u32) -> bool {
    let Some(item) = items.iter_mut().find(|item| item.id == id) else {
        return false;
    };
    if item.liked {
        item.liked = false;
        item.like_count = item.like_count.saturating_sub(1);
    } else {
        item.liked = true;
        item.like_count = item.like_count.saturating_add(1);
    }
    true
}

/// Messages handled by the showcase.
#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    OpenModal(Modal),
    /// Closes the topmost overlay: a dialog first, then the viewer.
    Dismiss,
    OpenViewer(u32),
    ToggleLike(u32),
    /// A card's image slot.
    CardImage { id: u32, message: async_image::Message },
    ViewerImage(async_image::Message),
    Gesture(GestureEvent),
}

/// Root state of the showcase screen.
#[derive(Debug)]
pub struct Showcase {
    items: Vec<ShowcaseItem>,
    query: String,
    slots: HashMap<u32, async_image::State>,
    modal: Option<Modal>,
    viewer: Option<viewer::State>,
    gestures: GestureConfig,
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new(sample_items(), GestureConfig::default())
    }
}

impl Showcase {
    #[must_use]
    pub fn new(items: Vec<ShowcaseItem>, gestures: GestureConfig) -> Self {
        Self {
            items,
            query: String::new(),
            slots: HashMap::new(),
            modal: None,
            viewer: None,
            gestures,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[ShowcaseItem] {
        &self.items
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn visible_items(&self) -> Vec<&ShowcaseItem> {
        filter(&self.query, &self.items)
    }

    #[must_use]
    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    #[must_use]
    pub fn viewer(&self) -> Option<&viewer::State> {
        self.viewer.as_ref()
    }

    /// Load state of the card slot for `id`, if it was ever observed.
    #[must_use]
    pub fn card_state(&self, id: u32) -> Option<&LoadState> {
        self.slots.get(&id).map(async_image::State::load_state)
    }

    /// True while any visible image is still loading, so placeholders need
    /// animation ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let cards_loading = self
            .visible_items()
            .iter()
            .filter_map(|item| self.slots.get(&item.id))
            .any(|slot| *slot.load_state() == LoadState::Loading);
        let viewer_loading = self
            .viewer
            .as_ref()
            .is_some_and(|viewer| *viewer.image().load_state() == LoadState::Loading);
        cards_loading || viewer_loading
    }

    /// Starts loading the images of the visible cards.
    pub fn start(&mut self, engine: &dyn ImageEngine) -> Task<Message> {
        self.sync_cards(engine)
    }

    pub fn update(&mut self, message: Message, engine: &dyn ImageEngine) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.query = query;
                self.sync_cards(engine)
            }
            Message::OpenModal(modal) => {
                self.modal = Some(modal);
                Task::none()
            }
            Message::Dismiss => {
                if self.modal.take().is_none() {
                    self.viewer = None;
                }
                Task::none()
            }
            Message::OpenViewer(id) => {
                let Some(item) = self.items.iter().find(|item| item.id == id) else {
                    return Task::none();
                };
                let mut viewer = viewer::State::new(id);
                let effect = viewer.observe(&viewer_request(item), engine);
                self.viewer = Some(viewer);
                effect.into_task(engine).map(Message::ViewerImage)
            }
            Message::ToggleLike(id) => {
                if !toggle_like(&mut self.items, id) {
                    log::debug!("like toggled for unknown item {id}");
                }
                Task::none()
            }
            Message::CardImage { id, message } => {
                let Some(slot) = self.slots.get_mut(&id) else {
                    return Task::none();
                };
                slot.handle(message)
                    .into_task(engine)
                    .map(move |message| Message::CardImage { id, message })
            }
            Message::ViewerImage(message) => match self.viewer.as_mut() {
                Some(viewer) => viewer
                    .handle_image(message)
                    .into_task(engine)
                    .map(Message::ViewerImage),
                None => Task::none(),
            },
            Message::Gesture(event) => {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.handle_gesture(event);
                }
                Task::none()
            }
        }
    }

    /// Observes every visible card; unchanged sources are no-ops.
    fn sync_cards(&mut self, engine: &dyn ImageEngine) -> Task<Message> {
        let requests: Vec<(u32, ImageRequest<Message>)> = filter(&self.query, &self.items)
            .into_iter()
            .map(|item| (item.id, card_request(item)))
            .collect();

        let tasks = requests.into_iter().map(|(id, request)| {
            self.slots
                .entry(id)
                .or_default()
                .observe(&request, engine)
                .into_task(engine)
                .map(move |message| Message::CardImage { id, message })
        });
        Task::batch(tasks.collect::<Vec<_>>())
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, phase: f32) -> Element<'a, Message> {
        let no_source = i18n.tr(LoadError::NoSource.i18n_key());
        let fetch_failed = i18n.tr(LoadError::FetchFailed(String::new()).i18n_key());
        let error_renderer = placeholder::titled_error::<Message>(
            i18n.tr("image-error-title"),
            i18n.tr("image-retry"),
            move |cause| match cause {
                LoadError::NoSource => no_source.clone(),
                LoadError::FetchFailed(_) => fetch_failed.clone(),
            },
        );

        let cards = self
            .visible_items()
            .into_iter()
            .map(|item| {
                let request = card_request(item).error(Arc::clone(&error_renderer));
                let image: Element<'a, Message> = match self.slots.get(&item.id) {
                    Some(slot) => slot.view(&request, ContentFit::Cover, phase),
                    None => request.placeholder_renderer().render(RenderContext {
                        phase,
                        label: request.label(),
                        cause: None,
                        retry: None,
                    }),
                };
                (item, image)
            })
            .collect();

        let base = gallery::view(gallery::ViewContext {
            i18n,
            query: &self.query,
            cards,
        });

        let mut stack = Stack::new().push(base);

        if let Some(viewer) = &self.viewer {
            if let Some(item) = self.items.iter().find(|item| item.id == viewer.item_id()) {
                let request = viewer_request(item).error(viewer::error_renderer(i18n, &item.title));
                stack = stack.push(viewer.view(viewer::ViewContext {
                    i18n,
                    item,
                    request: &request,
                    phase,
                    gestures: self.gestures,
                }));
            }
        }

        if let Some(modal) = self.modal {
            stack = stack.push(dialogs::view(modal, i18n));
        }

        stack.into()
    }
}

/// Request for a gallery card: the item's transform and accessibility text,
/// the pulse placeholder for "Custom Placeholder" items.
fn card_request(item: &ShowcaseItem) -> ImageRequest<Message> {
    let id = item.id;
    let request = ImageRequest::new(ImageSource::url(&item.image_url))
        .transform(item.transform)
        .accessibility_label(&item.title)
        .on_retry(Message::CardImage {
            id,
            message: async_image::Message::Retry,
        });

    if item.uses_custom_placeholder() {
        request.placeholder(Arc::new(placeholder::pulse::<Message>))
    } else {
        request
    }
}

/// Request for the fullscreen viewer: no clip, spinner placeholder.
fn viewer_request(item: &ShowcaseItem) -> ImageRequest<Message> {
    ImageRequest::new(ImageSource::url(&item.image_url))
        .accessibility_label(&item.title)
        .placeholder(Arc::new(placeholder::spinner::<Message>))
        .on_retry(Message::ViewerImage(async_image::Message::Retry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{DecodedImage, Engine, EngineConfig, LoadResult};
    use crate::request::ResolvedSource;
    use futures_util::future::{self, BoxFuture, FutureExt};
    use image_rs::{Rgba, RgbaImage};

    /// Engine whose memory already holds every source.
    struct WarmEngine(DecodedImage);

    impl ImageEngine for WarmEngine {
        fn peek(&self, _source: &ResolvedSource) -> Option<DecodedImage> {
            Some(self.0.clone())
        }

        fn load(&self, _source: ResolvedSource) -> BoxFuture<'static, LoadResult> {
            future::ready(Ok(self.0.clone())).boxed()
        }
    }

    fn warm_engine() -> WarmEngine {
        WarmEngine(DecodedImage::from_rgba(RgbaImage::from_pixel(
            8,
            4,
            Rgba([10, 20, 30, 255]),
        )))
    }

    fn titles(items: &[&ShowcaseItem]) -> Vec<String> {
        items.iter().map(|item| item.title.clone()).collect()
    }

    #[test]
    fn sample_data_has_twelve_unique_items() {
        let items = sample_items();
        assert_eq!(items.len(), 12);
        let mut ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 12);
        assert!(items.iter().all(|item| !item.liked));
    }

    #[test]
    fn empty_query_matches_everything() {
        let items = sample_items();
        assert_eq!(filter("", &items).len(), items.len());
    }

    #[test]
    fn circle_query_finds_the_three_circle_items() {
        let items = sample_items();
        let found = filter("Circle", &items);
        assert_eq!(
            titles(&found),
            vec!["Ocean Sunset", "Profile Avatar", "Coffee Cup"]
        );
    }

    #[test]
    fn filter_is_case_insensitive_and_matches_titles() {
        let items = sample_items();
        assert_eq!(titles(&filter("cIRCLE", &items)).len(), 3);
        assert_eq!(titles(&filter("night", &items)), vec!["Night City"]);
    }

    #[test]
    fn filter_without_match_is_empty() {
        let items = sample_items();
        assert!(filter("zzz-no-such-thing", &items).is_empty());
    }

    #[test]
    fn toggle_like_twice_restores_item() {
        let mut items = sample_items();
        let before = items.clone();

        assert!(toggle_like(&mut items, 3));
        assert!(items[2].liked);
        assert_eq!(items[2].like_count, 457);

        assert!(toggle_like(&mut items, 3));
        assert_eq!(items, before);
    }

    #[test]
    fn toggle_like_unknown_id_is_noop() {
        let mut items = sample_items();
        let before = items.clone();
        assert!(!toggle_like(&mut items, 999));
        assert_eq!(items, before);
    }

    #[test]
    fn unlike_never_goes_below_zero() {
        let mut items = vec![ShowcaseItem {
            liked: true,
            ..ShowcaseItem::new(1, "Zero", "Circle", "https://a/b.png", ImageTransform::Circle, 0)
        }];
        toggle_like(&mut items, 1);
        assert_eq!(items[0].like_count, 0);
        assert!(!items[0].liked);
    }

    #[test]
    fn custom_placeholder_is_detected_from_feature_label() {
        let items = sample_items();
        let custom: Vec<u32> = items
            .iter()
            .filter(|item| item.uses_custom_placeholder())
            .map(|item| item.id)
            .collect();
        assert_eq!(custom, vec![11]);
    }

    #[test]
    fn opening_viewer_starts_loading_unzoomed() {
        let engine = Engine::offline(&EngineConfig::default());
        let mut showcase = Showcase::default();
        let _ = showcase.update(Message::OpenViewer(4), &engine);

        let viewer = showcase.viewer().expect("viewer open");
        assert_eq!(viewer.item_id(), 4);
        assert_eq!(*viewer.image().load_state(), LoadState::Loading);
        assert!(viewer.zoom().is_identity());
        assert!(showcase.is_animating());

        let i18n = I18n::default();
        let _ = showcase.view(&i18n, 0.25);
    }

    #[test]
    fn opening_unknown_item_keeps_viewer_closed() {
        let engine = Engine::offline(&EngineConfig::default());
        let mut showcase = Showcase::default();
        let _ = showcase.update(Message::OpenViewer(999), &engine);
        assert!(showcase.viewer().is_none());
    }

    #[test]
    fn view_renders_loaded_viewer_under_dialog() {
        let engine = warm_engine();
        let mut showcase = Showcase::default();
        let _ = showcase.start(&engine);
        let _ = showcase.update(Message::OpenViewer(1), &engine);
        let _ = showcase.update(Message::Gesture(GestureEvent::DoubleTap), &engine);
        let _ = showcase.update(Message::OpenModal(Modal::Features), &engine);

        let viewer = showcase.viewer().expect("viewer open");
        assert!(matches!(viewer.image().load_state(), LoadState::Success(_)));
        assert!((viewer.zoom().scale() - 3.0).abs() < f32::EPSILON);

        let i18n = I18n::default();
        let _ = showcase.view(&i18n, 0.0);
    }

    #[test]
    fn dismiss_closes_dialog_then_viewer_and_reopen_is_unzoomed() {
        let engine = warm_engine();
        let mut showcase = Showcase::default();
        let _ = showcase.update(Message::OpenViewer(2), &engine);
        let _ = showcase.update(Message::Gesture(GestureEvent::DoubleTap), &engine);
        let _ = showcase.update(Message::OpenModal(Modal::Info), &engine);

        let _ = showcase.update(Message::Dismiss, &engine);
        assert_eq!(showcase.modal(), None);
        assert!(showcase.viewer().is_some());

        let _ = showcase.update(Message::Dismiss, &engine);
        assert!(showcase.viewer().is_none());

        let _ = showcase.update(Message::OpenViewer(2), &engine);
        let viewer = showcase.viewer().expect("viewer reopened");
        assert!(viewer.zoom().is_identity());
    }

    #[test]
    fn gestures_without_viewer_are_ignored() {
        let engine = warm_engine();
        let mut showcase = Showcase::default();
        let _ = showcase.update(Message::Gesture(GestureEvent::DoubleTap), &engine);
        assert!(showcase.viewer().is_none());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Image request model.
//!
//! An [`ImageRequest`] describes one image load: where the pixels come from,
//! which clip shape to apply, the accessibility text, and how to render the
//! pending and failed states. Requests are cheap values rebuilt on every
//! `view()` pass; the async image component only looks at the *resolved*
//! source to decide whether a new load is needed.
//!
//! # Example
//!
//! ```
//! use iced_image_loader::request::{ImageRequest, ImageSource, ImageTransform};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Retry,
//! }
//!
//! let request: ImageRequest<Message> = ImageRequest::new(ImageSource::url("https://example.com/a.jpg"))
//!     .transform(ImageTransform::Circle)
//!     .accessibility_label("Avatar")
//!     .on_retry(Message::Retry);
//!
//! assert!(request.resolved_source().is_some());
//! ```

use crate::loader::LoadError;
use crate::ui::components::placeholder;
use iced::Element;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Where an image comes from.
///
/// Stored as three optional fields; callers are expected to populate exactly
/// one. When several are set, [`ImageSource::resolve`] picks the first
/// non-empty one in the order URL, file, resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSource {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub resource: Option<u32>,
}

/// A source after precedence has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedSource {
    Url(String),
    File(PathBuf),
    Resource(u32),
}

impl ImageSource {
    #[must_use]
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn resource(id: u32) -> Self {
        Self {
            resource: Some(id),
            ..Self::default()
        }
    }

    /// Returns the source to load, or `None` when every field is empty.
    #[must_use]
    pub fn resolve(&self) -> Option<ResolvedSource> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.trim().is_empty()) {
            return Some(ResolvedSource::Url(url.to_string()));
        }
        if let Some(path) = self.file.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            return Some(ResolvedSource::File(path.clone()));
        }
        self.resource.map(ResolvedSource::Resource)
    }

    /// Returns true when more than one field is populated.
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        let populated = [
            self.url.as_deref().is_some_and(|u| !u.trim().is_empty()),
            self.file.as_ref().is_some_and(|p| !p.as_os_str().is_empty()),
            self.resource.is_some(),
        ];
        populated.iter().filter(|set| **set).count() > 1
    }
}

impl fmt::Display for ResolvedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedSource::Url(url) => write!(f, "{url}"),
            ResolvedSource::File(path) => write!(f, "file://{}", path.display()),
            ResolvedSource::Resource(id) => write!(f, "resource://{id}"),
        }
    }
}

/// Clip shape requested for the rendered surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ImageTransform {
    #[default]
    None,
    Circle,
    /// Corner radius in logical pixels.
    RoundedCorners(f32),
}

/// How the decoded image is scaled into the component bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFit {
    /// Fill the bounds, cropping the overflow.
    #[default]
    Cover,
    /// Fit entirely inside the bounds, letterboxing as needed.
    Contain,
    /// Stretch to the bounds, ignoring aspect ratio.
    Fill,
}

/// What a renderer gets to look at when it is asked for its subtree.
#[derive(Debug, Clone)]
pub struct RenderContext<'a, Message> {
    /// Animation phase in `[0, 1)`, advanced by the application tick.
    pub phase: f32,
    /// Accessibility text of the request, if any.
    pub label: Option<&'a str>,
    /// Failure cause; only set when rendering the error branch.
    pub cause: Option<&'a LoadError>,
    /// Retry message; only set when rendering the error branch.
    pub retry: Option<Message>,
}

/// Renders one of the non-image branches (placeholder or error).
pub trait StateRenderer<Message>: Send + Sync {
    fn render(&self, ctx: RenderContext<'_, Message>) -> Element<'static, Message>;
}

impl<Message, F> StateRenderer<Message> for F
where
    F: Fn(RenderContext<'_, Message>) -> Element<'static, Message> + Send + Sync,
{
    fn render(&self, ctx: RenderContext<'_, Message>) -> Element<'static, Message> {
        self(ctx)
    }
}

/// Shared handle to a renderer.
pub type Renderer<Message> = Arc<dyn StateRenderer<Message>>;

/// One image load, as seen by the async image component.
pub struct ImageRequest<Message> {
    source: ImageSource,
    transform: ImageTransform,
    accessibility_label: Option<String>,
    placeholder: Renderer<Message>,
    error: Renderer<Message>,
    on_retry: Option<Message>,
}

impl<Message: Clone + 'static> ImageRequest<Message> {
    /// Creates a request with the default shimmer placeholder and
    /// broken-image error panel.
    #[must_use]
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            transform: ImageTransform::None,
            accessibility_label: None,
            placeholder: Arc::new(placeholder::default_shimmer::<Message>),
            error: Arc::new(placeholder::default_error::<Message>),
            on_retry: None,
        }
    }

    #[must_use]
    pub fn transform(mut self, transform: ImageTransform) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub fn accessibility_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, renderer: Renderer<Message>) -> Self {
        self.placeholder = renderer;
        self
    }

    #[must_use]
    pub fn error(mut self, renderer: Renderer<Message>) -> Self {
        self.error = renderer;
        self
    }

    #[must_use]
    pub fn on_retry(mut self, message: Message) -> Self {
        self.on_retry = Some(message);
        self
    }
}

impl<Message> ImageRequest<Message> {
    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    #[must_use]
    pub fn resolved_source(&self) -> Option<ResolvedSource> {
        self.source.resolve()
    }

    #[must_use]
    pub fn image_transform(&self) -> ImageTransform {
        self.transform
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.accessibility_label.as_deref()
    }

    #[must_use]
    pub fn placeholder_renderer(&self) -> &Renderer<Message> {
        &self.placeholder
    }

    #[must_use]
    pub fn error_renderer(&self) -> &Renderer<Message> {
        &self.error
    }

    #[must_use]
    pub fn retry_message(&self) -> Option<&Message> {
        self.on_retry.as_ref()
    }
}

impl<Message> fmt::Debug for ImageRequest<Message> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageRequest")
            .field("source", &self.source)
            .field("transform", &self.transform)
            .field("accessibility_label", &self.accessibility_label)
            .field("has_retry", &self.on_retry.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn url_wins_over_file_and_resource() {
        let source = ImageSource {
            url: Some("https://example.com/a.png".into()),
            file: Some(PathBuf::from("/tmp/a.png")),
            resource: Some(7),
        };
        assert_eq!(
            source.resolve(),
            Some(ResolvedSource::Url("https://example.com/a.png".into()))
        );
        assert!(source.is_ambiguous());
    }

    #[test]
    fn file_wins_over_resource() {
        let source = ImageSource {
            url: None,
            file: Some(PathBuf::from("/tmp/a.png")),
            resource: Some(7),
        };
        assert_eq!(
            source.resolve(),
            Some(ResolvedSource::File(PathBuf::from("/tmp/a.png")))
        );
    }

    #[test]
    fn empty_url_falls_through_to_next_field() {
        let source = ImageSource {
            url: Some("   ".into()),
            file: None,
            resource: Some(3),
        };
        assert_eq!(source.resolve(), Some(ResolvedSource::Resource(3)));
        assert!(!source.is_ambiguous());
    }

    #[test]
    fn empty_source_resolves_to_none() {
        assert_eq!(ImageSource::default().resolve(), None);
        let empty_path = ImageSource::file("");
        assert_eq!(empty_path.resolve(), None);
    }

    #[test]
    fn builder_sets_fields() {
        let request: ImageRequest<TestMessage> = ImageRequest::new(ImageSource::resource(1))
            .transform(ImageTransform::RoundedCorners(16.0))
            .accessibility_label("Mountain Peak")
            .on_retry(TestMessage::Retry);

        assert_eq!(request.image_transform(), ImageTransform::RoundedCorners(16.0));
        assert_eq!(request.label(), Some("Mountain Peak"));
        assert_eq!(request.retry_message(), Some(&TestMessage::Retry));
        assert_eq!(request.resolved_source(), Some(ResolvedSource::Resource(1)));
    }

    #[test]
    fn resolved_source_display_is_readable() {
        assert_eq!(ResolvedSource::Resource(4).to_string(), "resource://4");
        assert_eq!(
            ResolvedSource::Url("https://a/b.png".into()).to_string(),
            "https://a/b.png"
        );
    }
}

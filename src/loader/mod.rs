// SPDX-License-Identifier: MPL-2.0
//! Image fetching, decoding and memory caching.
//!
//! The async image component never talks to the network or the filesystem
//! itself. It goes through the [`ImageEngine`] trait, whose contract is:
//!
//! - [`ImageEngine::peek`] answers synchronously from the memory cache;
//! - [`ImageEngine::load`] returns a future that resolves to the terminal
//!   state of the load (`Ok(image)` or `Err(cause)`). Issuing the future is
//!   the `Loading` state.
//!
//! [`Engine`] is the production implementation: `reqwest` for URLs,
//! `tokio::fs` for files, bundled assets for resource ids, the `image` crate
//! for decoding, and an LRU [`cache::MemoryCache`].

pub mod cache;
pub mod decode;
pub mod resources;

pub use cache::{CacheConfig, MemoryCache};
pub use decode::DecodedImage;

use crate::config::LoaderConfig;
use crate::request::ResolvedSource;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Why an image could not be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request had no URL, file or resource set.
    NoSource,
    /// The engine reported a failure (network, HTTP status, I/O, decode).
    FetchFailed(String),
}

impl LoadError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadError::NoSource => "error-load-no-source",
            LoadError::FetchFailed(_) => "error-load-fetch-failed",
        }
    }

    /// Returns the underlying cause text, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&str> {
        match self {
            LoadError::NoSource => None,
            LoadError::FetchFailed(cause) => Some(cause),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NoSource => write!(f, "no-source"),
            LoadError::FetchFailed(cause) => write!(f, "fetch failed: {}", cause),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::FetchFailed(err.to_string())
    }
}

impl From<image_rs::ImageError> for LoadError {
    fn from(err: image_rs::ImageError) -> Self {
        LoadError::FetchFailed(format!("decode: {err}"))
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::FetchFailed(err.to_string())
    }
}

/// Terminal outcome of one load.
pub type LoadResult = Result<DecodedImage, LoadError>;

/// The capability the async image component depends on.
pub trait ImageEngine: Send + Sync {
    /// Synchronous cache lookup. Must not start any I/O.
    fn peek(&self, source: &ResolvedSource) -> Option<DecodedImage>;

    /// Starts resolving `source`; the future yields the terminal state.
    fn load(&self, source: ResolvedSource) -> BoxFuture<'static, LoadResult>;
}

/// Settings for the production engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub cache: CacheConfig,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from(&LoaderConfig::default())
    }
}

impl From<&LoaderConfig> for EngineConfig {
    fn from(config: &LoaderConfig) -> Self {
        Self {
            cache: CacheConfig::new(
                config.cache_max_mb.unwrap_or(crate::config::DEFAULT_CACHE_MAX_MB),
                config
                    .cache_max_images
                    .unwrap_or(crate::config::DEFAULT_CACHE_MAX_IMAGES),
            ),
            request_timeout: Duration::from_secs(
                config
                    .request_timeout_secs
                    .unwrap_or(crate::config::DEFAULT_REQUEST_TIMEOUT_SECS)
                    .into(),
            ),
            user_agent: config
                .user_agent
                .clone()
                .unwrap_or_else(|| crate::config::DEFAULT_USER_AGENT.to_string()),
        }
    }
}

/// Production image engine. Cheap to clone; clones share the cache.
#[derive(Clone)]
pub struct Engine {
    client: Option<reqwest::Client>,
    cache: Arc<Mutex<MemoryCache>>,
}

impl Engine {
    /// Builds an engine with an HTTP client.
    pub fn new(config: &EngineConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client: Some(client),
            cache: Arc::new(Mutex::new(MemoryCache::new(config.cache))),
        })
    }

    /// Builds an engine that can only load files and bundled resources.
    ///
    /// URL loads fail with a `FetchFailed` cause.
    #[must_use]
    pub fn offline(config: &EngineConfig) -> Self {
        Self {
            client: None,
            cache: Arc::new(Mutex::new(MemoryCache::new(config.cache))),
        }
    }

    /// Number of decoded images currently held in memory.
    #[must_use]
    pub fn cached_images(&self) -> usize {
        self.cache.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    async fn fetch_bytes(
        client: Option<reqwest::Client>,
        source: &ResolvedSource,
    ) -> Result<Vec<u8>, LoadError> {
        match source {
            ResolvedSource::Url(url) => {
                let client = client.ok_or_else(|| {
                    LoadError::FetchFailed("network access is unavailable".into())
                })?;
                let response = client.get(url).send().await?;
                if !response.status().is_success() {
                    return Err(LoadError::FetchFailed(format!(
                        "HTTP status: {}",
                        response.status()
                    )));
                }
                Ok(response.bytes().await?.to_vec())
            }
            ResolvedSource::File(path) => Ok(tokio::fs::read(path).await?),
            ResolvedSource::Resource(id) => resources::bytes(*id)
                .map(|data| data.into_owned())
                .ok_or_else(|| LoadError::FetchFailed(format!("unknown resource id {id}"))),
        }
    }
}

impl ImageEngine for Engine {
    fn peek(&self, source: &ResolvedSource) -> Option<DecodedImage> {
        self.cache.lock().ok()?.get(source)
    }

    fn load(&self, source: ResolvedSource) -> BoxFuture<'static, LoadResult> {
        let client = self.client.clone();
        let cache = Arc::clone(&self.cache);

        async move {
            log::debug!("loading {source}");
            let bytes = Engine::fetch_bytes(client, &source).await?;

            let image = tokio::task::spawn_blocking(move || decode::decode(&bytes))
                .await
                .map_err(|e| LoadError::FetchFailed(format!("decode task failed: {e}")))??;

            if let Ok(mut cache) = cache.lock() {
                cache.insert(source.clone(), image.clone());
            }
            log::debug!("loaded {source} ({}x{})", image.width, image.height);
            Ok(image)
        }
        .map(|result: LoadResult| {
            if let Err(err) = &result {
                log::warn!("image load failed: {err}");
            }
            result
        })
        .boxed()
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("online", &self.client.is_some())
            .field("cached_images", &self.cached_images())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn offline_engine() -> Engine {
        Engine::offline(&EngineConfig::default())
    }

    #[test]
    fn load_error_display_and_keys() {
        assert_eq!(LoadError::NoSource.to_string(), "no-source");
        assert_eq!(LoadError::NoSource.i18n_key(), "error-load-no-source");
        let err = LoadError::FetchFailed("network".into());
        assert_eq!(err.cause(), Some("network"));
        assert!(err.to_string().contains("network"));
    }

    #[tokio::test]
    async fn loads_file_and_populates_cache() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("pixel.png");
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode");
        std::fs::write(&path, bytes).expect("write");

        let engine = offline_engine();
        let source = ResolvedSource::File(path);
        assert!(engine.peek(&source).is_none());

        let image = engine.load(source.clone()).await.expect("load");
        assert_eq!((image.width, image.height), (2, 2));
        assert_eq!(engine.peek(&source), Some(image));
    }

    #[tokio::test]
    async fn missing_file_fails() {
        let engine = offline_engine();
        let result = engine
            .load(ResolvedSource::File("/definitely/not/here.png".into()))
            .await;
        assert!(matches!(result, Err(LoadError::FetchFailed(_))));
    }

    #[tokio::test]
    async fn bundled_resource_loads() {
        let engine = offline_engine();
        let image = engine
            .load(ResolvedSource::Resource(1))
            .await
            .expect("resource 1 is bundled");
        assert!(image.width > 0 && image.height > 0);
    }

    #[tokio::test]
    async fn unknown_resource_fails() {
        let engine = offline_engine();
        let result = engine.load(ResolvedSource::Resource(424_242)).await;
        assert!(matches!(result, Err(LoadError::FetchFailed(cause)) if cause.contains("424242")));
    }

    #[tokio::test]
    async fn offline_engine_rejects_urls() {
        let engine = offline_engine();
        let result = engine
            .load(ResolvedSource::Url("https://example.com/a.png".into()))
            .await;
        assert!(matches!(result, Err(LoadError::FetchFailed(_))));
    }
}

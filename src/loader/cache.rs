// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of decoded images.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Memory-bounded**: total size limited by a byte budget and an entry count
//! - **Source-keyed**: entries indexed by their [`ResolvedSource`]

use super::DecodedImage;
use crate::request::ResolvedSource;
use lru::LruCache;
use std::num::NonZeroUsize;

pub use crate::config::{
    DEFAULT_CACHE_MAX_IMAGES, DEFAULT_CACHE_MAX_MB, MAX_CACHE_MAX_IMAGES, MAX_CACHE_MAX_MB,
    MIN_CACHE_MAX_IMAGES, MIN_CACHE_MAX_MB,
};

/// Limits for the memory cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum cache size in bytes.
    pub max_bytes: usize,
    /// Maximum number of images to keep.
    pub max_images: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: (DEFAULT_CACHE_MAX_MB as usize) * 1024 * 1024,
            max_images: DEFAULT_CACHE_MAX_IMAGES,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration, clamping both limits to supported ranges.
    #[must_use]
    pub fn new(max_mb: u32, max_images: usize) -> Self {
        Self {
            max_bytes: (max_mb.clamp(MIN_CACHE_MAX_MB, MAX_CACHE_MAX_MB) as usize) * 1024 * 1024,
            max_images: max_images.clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES),
        }
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

/// LRU cache of decoded images.
pub struct MemoryCache {
    cache: LruCache<ResolvedSource, DecodedImage>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl MemoryCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Inserts an image.
    ///
    /// Returns `false` when the image is larger than half the byte budget and
    /// was therefore not cached.
    pub fn insert(&mut self, source: ResolvedSource, image: DecodedImage) -> bool {
        let size = image.size_bytes();
        if size > self.config.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&source) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while (self.current_bytes + size > self.config.max_bytes
            || self.cache.len() >= self.config.max_images)
            && !self.cache.is_empty()
        {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
                self.stats.evictions += 1;
            }
        }

        self.current_bytes += size;
        self.cache.put(source, image);
        self.stats.insertions += 1;
        true
    }

    /// Looks an image up, updating recency.
    pub fn get(&mut self, source: &ResolvedSource) -> Option<DecodedImage> {
        match self.cache.get(source) {
            Some(image) => {
                self.stats.hits += 1;
                Some(image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    #[must_use]
    pub fn contains(&self, source: &ResolvedSource) -> bool {
        self.cache.contains(source)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .field("stats", &self.stats)
            .finish()
    }
}

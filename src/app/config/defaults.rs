// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Fullscreen pinch-zoom bounds and double-tap level
//! - **Gestures**: Input-layer tuning (double-tap window, wheel step)
//! - **Loader**: Memory cache limits and HTTP settings

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale of an un-zoomed surface.
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Largest scale a pinch gesture can reach.
pub const MAX_ZOOM_SCALE: f32 = 5.0;

/// Scale applied by a double tap on an un-zoomed surface.
pub const DOUBLE_TAP_ZOOM_SCALE: f32 = 3.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Maximum delay between two taps for them to count as a double tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum double-tap window.
pub const MIN_DOUBLE_TAP_WINDOW_MS: u64 = 100;

/// Maximum double-tap window.
pub const MAX_DOUBLE_TAP_WINDOW_MS: u64 = 1000;

/// Maximum pointer travel (logical pixels) between the two taps of a double tap.
pub const DOUBLE_TAP_SLOP: f32 = 24.0;

/// Zoom factor applied per mouse-wheel line.
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 1.1;

/// Minimum wheel zoom factor per line.
pub const MIN_WHEEL_ZOOM_STEP: f32 = 1.01;

/// Maximum wheel zoom factor per line.
pub const MAX_WHEEL_ZOOM_STEP: f32 = 2.0;

// ==========================================================================
// Loader Defaults
// ==========================================================================

/// Default memory cache budget in megabytes.
pub const DEFAULT_CACHE_MAX_MB: u32 = 64;

/// Minimum memory cache budget in megabytes.
pub const MIN_CACHE_MAX_MB: u32 = 8;

/// Maximum memory cache budget in megabytes.
pub const MAX_CACHE_MAX_MB: u32 = 512;

/// Default number of decoded images kept in memory.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = 32;

/// Minimum number of cached images.
pub const MIN_CACHE_MAX_IMAGES: usize = 1;

/// Maximum number of cached images.
pub const MAX_CACHE_MAX_IMAGES: usize = 256;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 20;

/// User agent sent with image requests.
pub const DEFAULT_USER_AGENT: &str = concat!("iced_image_loader/", env!("CARGO_PKG_VERSION"));

const _: () = {
    assert!(MIN_ZOOM_SCALE < DOUBLE_TAP_ZOOM_SCALE);
    assert!(DOUBLE_TAP_ZOOM_SCALE < MAX_ZOOM_SCALE);
    assert!(MIN_DOUBLE_TAP_WINDOW_MS <= DEFAULT_DOUBLE_TAP_WINDOW_MS);
    assert!(DEFAULT_DOUBLE_TAP_WINDOW_MS <= MAX_DOUBLE_TAP_WINDOW_MS);
    assert!(MIN_CACHE_MAX_MB <= DEFAULT_CACHE_MAX_MB);
    assert!(DEFAULT_CACHE_MAX_MB <= MAX_CACHE_MAX_MB);
    assert!(MIN_CACHE_MAX_IMAGES <= DEFAULT_CACHE_MAX_IMAGES);
    assert!(DEFAULT_CACHE_MAX_IMAGES <= MAX_CACHE_MAX_IMAGES);
};

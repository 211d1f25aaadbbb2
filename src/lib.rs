// SPDX-License-Identifier: MPL-2.0
//! `iced_image_loader` is a unified async image component for the Iced GUI
//! framework.
//!
//! One [`request::ImageRequest`] describes where the pixels come from, how to
//! clip them and what to show while loading or after a failure. The
//! [`ui::async_image`] component drives the load through an
//! [`loader::ImageEngine`] and renders the matching branch, and
//! [`ui::widgets::ImageSurface`] adds pinch-zoom, double-tap and pan. The
//! [`showcase`] module is a gallery demonstrating all of it.

pub mod app;
pub mod error;
pub mod i18n;
pub mod loader;
pub mod request;
pub mod showcase;
pub mod ui;

pub use app::config;

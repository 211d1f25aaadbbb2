// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`error_display`] - "Image failed" panel with optional retry action
//! - [`placeholder`] - Stock renderers for the loading and error branches of
//!   the async image component

pub mod error_display;
pub mod placeholder;

// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod animated_spinner;
pub mod image_surface;
pub mod pulse;
pub mod shimmer;

pub use animated_spinner::AnimatedSpinner;
pub use image_surface::ImageSurface;
pub use pulse::Pulse;
pub use shimmer::Shimmer;

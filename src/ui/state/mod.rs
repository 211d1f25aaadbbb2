// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Interaction state kept out of the widgets so it can be unit tested.

pub mod gesture;
pub mod zoom;

pub use gesture::{GestureConfig, GestureEvent, GestureRecognizer};
pub use zoom::ZoomState;

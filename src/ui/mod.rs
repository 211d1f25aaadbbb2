// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks: the async image component, its widgets
//! and stock renderers, plus shared styling.

pub mod async_image;
pub mod components;
pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;

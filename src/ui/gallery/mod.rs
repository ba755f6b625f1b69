// SPDX-License-Identifier: MPL-2.0
//! Document gallery screen: toolbar, card grid, and lightbox preview.
//!
//! - [`component`] - State, messages, and update logic
//! - [`toolbar`] - Search box, category picker, result counter
//! - [`lightbox`] - Modal preview and its keyboard bindings

mod card;
pub mod component;
mod empty_state;
pub mod lightbox;
pub mod toolbar;

pub use component::{Effect, Message, State, ViewEnv};
pub use lightbox::preview_action_for_key;

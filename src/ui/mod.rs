// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns its state, handles its own messages, and reports side effects
//! to the application as an `Effect`.
//!
//! - [`gallery`] - Document grid, filters, and lightbox preview
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod notifications;
pub mod styles;
pub mod theming;

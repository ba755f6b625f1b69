// SPDX-License-Identifier: MPL-2.0
//! `doc_gallery` is a searchable gallery of certificates and offer letters
//! built with the Iced GUI framework.
//!
//! Documents can be filtered by title and category, previewed in a
//! keyboard-driven lightbox, opened with the platform's default viewer, or
//! saved to disk. The filtering and preview logic lives in [`domain`] and
//! [`navigator`] and is usable without a window.

#![doc(html_root_url = "https://docs.rs/doc_gallery/0.1.0")]

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod navigator;
pub mod ui;

// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with no UI or I/O dependencies.
//!
//! # Modules
//!
//! - [`document`]: Catalog records and filtering ([`DocumentRecord`](document::DocumentRecord),
//!   [`Catalog`](document::Catalog), [`FilterState`](document::FilterState),
//!   [`FilteredView`](document::FilteredView))

pub mod document;

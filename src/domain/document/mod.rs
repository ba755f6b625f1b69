// SPDX-License-Identifier: MPL-2.0
//! Document domain types.
//!
//! This module contains the catalog record types and the search/category
//! filter. Everything here is pure: no I/O, no UI.

pub mod catalog;
pub mod filter;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use filter::{filtered_view, CategoryFilter, FilterState, FilteredView};
pub use types::{DocumentCategory, DocumentRecord, ParseCategoryError};

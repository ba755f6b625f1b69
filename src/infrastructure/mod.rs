// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! These modules wrap the file system and platform services.
//!
//! # Available Adapters
//!
//! - [`catalog`]: Built-in catalog and TOML manifest loading
//! - [`documents`]: Opening documents and saving copies via a native dialog

pub mod catalog;
pub mod documents;

pub use documents::DownloadOutcome;

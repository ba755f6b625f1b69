// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Events go to stderr through `tracing-subscriber`. The filter is read from
//! the `DOC_GALLERY_LOG` environment variable using `EnvFilter` directives
//! (for example `DOC_GALLERY_LOG=doc_gallery=debug`).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "DOC_GALLERY_LOG";

/// Filter used when `DOC_GALLERY_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `DOC_GALLERY_LOG`, falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Calling it again (as tests may) leaves the first subscriber in place.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init();

    if result.is_ok() {
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    }
}

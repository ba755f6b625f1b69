// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::infrastructure::DownloadOutcome;
use crate::ui::gallery;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Result of a save dialog plus copy started by a Download button.
    DownloadFinished {
        /// File name shown in the resulting toast.
        file_name: String,
        result: Result<DownloadOutcome, Error>,
    },
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DOC_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional catalog manifest. Takes precedence over `gallery.catalog`.
    pub catalog: Option<String>,
}

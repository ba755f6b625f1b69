// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Gallery messages are handled by the component; the [`Effect`] it returns
//! is turned into platform work here.

use super::Message;
use crate::error::Error;
use crate::infrastructure::documents;
use crate::infrastructure::DownloadOutcome;
use crate::ui::gallery::{self, Effect};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::Path;

/// Mutable application state the handlers may touch.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.handle_message(message) {
        Effect::None => Task::none(),
        Effect::ViewDocument(path) => {
            if let Err(err) = documents::open_document(&path) {
                tracing::warn!(path = %path.display(), error = %err, "view failed");
                ctx.notifications.push(
                    Notification::error("notification-open-error")
                        .with_arg("file", display_name(&path)),
                );
            }
            Task::none()
        }
        Effect::DownloadDocument {
            source,
            suggested_name,
        } => {
            let file_name = suggested_name.clone();
            Task::perform(
                documents::download_document(source, suggested_name),
                move |result| Message::DownloadFinished {
                    file_name: file_name.clone(),
                    result,
                },
            )
        }
    }
}

pub fn handle_download_finished(
    ctx: &mut UpdateContext<'_>,
    file_name: String,
    result: Result<DownloadOutcome, Error>,
) -> Task<Message> {
    match result {
        Ok(DownloadOutcome::Saved(path)) => {
            ctx.notifications.push(
                Notification::success("notification-download-success")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Ok(DownloadOutcome::Cancelled) => {}
        Err(err) => {
            tracing::warn!(file = %file_name, error = %err, "download failed");
            ctx.notifications
                .push(Notification::error("notification-download-error").with_arg("file", file_name));
        }
    }
    Task::none()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{Catalog, CategoryFilter, DocumentCategory, DocumentRecord};
    use std::path::PathBuf;

    fn gallery_with_missing_file() -> gallery::State {
        let catalog = Catalog::new(vec![DocumentRecord::new(
            "Missing",
            DocumentCategory::Offer,
            "/nonexistent/missing.jpg",
            "/nonexistent/missing.pdf",
        )]);
        gallery::State::new(catalog, CategoryFilter::All)
    }

    #[test]
    fn failed_view_pushes_error_toast() {
        let mut gallery = gallery_with_missing_file();
        let mut manager = notifications::Manager::new();
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            notifications: &mut manager,
        };

        let _ = handle_gallery_message(&mut ctx, gallery::Message::ViewDocument(0));

        let visible: Vec<_> = manager.visible().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message_key(), "notification-open-error");
        assert_eq!(
            visible[0].message_args(),
            &[("file".to_string(), "missing.pdf".to_string())]
        );
    }

    #[test]
    fn download_outcomes_map_to_toasts() {
        let mut gallery = gallery_with_missing_file();
        let mut manager = notifications::Manager::new();
        let mut ctx = UpdateContext {
            gallery: &mut gallery,
            notifications: &mut manager,
        };

        let _ = handle_download_finished(
            &mut ctx,
            "a.pdf".into(),
            Ok(DownloadOutcome::Saved(PathBuf::from("/tmp/a.pdf"))),
        );
        let _ = handle_download_finished(&mut ctx, "a.pdf".into(), Ok(DownloadOutcome::Cancelled));
        let _ = handle_download_finished(
            &mut ctx,
            "a.pdf".into(),
            Err(Error::Io("disk full".into())),
        );

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(
            keys,
            vec!["notification-download-error", "notification-download-success"]
        );
    }

    #[test]
    fn display_name_prefers_file_name() {
        assert_eq!(display_name(Path::new("/docs/offer.pdf")), "offer.pdf");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}

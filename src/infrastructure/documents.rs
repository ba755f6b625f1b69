// SPDX-License-Identifier: MPL-2.0
//! Platform actions on document files: opening and saving a copy.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Outcome of a download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The document was copied to this path.
    Saved(PathBuf),
    /// The user dismissed the save dialog.
    Cancelled,
}

/// Opens `path` with the platform's default handler.
///
/// The handler is spawned detached; this returns without waiting for it.
pub fn open_document(path: &Path) -> Result<()> {
    open_document_with(path, |path| open::that_detached(path))
}

fn open_document_with<F>(path: &Path, launch: F) -> Result<()>
where
    F: FnOnce(&Path) -> std::io::Result<()>,
{
    if !path.exists() {
        return Err(Error::Open(format!("{} does not exist", path.display())));
    }
    launch(path).map_err(|err| Error::Open(format!("{}: {}", path.display(), err)))?;
    tracing::info!(path = %path.display(), "document opened");
    Ok(())
}

/// Copies `source` to `destination`, returning the destination on success.
pub async fn copy_document(source: &Path, destination: &Path) -> Result<PathBuf> {
    if source == destination {
        return Ok(destination.to_path_buf());
    }
    tokio::fs::copy(source, destination).await?;
    Ok(destination.to_path_buf())
}

/// Asks the user where to save `source`, then copies it there.
pub async fn download_document(source: PathBuf, suggested_name: String) -> Result<DownloadOutcome> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title(&suggested_name)
        .set_file_name(&suggested_name);
    if let Some(extension) = source.extension().and_then(|ext| ext.to_str()) {
        dialog = dialog.add_filter(extension.to_uppercase(), &[extension]);
    }
    let handle = dialog.save_file().await;

    let Some(handle) = handle else {
        tracing::debug!(source = %source.display(), "download cancelled");
        return Ok(DownloadOutcome::Cancelled);
    };

    let destination = copy_document(&source, handle.path()).await?;
    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        "document saved"
    );
    Ok(DownloadOutcome::Saved(destination))
}

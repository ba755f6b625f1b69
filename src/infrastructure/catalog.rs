// SPDX-License-Identifier: MPL-2.0
//! Catalog sources: the built-in document list and TOML manifests.
//!
//! A manifest lists documents as `[[documents]]` tables:
//!
//! ```toml
//! [[documents]]
//! title = "Certification in Python"
//! category = "certification"
//! image = "certificate2.jpg"
//! file = "certificate2.pdf"
//! ```
//!
//! Relative `image` and `file` paths resolve against the manifest's directory.

use crate::domain::document::{Catalog, DocumentCategory, DocumentRecord};
use crate::error::{CatalogError, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the built-in documents, relative to the base directory.
pub const BUILTIN_DOCS_DIR: &str = "docs";

const BUILTIN_DOCUMENTS: [(&str, DocumentCategory, &str); 4] = [
    (
        "Certification in Web Development",
        DocumentCategory::Certification,
        "certificate1",
    ),
    (
        "Offer Letter - Company XYZ",
        DocumentCategory::Offer,
        "offerletter1",
    ),
    (
        "Certification in Python",
        DocumentCategory::Certification,
        "certificate2",
    ),
    (
        "Offer Letter - Company ABC",
        DocumentCategory::Offer,
        "offerletter2",
    ),
];

/// Returns the built-in catalog with assets under `base_dir/docs`.
#[must_use]
pub fn builtin(base_dir: &Path) -> Catalog {
    let docs = base_dir.join(BUILTIN_DOCS_DIR);
    BUILTIN_DOCUMENTS
        .iter()
        .map(|(title, category, stem)| {
            DocumentRecord::new(
                *title,
                *category,
                docs.join(format!("{stem}.jpg")),
                docs.join(format!("{stem}.pdf")),
            )
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    documents: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    title: String,
    category: String,
    image: PathBuf,
    file: PathBuf,
}

/// Parses manifest text, resolving relative paths against `base_dir`.
pub fn parse_manifest(content: &str, base_dir: &Path) -> Result<Catalog> {
    let manifest: Manifest =
        toml::from_str(content).map_err(|err| CatalogError::Parse(err.message().to_string()))?;

    if manifest.documents.is_empty() {
        return Err(CatalogError::Empty.into());
    }

    manifest
        .documents
        .into_iter()
        .map(|entry| -> Result<DocumentRecord> {
            let category = entry
                .category
                .parse::<DocumentCategory>()
                .map_err(|err| CatalogError::UnknownCategory(err.0))?;
            Ok(DocumentRecord::new(
                entry.title,
                category,
                resolve(base_dir, entry.image),
                resolve(base_dir, entry.file),
            ))
        })
        .collect()
}

fn resolve(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}

/// Reads a manifest file.
pub fn load_manifest(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_manifest(&content, base_dir)
}

/// Picks the catalog for this session.
///
/// Without a manifest, returns the built-in catalog. A manifest that fails to
/// load also falls back to the built-in catalog, together with the i18n key of
/// a warning to show.
pub fn resolve_catalog(manifest: Option<&Path>, base_dir: &Path) -> (Catalog, Option<String>) {
    let Some(path) = manifest else {
        let catalog = builtin(base_dir);
        tracing::info!(documents = catalog.len(), "using built-in catalog");
        return (catalog, None);
    };

    match load_manifest(path) {
        Ok(catalog) => {
            tracing::info!(
                manifest = %path.display(),
                documents = catalog.len(),
                "catalog loaded"
            );
            (catalog, None)
        }
        Err(err) => {
            tracing::warn!(
                manifest = %path.display(),
                error = %err,
                "catalog manifest rejected, using built-in catalog"
            );
            let key = match &err {
                Error::Catalog(catalog_err) => catalog_err.i18n_key(),
                _ => "notification-catalog-read-error",
            };
            (builtin(base_dir), Some(key.to_string()))
        }
    }
}

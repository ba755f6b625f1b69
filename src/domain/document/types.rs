// SPDX-License-Identifier: MPL-2.0
//! Document record and category types.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// =============================================================================
// Document Category
// =============================================================================

/// Kind of document held in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentCategory {
    /// Course or exam certificate.
    Certification,
    /// Employment offer letter.
    Offer,
}

impl DocumentCategory {
    /// Stable identifier used in manifests and configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Certification => "certification",
            Self::Offer => "offer",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a category identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for DocumentCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "certification" => Ok(Self::Certification),
            "offer" => Ok(Self::Offer),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

// =============================================================================
// Document Record
// =============================================================================

/// A single entry of the catalog.
///
/// Records are immutable once built. The lowercase form of the title is
/// computed at construction so searching never re-folds the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    title: String,
    title_folded: String,
    category: DocumentCategory,
    image: PathBuf,
    file: PathBuf,
}

impl DocumentRecord {
    /// Creates a record from its title, category, preview image and document file.
    pub fn new(
        title: impl Into<String>,
        category: DocumentCategory,
        image: impl Into<PathBuf>,
        file: impl Into<PathBuf>,
    ) -> Self {
        let title = title.into();
        let title_folded = title.to_lowercase();
        Self {
            title,
            title_folded,
            category,
            image: image.into(),
            file: file.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lowercase title used for case-insensitive matching.
    #[must_use]
    pub fn title_folded(&self) -> &str {
        &self.title_folded
    }

    #[must_use]
    pub fn category(&self) -> DocumentCategory {
        self.category
    }

    /// Path of the image shown as thumbnail and in the preview.
    #[must_use]
    pub fn image(&self) -> &Path {
        &self.image
    }

    /// Path of the document handed to View and Download.
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// File name proposed when saving the document, falling back to the title.
    #[must_use]
    pub fn suggested_file_name(&self) -> String {
        self.file
            .file_name()
            .and_then(|name| name.to_str())
            .map(String::from)
            .unwrap_or_else(|| self.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!(
            "Certification".parse::<DocumentCategory>(),
            Ok(DocumentCategory::Certification)
        );
        assert_eq!(" OFFER ".parse::<DocumentCategory>(), Ok(DocumentCategory::Offer));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "diploma".parse::<DocumentCategory>().unwrap_err();
        assert_eq!(err, ParseCategoryError("diploma".to_string()));
    }

    #[test]
    fn category_display_matches_identifier() {
        assert_eq!(DocumentCategory::Offer.to_string(), "offer");
        assert_eq!(DocumentCategory::Certification.as_str(), "certification");
    }

    #[test]
    fn record_folds_title_once() {
        let record = DocumentRecord::new(
            "Certification in Python",
            DocumentCategory::Certification,
            "docs/certificate2.jpg",
            "docs/certificate2.pdf",
        );
        assert_eq!(record.title(), "Certification in Python");
        assert_eq!(record.title_folded(), "certification in python");
    }

    #[test]
    fn suggested_file_name_uses_document_file() {
        let record = DocumentRecord::new(
            "Offer Letter - Company XYZ",
            DocumentCategory::Offer,
            "docs/offerletter1.jpg",
            "docs/offerletter1.pdf",
        );
        assert_eq!(record.suggested_file_name(), "offerletter1.pdf");
    }

    #[test]
    fn suggested_file_name_falls_back_to_title() {
        let record = DocumentRecord::new("Untitled", DocumentCategory::Offer, "a.jpg", "");
        assert_eq!(record.suggested_file_name(), "Untitled");
    }
}

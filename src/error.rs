// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Open(String),
}

/// Failures while reading a catalog manifest.
/// Used to provide user-friendly, localized warning messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Manifest is not valid TOML or misses a required field
    Parse(String),

    /// A document declares a category other than `certification` or `offer`
    UnknownCategory(String),

    /// Manifest parsed but lists no documents
    Empty,
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Parse(_) => "notification-catalog-parse-error",
            CatalogError::UnknownCategory(_) => "notification-catalog-category-error",
            CatalogError::Empty => "notification-catalog-empty",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "Invalid manifest: {}", msg),
            CatalogError::UnknownCategory(category) => {
                write!(f, "Unknown document category: {}", category)
            }
            CatalogError::Empty => write!(f, "Manifest lists no documents"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Open(e) => write!(f, "Open Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for document building.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// Result alias used throughout Sideload.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Sideload operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates the error for a document root lacking all of `data`,
    /// `errors`, and `meta`.
    #[must_use]
    pub fn invalid_document_root() -> Self {
        Self::new(ErrorKind::InvalidRootStructure(
            "document must contain at least one of these members: data, errors, meta".to_string(),
        ))
    }

    /// Creates the error for a relationship object lacking all of `data`,
    /// `meta`, and `links`.
    #[must_use]
    pub fn invalid_relationship(name: &str) -> Self {
        Self::new(ErrorKind::InvalidRootStructure(format!(
            "relationship `{name}` must contain at least one of these members: data, meta, links"
        )))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Json(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The document root or a relationship object lacked all of its
    /// required members. Raised before and during building; the build
    /// aborts on the first violation with no partial document.
    #[error("invalid root structure: {0}")]
    InvalidRootStructure(String),

    /// Malformed JSON text, surfaced unmodified from the decoder.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

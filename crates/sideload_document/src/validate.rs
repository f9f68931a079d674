//! Structural pre-checks.
//!
//! Deliberately shallow: the builder tolerates almost anything, but a
//! document root without `data`, `errors`, or `meta`, or a relationship
//! object without `data`, `meta`, or `links`, is malformed enough that the
//! whole build aborts.

use serde_json::Value;

use sideload_foundation::{Error, Result};

/// Checks the document root before any resource construction.
pub(crate) fn validate_root(root: &Value) -> Result<()> {
    let present = root
        .as_object()
        .is_some_and(|map| ["data", "errors", "meta"].iter().any(|k| map.contains_key(*k)));
    if present {
        Ok(())
    } else {
        Err(Error::invalid_document_root())
    }
}

/// Checks one relationship object during pass 2.
pub(crate) fn validate_relationship(name: &str, relationship: &Value) -> Result<()> {
    let present = relationship
        .as_object()
        .is_some_and(|map| ["data", "meta", "links"].iter().any(|k| map.contains_key(*k)));
    if present {
        Ok(())
    } else {
        Err(Error::invalid_relationship(name))
    }
}

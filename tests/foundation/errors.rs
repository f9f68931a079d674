//! Integration tests for error construction and display.

use sideload_foundation::{Error, ErrorKind};

// =============================================================================
// Structural Errors
// =============================================================================

#[test]
fn document_root_error_lists_required_members() {
    let err = Error::invalid_document_root();
    let msg = format!("{err}");

    assert!(msg.starts_with("invalid root structure:"));
    assert!(msg.contains("data"));
    assert!(msg.contains("errors"));
    assert!(msg.contains("meta"));
}

#[test]
fn relationship_error_names_the_offender() {
    let err = Error::invalid_relationship("comments");
    let msg = format!("{err}");

    assert!(msg.contains("`comments`"));
    assert!(msg.contains("data"));
    assert!(msg.contains("meta"));
    assert!(msg.contains("links"));
}

#[test]
fn kinds_are_matchable() {
    let err = Error::invalid_document_root();
    assert!(matches!(err.kind, ErrorKind::InvalidRootStructure(_)));
}

// =============================================================================
// Decoder Passthrough
// =============================================================================

#[test]
fn decoder_errors_convert_transparently() {
    let decode_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
    let original = decode_err.to_string();

    let err: Error = decode_err.into();
    assert!(matches!(err.kind, ErrorKind::Json(_)));
    assert_eq!(format!("{err}"), original);
}

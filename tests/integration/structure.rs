//! Structural validation and error documents.

use serde_json::json;
use sideload_document::{build, parse};
use sideload_foundation::ErrorKind;

// =============================================================================
// Root Validation
// =============================================================================

#[test]
fn root_without_data_errors_or_meta_is_rejected() {
    let err = parse(r#"{ "jsonapi": { "version": "1" } }"#).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidRootStructure(_)));
}

#[test]
fn empty_data_array_is_accepted() {
    let doc = build(&json!({"data": []})).unwrap();
    assert_eq!(doc.data().as_many(), Some(&[][..]));
    assert_eq!(doc.resource_count(), 0);
}

#[test]
fn single_data_object_is_accepted() {
    let doc = build(&json!({"data": {"type": "mvp", "id": "1"}})).unwrap();
    assert!(doc.data().as_one().is_some());
}

#[test]
fn no_partial_document_on_failure() {
    // The second article's relationship is malformed; the whole build fails.
    let result = build(&json!({
        "data": [
            {
                "type": "articles",
                "id": "1",
                "relationships": {"author": {"data": {"type": "people", "id": "9"}}}
            },
            {
                "type": "articles",
                "id": "2",
                "relationships": {"author": {}}
            }
        ]
    }));
    assert!(result.is_err());
}

// =============================================================================
// Error Documents
// =============================================================================

#[test]
fn supports_errors_when_present() {
    let doc = parse(
        r#"{
          "errors": [{
            "status": "400",
            "detail": "JSON parse error - Expecting property name at line 1 column 2 (char 1)."
          }]
        }"#,
    )
    .unwrap();

    assert!(doc.data().is_absent());
    let errors = doc.errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["status"], json!("400"));
    assert_eq!(
        errors[0]["detail"],
        json!("JSON parse error - Expecting property name at line 1 column 2 (char 1).")
    );
}

#[test]
fn errors_are_absent_for_data_documents() {
    let doc = build(&json!({"data": []})).unwrap();
    assert!(doc.errors().is_none());
}

// =============================================================================
// Decoder Passthrough
// =============================================================================

#[test]
fn malformed_json_surfaces_the_decoder_error() {
    let err = parse("{ not json").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Json(_)));
}

//! Integration tests for schema inference.

use sideload_document::SchemaRegistry;

// =============================================================================
// Registration
// =============================================================================

#[test]
fn fields_accumulate_across_resources_of_a_type() {
    let mut registry = SchemaRegistry::new();
    registry.register_fields("articles", ["id", "type", "title"]);
    registry.register_fields("articles", ["id", "type", "subtitle"]);

    let schema = registry.schema("articles").unwrap();
    assert!(schema.contains("title"));
    assert!(schema.contains("subtitle"));
    assert_eq!(schema.len(), 4);
}

#[test]
fn registering_twice_equals_registering_once() {
    let mut once = SchemaRegistry::new();
    once.register_fields("people", ["first-name"]);

    let mut twice = SchemaRegistry::new();
    twice.register_fields("people", ["first-name"]);
    twice.register_fields("people", ["first-name"]);

    assert_eq!(
        once.schema("people").unwrap().len(),
        twice.schema("people").unwrap().len()
    );
}

#[test]
fn names_are_normalized_on_registration() {
    let mut registry = SchemaRegistry::new();
    registry.register_fields("people", ["first-name", "lastName"]);

    let schema = registry.schema("people").unwrap();
    assert!(schema.contains("first_name"));
    assert!(schema.contains("last_name"));
    assert!(!schema.contains("lastName"));
}

#[test]
fn unknown_types_have_no_schema() {
    let registry = SchemaRegistry::new();
    assert!(registry.schema("articles").is_none());
    assert!(registry.is_empty());
}

// =============================================================================
// Inference During Builds
// =============================================================================

#[test]
fn builds_infer_schemas_from_every_occurrence() {
    let doc = sideload_document::build(&serde_json::json!({
        "data": [
            {"type": "articles", "id": "1", "attributes": {"title": "a"}},
            {"type": "articles", "id": "2", "attributes": {"subtitle": "b"}}
        ]
    }))
    .unwrap();

    let schema = doc.schema("articles").unwrap();
    assert!(schema.contains("id"));
    assert!(schema.contains("type"));
    assert!(schema.contains("title"));
    assert!(schema.contains("subtitle"));
}

#[test]
fn independent_builds_do_not_share_schemas() {
    let a = sideload_document::build(&serde_json::json!({
        "data": {"type": "things", "id": "1", "attributes": {"alpha": 1}}
    }))
    .unwrap();
    let b = sideload_document::build(&serde_json::json!({
        "data": {"type": "things", "id": "1", "attributes": {"beta": 2}}
    }))
    .unwrap();

    assert!(a.schema("things").unwrap().contains("alpha"));
    assert!(!a.schema("things").unwrap().contains("beta"));
    assert!(b.schema("things").unwrap().contains("beta"));
    assert!(!b.schema("things").unwrap().contains("alpha"));
}

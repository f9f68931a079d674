//! The canonical articles/comments/people document from jsonapi.org.

use serde_json::{Value, json};
use sideload_document::{Document, parse};
use sideload_foundation::{FieldValue, ResourceId};

fn doc() -> Document {
    parse(include_str!("../fixtures/articles.json")).unwrap()
}

fn first_article(doc: &Document) -> ResourceId {
    doc.data().as_many().unwrap()[0]
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn crosses_arrays_and_fields_of_objects() {
    let doc = doc();

    let article = first_article(&doc);
    let comments = doc.related(article, "comments").unwrap().as_many().unwrap();
    let author = doc
        .related(comments[1], "author")
        .unwrap()
        .as_one()
        .unwrap();

    assert_eq!(doc.resource(author).attr("last_name"), Some(&json!("Gebhardt")));
}

#[test]
fn round_trips_every_resource_hash() {
    let doc = doc();
    let root: Value = serde_json::from_str(include_str!("../fixtures/articles.json")).unwrap();

    let included = root["included"].as_array().unwrap().iter();
    let primary = root["data"].as_array().unwrap().iter();
    for hash in included.chain(primary) {
        let rid = doc
            .find(hash["type"].as_str().unwrap(), hash["id"].as_str().unwrap())
            .unwrap();
        let resource = doc.resource(rid);

        if let Some(attrs) = hash["attributes"].as_object() {
            for (name, value) in attrs {
                let ident = sideload_foundation::member_ident(name);
                assert_eq!(resource.attr(&ident), Some(value));
            }
        }
        if let Some(rels) = hash["relationships"].as_object() {
            for name in rels.keys() {
                let ident = sideload_foundation::member_ident(name);
                assert!(resource.linkage(&ident).is_some());
            }
        }
    }
}

// =============================================================================
// Side Tables
// =============================================================================

#[test]
fn reads_relationship_links() {
    let doc = doc();

    let article = first_article(&doc);
    let comments = doc
        .get(article, "comments")
        .and_then(FieldValue::as_linkage)
        .unwrap();

    assert_eq!(
        doc.rel_links(comments).unwrap()["related"],
        json!("http://example.com/articles/1/comments")
    );
}

#[test]
fn reads_object_links() {
    let doc = doc();

    let article = first_article(&doc);
    let author = doc.related(article, "author").unwrap().as_one().unwrap();

    assert_eq!(
        doc.links(author).unwrap()["self"],
        json!("http://example.com/people/9")
    );
}

#[test]
fn reads_links_at_the_root() {
    let doc = doc();

    assert_eq!(
        doc.links(doc.data_id()).unwrap()["self"],
        json!("http://example.com/articles")
    );
}

#[test]
fn reads_meta_at_the_root() {
    let doc = doc();

    assert_eq!(
        doc.meta(doc.data_id()).unwrap()["from"],
        json!("http://jsonapi.org")
    );
}

#[test]
fn gives_access_to_data_through_the_original_key() {
    let doc = doc();

    let person = doc.find("people", "9").unwrap();
    let keys = doc.original_keys(person).unwrap();

    assert_eq!(keys["first-name"], FieldValue::from(json!("Dan")));
}

#[test]
fn includes_resource_links_on_the_data_object() {
    let doc = doc();

    let article = first_article(&doc);
    assert_eq!(
        doc.resource(article).attr("links").unwrap()["self"],
        json!("http://example.com/articles/1")
    );
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn finds_objects_by_type_and_id() {
    let doc = doc();

    let comment = doc.find("comments", "5").unwrap();
    assert_eq!(doc.resource(comment).attr("body"), Some(&json!("First!")));
}

#[test]
fn finds_all_objects_given_a_type() {
    let doc = doc();

    assert_eq!(doc.find_all("comments").count(), 2);
}

#[test]
fn find_all_follows_first_appearance_order() {
    let doc = doc();

    let ids: Vec<_> = doc
        .find_all("comments")
        .map(|rid| doc.resource(rid).id().to_string())
        .collect();
    assert_eq!(ids, ["5", "12"]);
}

#[test]
fn dangling_references_materialize_as_stubs() {
    let doc = doc();

    // Comment 5's author is people/2, which appears nowhere else.
    let stub = doc.find("people", "2").unwrap();
    assert!(doc.resource(stub).is_stub());
    assert_eq!(doc.find_all("people").count(), 2);
}

// =============================================================================
// Inferred Schemas
// =============================================================================

#[test]
fn infers_one_schema_per_type() {
    let doc = doc();

    let people = doc.schema("people").unwrap();
    assert!(people.contains("first_name"));
    assert!(people.contains("twitter"));
    assert!(people.contains("id"));

    let articles = doc.schema("articles").unwrap();
    assert!(articles.contains("title"));
    assert!(articles.contains("author"));
    assert!(articles.contains("comments"));
}

//! The immutable query view over a built graph.

use std::collections::HashMap;

use serde_json::Value;

use sideload_foundation::{FieldValue, LinkageId, ResourceId, Result};

use crate::builder::GraphBuilder;
use crate::linkage::{GraphKey, Linkage, LinkageStore};
use crate::registry::ObjectRegistry;
use crate::resource::Resource;
use crate::schema::{Schema, SchemaRegistry};
use crate::tables::SideTables;

/// Decodes JSON text and builds the document graph.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON, if the document root
/// lacks all of `data`, `errors`, and `meta`, or if a relationship object
/// lacks all of `data`, `meta`, and `links`.
///
/// # Examples
///
/// ```
/// let doc = sideload_document::parse(r#"{"data": {"type": "articles", "id": "1"}}"#)?;
/// assert!(doc.find("articles", "1").is_some());
/// # Ok::<(), sideload_foundation::Error>(())
/// ```
pub fn parse(json: &str) -> Result<Document> {
    let root: Value = serde_json::from_str(json)?;
    build(&root)
}

/// Builds the document graph from an already-decoded value tree.
///
/// # Errors
///
/// Returns an error if the document root lacks all of `data`, `errors`,
/// and `meta`, or if a relationship object lacks all of `data`, `meta`,
/// and `links`.
pub fn build(root: &Value) -> Result<Document> {
    GraphBuilder::build(root)
}

/// Immutable result of materializing one JSON:API document.
///
/// Owns the object registry, the inferred schemas, the linkage arena, and
/// the side tables produced by one build. Everything it hands out is a
/// handle or a borrow; nothing can be modified after construction.
#[derive(Clone, Debug)]
pub struct Document {
    schemas: SchemaRegistry,
    objects: ObjectRegistry,
    linkages: LinkageStore,
    tables: SideTables,
    data: LinkageId,
    errors: Option<Vec<Value>>,
}

impl Document {
    pub(crate) fn from_parts(
        schemas: SchemaRegistry,
        objects: ObjectRegistry,
        linkages: LinkageStore,
        tables: SideTables,
        data: LinkageId,
        errors: Option<Vec<Value>>,
    ) -> Self {
        Self {
            schemas,
            objects,
            linkages,
            tables,
            data,
            errors,
        }
    }

    /// Returns the top-level `data` value: absent, a single resource, or an
    /// ordered list, mirroring the input shape.
    #[must_use]
    pub fn data(&self) -> &Linkage {
        self.linkages.get(self.data)
    }

    /// Returns the identity key of the top-level `data` value, under which
    /// the root `links` and `meta` are stored.
    #[must_use]
    pub fn data_id(&self) -> LinkageId {
        self.data
    }

    /// Returns the root `errors` array verbatim, or `None`.
    #[must_use]
    pub fn errors(&self) -> Option<&[Value]> {
        self.errors.as_deref()
    }

    /// Returns the handle of the resource with the given type and id.
    #[must_use]
    pub fn find(&self, kind: &str, id: &str) -> Option<ResourceId> {
        self.objects.get(kind, id)
    }

    /// Iterates over the handles of all resources of one type, in order of
    /// first appearance. Each call returns a fresh iterator.
    pub fn find_all<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = ResourceId> + 'a {
        self.objects.of_kind(kind)
    }

    /// Iterates over every resource in the document, in order of first
    /// appearance.
    pub fn resources(&self) -> impl Iterator<Item = (ResourceId, &Resource)> {
        self.objects.iter()
    }

    /// Returns the resource behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this document's build.
    #[must_use]
    pub fn resource(&self, id: ResourceId) -> &Resource {
        self.objects.resource(id)
    }

    /// Returns the total number of resources, stubs included.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets a field of a resource by identifier-form name.
    #[must_use]
    pub fn get(&self, resource: ResourceId, field: &str) -> Option<&FieldValue> {
        self.resource(resource).get(field)
    }

    /// Gets a resource's resolved relationship by identifier-form name.
    #[must_use]
    pub fn related(&self, resource: ResourceId, field: &str) -> Option<&Linkage> {
        self.resource(resource)
            .linkage(field)
            .map(|lid| self.linkages.get(lid))
    }

    /// Returns the linkage behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this document's build.
    #[must_use]
    pub fn linkage(&self, id: LinkageId) -> &Linkage {
        self.linkages.get(id)
    }

    /// Looks up a `links` member by identity: a resource's links, or the
    /// root links under [`data_id`](Self::data_id).
    #[must_use]
    pub fn links<K: Into<GraphKey>>(&self, key: K) -> Option<&Value> {
        self.tables.links(self.linkages.key(key.into()))
    }

    /// Looks up a relationship's `links` member by the identity of its
    /// resolved reference.
    #[must_use]
    pub fn rel_links<K: Into<GraphKey>>(&self, key: K) -> Option<&Value> {
        self.tables.rel_links(self.linkages.key(key.into()))
    }

    /// Looks up a `meta` member by identity: a relationship's meta, or the
    /// root meta under [`data_id`](Self::data_id).
    #[must_use]
    pub fn meta<K: Into<GraphKey>>(&self, key: K) -> Option<&Value> {
        self.tables.meta(self.linkages.key(key.into()))
    }

    /// Returns a resource's original member spellings mapped to the same
    /// values as its fields.
    #[must_use]
    pub fn original_keys(&self, resource: ResourceId) -> Option<&HashMap<String, FieldValue>> {
        self.tables.original_keys(resource)
    }

    /// Returns the inferred schema for a resource type.
    #[must_use]
    pub fn schema(&self, kind: &str) -> Option<&Schema> {
        self.schemas.schema(kind)
    }
}

//! Materialized resource objects.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sideload_foundation::{FieldValue, LinkageId};

/// One materialized JSON:API resource object.
///
/// `type` and `id` are set at creation, before any field assignment, and
/// together form the resource's identity within a build. All other data
/// lives in the field map, keyed by identifier-form member name.
/// Relationship fields hold [`LinkageId`] handles; traversal goes through
/// the owning document, which is what allows the graph to contain cycles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Resource {
    kind: Arc<str>,
    id: Arc<str>,
    fields: HashMap<Arc<str>, FieldValue>,
}

impl Resource {
    pub(crate) fn new(kind: Arc<str>, id: Arc<str>) -> Self {
        Self {
            kind,
            id,
            fields: HashMap::new(),
        }
    }

    /// Returns the resource type (the JSON:API `type` member).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the resource id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets a field by its identifier-form name.
    ///
    /// Absence means this resource never carried the member; the field may
    /// still be part of the type's schema via other resources.
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&FieldValue> {
        self.fields.get(ident)
    }

    /// Gets an attribute value by identifier-form name.
    #[must_use]
    pub fn attr(&self, ident: &str) -> Option<&Value> {
        self.get(ident).and_then(FieldValue::as_value)
    }

    /// Gets a relationship's linkage handle by identifier-form name.
    #[must_use]
    pub fn linkage(&self, ident: &str) -> Option<LinkageId> {
        self.get(ident).and_then(FieldValue::as_linkage)
    }

    /// Iterates over the fields present on this resource.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Returns the number of fields present on this resource.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if this resource carries only its `type` and `id`.
    ///
    /// True for targets that were referenced by a relationship but never
    /// appeared in `included` or `data`.
    #[must_use]
    pub fn is_stub(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sets a field, overwriting any earlier value under the same name.
    pub(crate) fn set(&mut self, ident: Arc<str>, value: FieldValue) {
        self.fields.insert(ident, value);
    }
}

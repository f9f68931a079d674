//! Identity-keyed side tables.
//!
//! Links, relationship links, and meta do not belong on the domain objects
//! themselves; they are attached to the graph through maps keyed by
//! [`GraphKey`]. Original member spellings are kept per resource.

use std::collections::HashMap;

use serde_json::Value;

use sideload_foundation::{FieldValue, ResourceId};

use crate::linkage::GraphKey;

/// The auxiliary maps populated while building.
///
/// Keys are expected to be pre-normalized through
/// [`LinkageStore::key`](crate::LinkageStore::key); the document's query
/// methods take care of that.
#[derive(Clone, Debug, Default)]
pub struct SideTables {
    /// Resource-level `links`, plus the root `links` under the `data` key.
    links: HashMap<GraphKey, Value>,
    /// Relationship-level `links`, keyed by resolved linkage.
    rel_links: HashMap<GraphKey, Value>,
    /// Relationship-level `meta`, plus the root `meta` under the `data` key.
    meta: HashMap<GraphKey, Value>,
    /// Original member spelling to value, per resource.
    original_keys: HashMap<ResourceId, HashMap<String, FieldValue>>,
}

impl SideTables {
    /// Creates empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a `links` member by identity.
    #[must_use]
    pub fn links(&self, key: GraphKey) -> Option<&Value> {
        self.links.get(&key)
    }

    /// Looks up a relationship's `links` member by identity.
    #[must_use]
    pub fn rel_links(&self, key: GraphKey) -> Option<&Value> {
        self.rel_links.get(&key)
    }

    /// Looks up a `meta` member by identity.
    #[must_use]
    pub fn meta(&self, key: GraphKey) -> Option<&Value> {
        self.meta.get(&key)
    }

    /// Returns a resource's original member spellings and their values.
    #[must_use]
    pub fn original_keys(&self, resource: ResourceId) -> Option<&HashMap<String, FieldValue>> {
        self.original_keys.get(&resource)
    }

    // Assignment mirrors the source member: writing an absent member clears
    // any earlier entry under the same key.

    pub(crate) fn assign_links(&mut self, key: GraphKey, value: Option<Value>) {
        Self::assign(&mut self.links, key, value);
    }

    pub(crate) fn assign_rel_links(&mut self, key: GraphKey, value: Option<Value>) {
        Self::assign(&mut self.rel_links, key, value);
    }

    pub(crate) fn assign_meta(&mut self, key: GraphKey, value: Option<Value>) {
        Self::assign(&mut self.meta, key, value);
    }

    pub(crate) fn record_original(&mut self, resource: ResourceId, name: &str, value: FieldValue) {
        self.original_keys
            .entry(resource)
            .or_default()
            .insert(name.to_string(), value);
    }

    fn assign(table: &mut HashMap<GraphKey, Value>, key: GraphKey, value: Option<Value>) {
        match value {
            Some(value) => {
                table.insert(key, value);
            }
            None => {
                table.remove(&key);
            }
        }
    }
}

//! The `(type, id)`-keyed resource arena.
//!
//! All resources created during a build live here, in order of first
//! appearance. Relationship fields refer back into the arena by handle, so
//! the registry is the single ownership root of the graph.

// Allow usize to u32 casts - handle allocation checks the bound
#![allow(clippy::cast_possible_truncation)]

use std::collections::HashMap;
use std::sync::Arc;

use sideload_foundation::ResourceId;

use crate::resource::Resource;

/// Owns every resource of one build, keyed by `(type, id)`.
///
/// Construction happens exactly once per identity: a second occurrence of
/// the same `(type, id)` pair returns the existing handle, and its fields
/// are layered onto the same instance by the builder.
#[derive(Clone, Debug, Default)]
pub struct ObjectRegistry {
    /// Arena in insertion order (order of first `get_or_create`).
    resources: Vec<Resource>,
    /// Lookup from type, then id, to handle.
    index: HashMap<Arc<str>, HashMap<Arc<str>, ResourceId>>,
}

impl ObjectRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `(kind, id)`, creating a bare resource if the
    /// pair has not been seen.
    ///
    /// New resources have their type and id set and an empty field map.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` resources are created in one build.
    pub fn get_or_create(&mut self, kind: &str, id: &str) -> ResourceId {
        if let Some(&rid) = self.index.get(kind).and_then(|ids| ids.get(id)) {
            return rid;
        }

        // Reuse the interned kind string when the type has been seen before.
        let kind: Arc<str> = match self.index.get_key_value(kind) {
            Some((existing, _)) => existing.clone(),
            None => Arc::from(kind),
        };
        let id: Arc<str> = Arc::from(id);

        let rid = ResourceId::new(u32::try_from(self.resources.len()).expect("too many resources"));
        self.resources.push(Resource::new(kind.clone(), id.clone()));
        self.index.entry(kind).or_default().insert(id, rid);
        rid
    }

    /// Returns the handle for `(kind, id)` if it exists.
    #[must_use]
    pub fn get(&self, kind: &str, id: &str) -> Option<ResourceId> {
        self.index.get(kind).and_then(|ids| ids.get(id)).copied()
    }

    /// Returns the resource behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this registry.
    #[must_use]
    pub fn resource(&self, id: ResourceId) -> &Resource {
        &self.resources[id.index() as usize]
    }

    pub(crate) fn resource_mut(&mut self, id: ResourceId) -> &mut Resource {
        &mut self.resources[id.index() as usize]
    }

    /// Iterates over all resources in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, &Resource)> {
        self.resources
            .iter()
            .enumerate()
            .map(|(i, r)| (ResourceId::new(i as u32), r))
    }

    /// Iterates over the handles of all resources of one type, in insertion
    /// order.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = ResourceId> + 'a {
        self.iter()
            .filter(move |(_, r)| r.kind() == kind)
            .map(|(rid, _)| rid)
    }

    /// Returns the total number of resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if no resources have been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

//! Resolved relationship references and side-table identity keys.

// Allow usize to u32 casts - handle allocation checks the bound
#![allow(clippy::cast_possible_truncation)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sideload_foundation::{LinkageId, ResourceId};

/// Resolved form of a relationship's `data` member.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Linkage {
    /// A to-one reference.
    One(ResourceId),
    /// A to-many reference, preserving document order.
    Many(Vec<ResourceId>),
    /// The relationship carried no `data` member (or `data: null`).
    ///
    /// Each occurrence gets its own [`LinkageId`], so the relationship's
    /// links and meta still have a unique identity key.
    Absent,
}

impl Linkage {
    /// Attempts to extract a to-one target.
    #[must_use]
    pub const fn as_one(&self) -> Option<ResourceId> {
        match self {
            Self::One(rid) => Some(*rid),
            _ => None,
        }
    }

    /// Attempts to extract a to-many target list.
    #[must_use]
    pub fn as_many(&self) -> Option<&[ResourceId]> {
        match self {
            Self::Many(rids) => Some(rids),
            _ => None,
        }
    }

    /// Returns true if the relationship carried no data.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Iterates over the referenced resources (one, many, or none).
    pub fn resources(&self) -> impl Iterator<Item = ResourceId> + '_ {
        let slice: &[ResourceId] = match self {
            Self::One(rid) => std::slice::from_ref(rid),
            Self::Many(rids) => rids,
            Self::Absent => &[],
        };
        slice.iter().copied()
    }
}

/// Side-table identity key.
///
/// Keys compare by handle, never by the structure they point at: two
/// value-equal reference lists keep distinct keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GraphKey {
    /// Identity of a materialized resource.
    Resource(ResourceId),
    /// Identity of a to-many list or an absent-data sentinel.
    Linkage(LinkageId),
}

impl From<ResourceId> for GraphKey {
    fn from(id: ResourceId) -> Self {
        Self::Resource(id)
    }
}

impl From<LinkageId> for GraphKey {
    fn from(id: LinkageId) -> Self {
        Self::Linkage(id)
    }
}

/// Arena of resolved linkages, one entry per relationship resolution plus
/// one for the top-level `data` value.
#[derive(Clone, Debug, Default)]
pub struct LinkageStore {
    linkages: Vec<Linkage>,
}

impl LinkageStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh handle for a resolved linkage.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` linkages are created in one build.
    pub(crate) fn alloc(&mut self, linkage: Linkage) -> LinkageId {
        let id = LinkageId::new(u32::try_from(self.linkages.len()).expect("too many linkages"));
        self.linkages.push(linkage);
        id
    }

    /// Returns the linkage behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this store.
    #[must_use]
    pub fn get(&self, id: LinkageId) -> &Linkage {
        &self.linkages[id.index() as usize]
    }

    /// Normalizes a side-table key.
    ///
    /// A to-one linkage shares identity with its target resource, so its
    /// key collapses to the resource's key; to-many lists and absent-data
    /// sentinels keep their own identity.
    #[must_use]
    pub fn key(&self, key: GraphKey) -> GraphKey {
        match key {
            GraphKey::Linkage(id) => match self.get(id) {
                Linkage::One(rid) => GraphKey::Resource(*rid),
                Linkage::Many(_) | Linkage::Absent => key,
            },
            GraphKey::Resource(_) => key,
        }
    }

    /// Returns the number of allocated linkages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.linkages.len()
    }

    /// Returns true if nothing has been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.linkages.is_empty()
    }
}

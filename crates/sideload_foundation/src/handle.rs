//! Call-scoped identity handles.
//!
//! Every resource and every resolved relationship reference created during
//! one build is assigned a handle into the arenas owned by that build. Side
//! tables are keyed by handle, so identity never depends on structural
//! equality of the values the handles point at.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identity handle for a materialized resource.
///
/// A `(type, id)` pair maps to exactly one `ResourceId` within a build.
/// Handles are only meaningful together with the document that produced
/// them; they carry no global identity.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResourceId(u32);

impl ResourceId {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw arena index of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({})", self.0)
    }
}

/// Identity handle for a resolved relationship reference.
///
/// One `LinkageId` is allocated per resolved relationship (and one for the
/// top-level `data` value), so two structurally equal reference lists still
/// have distinct identities.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkageId(u32);

impl LinkageId {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw arena index of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LinkageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkageId({})", self.0)
    }
}

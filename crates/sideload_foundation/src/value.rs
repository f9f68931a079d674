//! Field values carried by materialized resources.

use serde_json::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::handle::LinkageId;

/// A single field on a materialized resource.
///
/// Attributes keep the decoded JSON value as-is; relationships hold a
/// handle to their resolved linkage, never the target itself. Storing
/// handles rather than owned targets is what permits reference cycles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldValue {
    /// A decoded attribute value.
    Value(Value),
    /// A resolved relationship reference.
    Linkage(LinkageId),
}

impl FieldValue {
    /// Attempts to extract an attribute value.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            Self::Linkage(_) => None,
        }
    }

    /// Attempts to extract a linkage handle.
    #[must_use]
    pub const fn as_linkage(&self) -> Option<LinkageId> {
        match self {
            Self::Linkage(id) => Some(*id),
            Self::Value(_) => None,
        }
    }

    /// Returns true if this field is a resolved relationship.
    #[must_use]
    pub const fn is_linkage(&self) -> bool {
        matches!(self, Self::Linkage(_))
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<LinkageId> for FieldValue {
    fn from(id: LinkageId) -> Self {
        Self::Linkage(id)
    }
}

//! Inferred schemas, one per resource type.
//!
//! Nothing is declared up front: a type's schema is the accumulating set of
//! field identifiers observed across every resource of that type in one
//! document. Schemas only ever grow within a build.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use sideload_foundation::NameTable;

/// Inferred field set for one resource type.
///
/// Contains the identifier form of every attribute and relationship name
/// seen on resources of this type, plus the implicit `id` and `type`.
/// Membership says a field is *known* for the type; any given resource may
/// still omit it.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: HashSet<Arc<str>>,
}

impl Schema {
    /// Checks whether a field identifier is known for this type.
    #[must_use]
    pub fn contains(&self, ident: &str) -> bool {
        self.fields.contains(ident)
    }

    /// Iterates over the known field identifiers, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(AsRef::as_ref)
    }

    /// Returns the number of known field identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Per-build store of inferred schemas.
///
/// Owns the build's [`NameTable`], so every member name flows through one
/// normalization cache. Never process-wide: two unrelated documents may
/// define divergent schemas for the same type name.
#[derive(Clone, Debug, Default)]
pub struct SchemaRegistry {
    names: NameTable,
    schemas: HashMap<Arc<str>, Schema>,
}

impl SchemaRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the interned identifier form of a member name.
    pub fn ident(&mut self, original: &str) -> Arc<str> {
        self.names.ident(original)
    }

    /// Registers member names for a resource type.
    ///
    /// Each name is normalized to identifier form and added to the type's
    /// schema if absent. Registering a known field is a no-op, so repeated
    /// resources of one type are harmless.
    pub fn register_fields<'a, I>(&mut self, kind: &str, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let kind = self.names.intern(kind);
        let schema = self.schemas.entry(kind).or_default();
        for name in names {
            let ident = self.names.ident(name);
            schema.fields.insert(ident);
        }
    }

    /// Gets the inferred schema for a resource type.
    #[must_use]
    pub fn schema(&self, kind: &str) -> Option<&Schema> {
        self.schemas.get(kind)
    }

    /// Returns the number of types with an inferred schema.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if no types have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

//! Member-name normalization and interning.
//!
//! JSON:API member names arrive in whatever casing the producer chose
//! (`last-name`, `lastName`, `HTMLPage`). Field maps and schemas use the
//! normalized snake_case identifier form; the original spelling is kept in
//! the original-keys side table. Normalized names are interned per build so
//! repeated members share one allocation and are normalized once.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Normalizes a member name to snake_case identifier form.
///
/// Rules, applied in one pass:
/// - an uppercase run followed by a capitalized word splits before the last
///   capital (`HTMLPage` -> `html_page`),
/// - a lowercase letter or digit followed by a capital splits between them
///   (`lastName` -> `last_name`, `a1B` -> `a1_b`),
/// - `-` maps to `_`,
/// - everything is lowercased.
///
/// The same input always yields the same output, within and across builds.
#[must_use]
pub fn member_ident(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            out.push('_');
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase()
                    && chars.get(i + 1).is_some_and(char::is_ascii_lowercase));
            if boundary {
                out.push('_');
            }
        }
        for lower in c.to_lowercase() {
            out.push(lower);
        }
    }

    out
}

/// Per-build intern table for member names.
///
/// Maps original member names to their interned identifier form and
/// deduplicates arbitrary name strings. Not thread-safe; each build owns
/// its own table.
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    /// Interned strings (identifiers, type names, originals).
    strings: HashSet<Arc<str>>,
    /// Cache from original member name to its identifier form.
    idents: HashMap<Arc<str>, Arc<str>>,
}

impl NameTable {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a string, returning a shared handle to it.
    pub fn intern(&mut self, s: &str) -> Arc<str> {
        if let Some(existing) = self.strings.get(s) {
            return existing.clone();
        }
        let arc: Arc<str> = s.into();
        self.strings.insert(arc.clone());
        arc
    }

    /// Returns the interned identifier form of a member name.
    ///
    /// Normalization runs once per distinct original name; later calls hit
    /// the cache.
    pub fn ident(&mut self, original: &str) -> Arc<str> {
        if let Some(ident) = self.idents.get(original) {
            return ident.clone();
        }
        let ident = self.intern(&member_ident(original));
        let key = self.intern(original);
        self.idents.insert(key, ident.clone());
        ident
    }

    /// Returns the number of interned strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

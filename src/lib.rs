//! Sideload - JSON:API document materializer
//!
//! This crate re-exports both layers of the Sideload system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: sideload_document   — registries, two-pass builder, side tables, Document
//! Layer 0: sideload_foundation — identity handles, member names, field values, errors
//! ```

pub use sideload_document as document;
pub use sideload_foundation as foundation;

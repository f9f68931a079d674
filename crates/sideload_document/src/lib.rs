//! Document graph construction and querying for Sideload.
//!
//! This crate provides:
//! - [`SchemaRegistry`] / [`Schema`] - Per-build inferred field sets
//! - [`ObjectRegistry`] - `(type, id)`-keyed resource arena
//! - [`Linkage`] / [`LinkageStore`] / [`GraphKey`] - Resolved references and identity keys
//! - [`SideTables`] - Identity-keyed links, meta, and original-keys maps
//! - [`Document`] - Immutable query view, with [`parse`] / [`build`] entry points

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod builder;
mod document;
mod linkage;
mod registry;
mod resource;
mod schema;
mod tables;
mod validate;

pub use document::{Document, build, parse};
pub use linkage::{GraphKey, Linkage, LinkageStore};
pub use registry::ObjectRegistry;
pub use resource::Resource;
pub use schema::{Schema, SchemaRegistry};
pub use tables::SideTables;

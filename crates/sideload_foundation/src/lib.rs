//! Core handles, member names, field values, and errors for Sideload.
//!
//! This crate provides:
//! - [`ResourceId`] / [`LinkageId`] - Call-scoped identity handles
//! - [`NameTable`] - Member-name normalization and interning
//! - [`FieldValue`] - Decoded attributes and resolved references
//! - [`Error`] - Error types for document building

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod handle;
mod name;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use handle::{LinkageId, ResourceId};
pub use name::{NameTable, member_ident};
pub use value::FieldValue;

//! # datapack-resource — Resource Descriptor Validation
//!
//! Decides whether a raw resource descriptor is well formed and, if so,
//! builds an immutable [`Resource`] view over it.
//!
//! - [`path`] — path shape, URL vs relative classification, and the
//!   consistency rule for multi-path resources.
//! - [`resource`] — the [`Resource`] view and its content sum type.
//! - [`validate`] — the [`ResourceValidator`] seam with its strict and
//!   unchecked implementations.
//!
//! ## Crate Policy
//!
//! - Depends only on `datapack-core` internally.
//! - Validation is a pure function of its input: no shared state, no I/O.

pub mod path;
pub mod resource;
pub mod validate;

pub use path::{classify, parse_paths, PathKind, ResourcePaths};
pub use resource::{DataKind, DataValue, Resource, ResourceContent};
pub use validate::{validator_for, ResourceValidator, StrictValidator, UncheckedValidator};

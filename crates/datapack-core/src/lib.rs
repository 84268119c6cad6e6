//! # datapack-core — Foundational Types for Data Package Descriptors
//!
//! Leaf crate of the workspace. It defines the raw descriptor
//! representation, the validated [`ResourceName`] newtype, the
//! [`ValidationPolicy`] switch, and the error taxonomy shared by the
//! resource validator and the package aggregate.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `datapack-*` crates.
//! - No I/O. Every function is a pure computation over in-memory values.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod descriptor;
pub mod error;
pub mod name;
pub mod policy;

// Re-export primary types for ergonomic imports.
pub use descriptor::{has_property, json_type_name, property, RawDescriptor};
pub use error::{ErrorKind, PathViolation, ValidationError};
pub use name::{is_valid_name, ResourceName};
pub use policy::{UnknownPolicy, ValidationPolicy};

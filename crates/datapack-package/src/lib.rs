//! # datapack-package — Data Package Aggregate
//!
//! Owns the ordered list of validated resources of a data package and keeps
//! the package descriptor's `resources` array in sync with it.
//!
//! - [`package`] — [`Package`]: construction, lookup, add/remove.
//! - [`reader`] — byte/stream boundary feeding [`Package::from_descriptor`].
//! - [`error`] — [`PackageError`].
//!
//! Resource validation is injected as an `Arc<dyn ResourceValidator>`, so a
//! strict or unchecked policy can be chosen without touching the aggregate.
//!
//! ## Crate Policy
//!
//! - Depends on `datapack-core` and `datapack-resource` internally.
//! - Fetching descriptors from files or URLs and reading resource contents
//!   are left to callers.

pub mod error;
pub mod package;
pub mod reader;

pub use error::PackageError;
pub use package::Package;

pub use datapack_core::{ErrorKind, RawDescriptor, ValidationError, ValidationPolicy};
pub use datapack_resource::{
    validator_for, DataKind, DataValue, PathKind, Resource, ResourceContent, ResourcePaths,
    ResourceValidator, StrictValidator, UncheckedValidator,
};

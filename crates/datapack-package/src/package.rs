//! # Package Aggregate
//!
//! A [`Package`] owns an ordered list of validated resources together with
//! the raw package descriptor they came from.
//!
//! ## Invariant
//!
//! After construction and after every mutation, `descriptor["resources"]` is
//! exactly the ordered re-serialization of the resource list. Mutations
//! rebuild the whole array from the list rather than patching it, so the two
//! can never drift apart. No other descriptor key is touched.
//!
//! ## Concurrency
//!
//! There is no internal locking. Shared instances must have their `add` and
//! `remove` calls serialized by the caller; `&self` methods are safe to call
//! concurrently on an unmutated instance (the type is `Send + Sync`).

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use datapack_core::descriptor::RESOURCES_PROP;
use datapack_core::{json_type_name, property, RawDescriptor, ValidationPolicy};
use datapack_resource::{validator_for, Resource, ResourceValidator};

use crate::error::PackageError;

/// A data package: an ordered resource list plus its backing descriptor.
#[derive(Debug, Clone, Default)]
pub struct Package {
    resources: Vec<Resource>,
    descriptor: RawDescriptor,
    validator: Option<Arc<dyn ResourceValidator>>,
}

impl Package {
    /// An empty package that validates added resources with `validator`.
    ///
    /// The descriptor starts as `{"resources": []}`.
    pub fn new(validator: Arc<dyn ResourceValidator>) -> Self {
        let mut package = Self {
            resources: Vec::new(),
            descriptor: RawDescriptor::new(),
            validator: Some(validator),
        };
        package.sync_descriptor();
        package
    }

    /// Build a package from a descriptor, validating every resource entry.
    ///
    /// Package-level keys other than `resources` are kept as they are and are
    /// not validated.
    ///
    /// # Errors
    ///
    /// - [`PackageError::MissingResources`] if `resources` is absent, not an
    ///   array, or empty.
    /// - [`PackageError::ResourceNotObject`] for the first non-object entry.
    /// - [`PackageError::InvalidResource`] for the first entry the validator
    ///   rejects.
    pub fn from_descriptor(
        descriptor: RawDescriptor,
        validator: Arc<dyn ResourceValidator>,
    ) -> Result<Self, PackageError> {
        let entries = match property(&descriptor, RESOURCES_PROP) {
            Some(Value::Array(entries)) if !entries.is_empty() => entries,
            _ => return Err(PackageError::MissingResources),
        };

        let mut resources = Vec::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let Value::Object(raw) = entry else {
                return Err(PackageError::ResourceNotObject {
                    position,
                    found: json_type_name(entry),
                });
            };
            let resource = validator
                .validate(raw.clone())
                .map_err(|source| PackageError::InvalidResource { position, source })?;
            resources.push(resource);
        }

        tracing::debug!(
            resources = resources.len(),
            policy = %validator.policy(),
            "package built from descriptor"
        );

        Ok(Self {
            resources,
            descriptor,
            validator: Some(validator),
        })
    }

    /// [`Package::from_descriptor`] with the strict validator.
    ///
    /// # Errors
    ///
    /// See [`Package::from_descriptor`].
    pub fn from_descriptor_strict(descriptor: RawDescriptor) -> Result<Self, PackageError> {
        Self::from_descriptor(descriptor, validator_for(ValidationPolicy::Strict))
    }

    /// Whether `descriptor` would build a package with `validator`.
    pub fn valid(descriptor: &RawDescriptor, validator: Arc<dyn ResourceValidator>) -> bool {
        Self::from_descriptor(descriptor.clone(), validator).is_ok()
    }

    /// [`Package::valid`] with the strict validator.
    pub fn valid_strict(descriptor: &RawDescriptor) -> bool {
        Self::valid(descriptor, validator_for(ValidationPolicy::Strict))
    }

    /// The first resource named `name`, if any.
    pub fn get_resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name() == name)
    }

    /// Validate `descriptor` and append it as a new resource.
    ///
    /// # Errors
    ///
    /// - [`PackageError::NoValidator`] on a default-constructed package.
    /// - [`PackageError::InvalidResource`] if the validator rejects the
    ///   descriptor; the package is left unchanged.
    pub fn add_resource(&mut self, descriptor: RawDescriptor) -> Result<(), PackageError> {
        let validator = self.validator.as_ref().ok_or(PackageError::NoValidator)?;
        let position = self.resources.len();
        let resource = validator
            .validate(descriptor)
            .map_err(|source| PackageError::InvalidResource { position, source })?;

        tracing::debug!(name = resource.name(), position, "resource added");
        self.resources.push(resource);
        self.sync_descriptor();
        Ok(())
    }

    /// Remove the first resource named `name` and return it.
    ///
    /// A missing name is a no-op, not an error.
    pub fn remove_resource(&mut self, name: &str) -> Option<Resource> {
        let index = self.resources.iter().position(|r| r.name() == name);
        let removed = index.map(|index| self.resources.remove(index));

        match &removed {
            Some(_) => tracing::debug!(name, "resource removed"),
            None => tracing::trace!(name, "no resource to remove"),
        }
        self.sync_descriptor();
        removed
    }

    /// Resources in descriptor order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Resource names in descriptor order.
    pub fn resource_names(&self) -> Vec<&str> {
        self.resources.iter().map(Resource::name).collect()
    }

    /// Number of resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the package currently holds no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// A copy of the package descriptor.
    pub fn descriptor(&self) -> RawDescriptor {
        self.descriptor.clone()
    }

    /// Whether a validator is configured, i.e. whether `add_resource` can succeed.
    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Policy of the configured validator.
    pub fn policy(&self) -> Option<ValidationPolicy> {
        self.validator.as_ref().map(|v| v.policy())
    }

    /// Rebuild `resources` in the descriptor from the resource list.
    fn sync_descriptor(&mut self) {
        let entries = self
            .resources
            .iter()
            .map(|r| Value::Object(r.descriptor()))
            .collect();
        self.descriptor
            .insert(RESOURCES_PROP.to_string(), Value::Array(entries));
    }
}

impl Serialize for Package {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.descriptor.serialize(serializer)
    }
}

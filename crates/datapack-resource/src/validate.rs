//! # Resource Validation
//!
//! [`ResourceValidator`] is the seam between the package aggregate and the
//! rule set applied to each resource descriptor. Two implementations exist:
//!
//! - [`StrictValidator`] applies every rule and is the default everywhere.
//! - [`UncheckedValidator`] trusts its input, for descriptors that were
//!   already validated (e.g. re-loading a previously serialized package).
//!
//! ## Strict Rule Order
//!
//! The first failure short-circuits; errors are never accumulated.
//!
//! 1. `path` and `data` must not both be set.
//! 2. `name` must be a string matching `[a-z._]+`.
//! 3. `schema`, when set, is an object or a string obeying the path rules.
//! 4. `path`, when set, obeys the path rules (see [`crate::path`]).
//! 5. `data`, when set and `path` is not, is an object, an array of objects,
//!    or a string with a sibling `format`/`mediatype`.
//! 6. Otherwise neither is set, which is an error.
//!
//! A property holding JSON `null` counts as absent throughout.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use datapack_core::descriptor::{
    DATA_PROP, FORMAT_PROP, MEDIATYPE_PROP, NAME_PROP, PATH_PROP, SCHEMA_PROP,
};
use datapack_core::{
    has_property, json_type_name, property, RawDescriptor, ResourceName, ValidationError,
    ValidationPolicy,
};

use crate::path::parse_paths;
use crate::resource::{DataKind, Resource, ResourceContent};

/// Turns a raw resource descriptor into a [`Resource`].
pub trait ResourceValidator: fmt::Debug + Send + Sync {
    /// Validate `descriptor` and build the resource view over it.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found.
    fn validate(&self, descriptor: RawDescriptor) -> Result<Resource, ValidationError>;

    /// The policy this validator implements.
    fn policy(&self) -> ValidationPolicy;
}

/// Applies the full resource rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictValidator;

impl ResourceValidator for StrictValidator {
    fn validate(&self, descriptor: RawDescriptor) -> Result<Resource, ValidationError> {
        if has_property(&descriptor, PATH_PROP) && has_property(&descriptor, DATA_PROP) {
            return Err(ValidationError::PathAndDataBothSet);
        }

        let name = ResourceName::from_property(descriptor.get(NAME_PROP))?;

        if let Some(schema) = property(&descriptor, SCHEMA_PROP) {
            validate_schema(schema)?;
        }

        let content = if let Some(path) = property(&descriptor, PATH_PROP) {
            ResourceContent::Paths(parse_paths(path)?)
        } else if let Some(data) = property(&descriptor, DATA_PROP) {
            ResourceContent::Data(parse_data(data, &descriptor)?)
        } else {
            return Err(ValidationError::MissingPathOrData);
        };

        tracing::trace!(name = %name, content = content.label(), "resource validated");
        Ok(Resource::from_parts(descriptor, name.into_inner(), content))
    }

    fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::Strict
    }
}

/// Accepts any descriptor, extracting only its name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UncheckedValidator;

impl ResourceValidator for UncheckedValidator {
    fn validate(&self, descriptor: RawDescriptor) -> Result<Resource, ValidationError> {
        Ok(Resource::unchecked(descriptor))
    }

    fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::Unchecked
    }
}

/// Shared validator instance for a policy.
pub fn validator_for(policy: ValidationPolicy) -> Arc<dyn ResourceValidator> {
    match policy {
        ValidationPolicy::Strict => Arc::new(StrictValidator),
        ValidationPolicy::Unchecked => Arc::new(UncheckedValidator),
    }
}

/// Validate a non-null `schema` property.
///
/// A string must satisfy the path rules; the reference itself is not kept
/// as a resource path. Objects are accepted without inspecting their
/// structure.
fn validate_schema(schema: &Value) -> Result<(), ValidationError> {
    match schema {
        Value::String(_) => parse_paths(schema)
            .map(|_| ())
            .map_err(ValidationError::SchemaPath),
        Value::Object(_) => Ok(()),
        other => Err(ValidationError::SchemaType {
            found: json_type_name(other),
        }),
    }
}

/// Validate a non-null `data` property against its descriptor.
fn parse_data(data: &Value, descriptor: &RawDescriptor) -> Result<DataKind, ValidationError> {
    match data {
        Value::String(_) => {
            if has_property(descriptor, FORMAT_PROP) || has_property(descriptor, MEDIATYPE_PROP) {
                Ok(DataKind::Text)
            } else {
                Err(ValidationError::DataFormatRequired)
            }
        }
        Value::Object(_) => Ok(DataKind::Object),
        Value::Array(items) => match items.iter().find(|item| !item.is_object()) {
            Some(other) => Err(ValidationError::DataShape {
                found: json_type_name(other),
            }),
            None => Ok(DataKind::Records),
        },
        other => Err(ValidationError::DataShape {
            found: json_type_name(other),
        }),
    }
}

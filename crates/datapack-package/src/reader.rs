//! # Descriptor Reading
//!
//! Thin boundary between raw bytes and [`Package::from_descriptor`]: read all
//! input, parse it as a JSON object, then hand it to construction. Blocking;
//! any timeout or cancellation policy belongs to the caller.

use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;

use datapack_core::{json_type_name, ValidationPolicy};
use datapack_resource::{validator_for, ResourceValidator};

use crate::error::PackageError;
use crate::package::Package;

impl Package {
    /// Read a descriptor to the end and build a package from it.
    ///
    /// # Errors
    ///
    /// [`PackageError::Io`] if reading fails, plus everything
    /// [`Package::from_slice`] can return.
    pub fn from_reader<R: Read>(
        mut reader: R,
        validator: Arc<dyn ResourceValidator>,
    ) -> Result<Self, PackageError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        tracing::trace!(bytes = bytes.len(), "descriptor read");
        Self::from_slice(&bytes, validator)
    }

    /// Parse a JSON descriptor and build a package from it.
    ///
    /// # Errors
    ///
    /// [`PackageError::Json`] for malformed JSON,
    /// [`PackageError::NotAnObject`] for a non-object document, plus
    /// everything [`Package::from_descriptor`] can return.
    pub fn from_slice(
        bytes: &[u8],
        validator: Arc<dyn ResourceValidator>,
    ) -> Result<Self, PackageError> {
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(descriptor) => Self::from_descriptor(descriptor, validator),
            other => Err(PackageError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }
}

impl FromStr for Package {
    type Err = PackageError;

    /// Parse with the strict validator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes(), validator_for(ValidationPolicy::Strict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datapack_core::ErrorKind;
    use datapack_resource::UncheckedValidator;

    #[test]
    fn reads_valid_json() {
        let p = Package::from_reader(
            r#"{"resources":[{"name":"res"}]}"#.as_bytes(),
            Arc::new(UncheckedValidator),
        )
        .unwrap();
        assert_eq!(p.resource_names(), vec!["res"]);
    }

    #[test]
    fn rejects_invalid_json() {
        let err = Package::from_reader("{resources}".as_bytes(), Arc::new(UncheckedValidator))
            .unwrap_err();
        assert!(matches!(err, PackageError::Json(_)));
        assert_eq!(err.kind(), ErrorKind::MalformedJson);
    }

    #[test]
    fn rejects_non_object_documents() {
        let err = "[1, 2]".parse::<Package>().unwrap_err();
        assert!(matches!(err, PackageError::NotAnObject { found: "array" }));
        assert_eq!(err.kind(), ErrorKind::MalformedJson);
    }

    #[test]
    fn from_str_is_strict() {
        let p: Package = r#"{"resources":[{"name":"pop","path":"population.csv"}]}"#
            .parse()
            .unwrap();
        assert_eq!(p.policy(), Some(ValidationPolicy::Strict));
        assert!(r#"{"resources":[{"name":"res"}]}"#.parse::<Package>().is_err());
    }
}

//! Package-level errors.

use thiserror::Error;

use datapack_core::{ErrorKind, ValidationError};

/// Failure to build or mutate a [`crate::Package`].
#[derive(Error, Debug)]
pub enum PackageError {
    /// `resources` is absent, null, not an array, or an empty array.
    #[error("resources property is required, with at least one resource")]
    MissingResources,

    /// An element of `resources` is not a JSON object.
    #[error("resources must be JSON objects, got {found} at position {position}")]
    ResourceNotObject {
        /// Zero-based index in the `resources` array.
        position: usize,
        /// JSON type name of the rejected element.
        found: &'static str,
    },

    /// The resource validator rejected an element.
    #[error("invalid resource at position {position}: {source}")]
    InvalidResource {
        /// Zero-based index the resource has (or would have had) in the package.
        position: usize,
        /// The rule violation.
        #[source]
        source: ValidationError,
    },

    /// `add_resource` on a package that has no validator.
    #[error("no resource validator configured; build the package with Package::new or Package::from_descriptor")]
    NoValidator,

    /// Descriptor bytes are not valid JSON.
    #[error("descriptor is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Descriptor JSON is valid but not an object.
    #[error("descriptor must be a JSON object, got {found}")]
    NotAnObject {
        /// JSON type name of the top-level value.
        found: &'static str,
    },

    /// Descriptor bytes could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackageError {
    /// The taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingResources => ErrorKind::MissingResourcesProperty,
            Self::ResourceNotObject { .. } => ErrorKind::InvalidResourceEntry,
            Self::InvalidResource { source, .. } => source.kind(),
            Self::NoValidator => ErrorKind::MisconfiguredAggregate,
            Self::Json(_) | Self::NotAnObject { .. } => ErrorKind::MalformedJson,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// The underlying resource violation, if this error wraps one.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidResource { source, .. } => Some(source),
            _ => None,
        }
    }
}

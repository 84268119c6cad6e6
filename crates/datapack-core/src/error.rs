//! # Error Types — Validation Error Taxonomy
//!
//! Defines the errors raised while validating resource descriptors. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Every failure is an immediate, non-retryable value. Nothing in this
//!   workspace reports a failure by logging it.
//! - Each error maps onto exactly one [`ErrorKind`], so callers can branch on
//!   the class of failure without matching message text.
//! - Path rule failures are a separate [`PathViolation`] value because the
//!   same rules apply to a resource's `path` and to a string `schema`.

use std::fmt;

use thiserror::Error;

/// Coarse classification of every failure the validation engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Both or neither of `path`/`data` are set.
    MutualExclusionViolation,
    /// Resource name missing, not a string, or outside the accepted syntax.
    InvalidName,
    /// Schema is neither a string nor an object, or a string schema fails path rules.
    InvalidSchema,
    /// Path has the wrong shape or breaks a path rule.
    InvalidPath,
    /// Inline data has the wrong shape or lacks `format`/`mediatype`.
    InvalidData,
    /// Package `resources` is absent, not an array, or empty.
    MissingResourcesProperty,
    /// An element of the `resources` array is not a JSON object.
    InvalidResourceEntry,
    /// A mutation was attempted on a package with no validator configured.
    MisconfiguredAggregate,
    /// Descriptor bytes are not a JSON object.
    MalformedJson,
    /// Descriptor bytes could not be read.
    Io,
}

impl ErrorKind {
    /// Stable snake_case label, used in CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MutualExclusionViolation => "mutual_exclusion_violation",
            Self::InvalidName => "invalid_name",
            Self::InvalidSchema => "invalid_schema",
            Self::InvalidPath => "invalid_path",
            Self::InvalidData => "invalid_data",
            Self::MissingResourcesProperty => "missing_resources_property",
            Self::InvalidResourceEntry => "invalid_resource_entry",
            Self::MisconfiguredAggregate => "misconfigured_aggregate",
            Self::MalformedJson => "malformed_json",
            Self::Io => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broken path rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathViolation {
    /// The value is neither a string nor an array of strings.
    #[error("path MUST be a string or an array of strings, got {found}")]
    WrongShape {
        /// JSON type name of the rejected value.
        found: &'static str,
    },

    /// An array was given but holds no entries.
    #[error("path array MUST contain at least one entry")]
    EmptyList,

    /// Absolute filesystem path or a path escaping to its parent.
    #[error("absolute paths (/) and relative parent paths (../) MUST NOT be used: {path}")]
    AbsoluteOrParent {
        /// The offending entry.
        path: String,
    },

    /// A URL whose scheme is not http or https.
    #[error("URLs MUST be fully qualified and use either http or https, got scheme '{scheme}': {path}")]
    UnsupportedScheme {
        /// The offending entry.
        path: String,
        /// The scheme that was found.
        scheme: String,
    },

    /// URLs and relative paths appear in the same list.
    #[error("it is NOT permitted to mix fully qualified URLs and relative paths in a single resource: {path}")]
    MixedKinds {
        /// First entry whose classification differs from the first entry.
        path: String,
    },
}

/// Failure to validate a single resource descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Both `path` and `data` are set.
    #[error("either path or data properties MUST be set (only one of them), found both")]
    PathAndDataBothSet,

    /// Neither `path` nor `data` is set.
    #[error("either path or data properties MUST be set (only one of them), found neither")]
    MissingPathOrData,

    /// No `name` property.
    #[error("resource MUST contain a name property")]
    MissingName,

    /// `name` is present but not a string.
    #[error("resource names MUST be strings, got {found}")]
    NonStringName {
        /// JSON type name of the rejected value.
        found: &'static str,
    },

    /// `name` fails the character-class check.
    #[error("resource names MUST consist only of lowercase letters plus \".\" and \"_\": '{name}'")]
    MalformedName {
        /// The rejected name.
        name: String,
    },

    /// `schema` is neither a string nor an object.
    #[error("resource schema MUST be a string or a JSON schema object, got {found}")]
    SchemaType {
        /// JSON type name of the rejected value.
        found: &'static str,
    },

    /// `schema` is a string that fails the path rules.
    #[error("resource schema reference is not a valid path: {0}")]
    SchemaPath(PathViolation),

    /// `path` fails the path rules.
    #[error("invalid resource path: {0}")]
    Path(#[from] PathViolation),

    /// String `data` without a `format` or `mediatype` sibling.
    #[error("format or mediatype properties MUST be provided for JSON data strings")]
    DataFormatRequired,

    /// `data` is not a string, an object, or an array of objects.
    #[error("data property MUST be either a JSON array of objects, a JSON object, or a JSON string, got {found}")]
    DataShape {
        /// JSON type name of the rejected value.
        found: &'static str,
    },
}

impl ValidationError {
    /// The taxonomy class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PathAndDataBothSet | Self::MissingPathOrData => {
                ErrorKind::MutualExclusionViolation
            }
            Self::MissingName | Self::NonStringName { .. } | Self::MalformedName { .. } => {
                ErrorKind::InvalidName
            }
            Self::SchemaType { .. } | Self::SchemaPath(_) => ErrorKind::InvalidSchema,
            Self::Path(_) => ErrorKind::InvalidPath,
            Self::DataFormatRequired | Self::DataShape { .. } => ErrorKind::InvalidData,
        }
    }
}

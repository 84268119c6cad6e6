//! Validation policy selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which resource validator a package is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Apply every resource rule.
    #[default]
    Strict,
    /// Trust the input; only extract the name when present.
    Unchecked,
}

impl ValidationPolicy {
    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Unchecked => "unchecked",
        }
    }
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised policy label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown validation policy '{0}', expected 'strict' or 'unchecked'")]
pub struct UnknownPolicy(pub String);

impl std::str::FromStr for ValidationPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "unchecked" => Ok(Self::Unchecked),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

//! # Resource Names
//!
//! A resource name is a non-empty string drawn only from lowercase ASCII
//! letters, `.` and `_` (the character class `[a-z._]+`). Digits and `-` are
//! rejected.
//!
//! [`ResourceName`] validates at construction time and again on
//! deserialization, so a value of this type always satisfies the rule.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::json_type_name;
use crate::error::ValidationError;

/// A validated resource name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate and wrap a name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedName`] if the name is empty or
    /// contains a character outside `[a-z._]`.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if is_valid_name(&name) {
            Ok(Self(name))
        } else {
            Err(ValidationError::MalformedName { name })
        }
    }

    /// Validate the raw `name` property of a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingName`] for an absent value,
    /// [`ValidationError::NonStringName`] for a non-string value, and
    /// [`ValidationError::MalformedName`] for a string that fails the syntax.
    pub fn from_property(value: Option<&Value>) -> Result<Self, ValidationError> {
        match value {
            None | Some(Value::Null) => Err(ValidationError::MissingName),
            Some(Value::String(s)) => Self::new(s.as_str()),
            Some(other) => Err(ValidationError::NonStringName {
                found: json_type_name(other),
            }),
        }
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for ResourceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ResourceName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether `name` matches `[a-z._]+` in full.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b == b'.' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_letters_dots_underscores() {
        for name in ["pop", "population.data", "a_b.c", "_", "..."] {
            assert!(ResourceName::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_digits_hyphens_and_uppercase() {
        for name in ["", "pop2020", "my-data", "Pop", "a b", "a/b", "ünï"] {
            let err = ResourceName::new(name).unwrap_err();
            assert_eq!(err, ValidationError::MalformedName { name: name.to_string() });
        }
    }

    #[test]
    fn property_errors_are_distinct() {
        assert_eq!(
            ResourceName::from_property(None).unwrap_err(),
            ValidationError::MissingName
        );
        assert_eq!(
            ResourceName::from_property(Some(&Value::Null)).unwrap_err(),
            ValidationError::MissingName
        );
        assert_eq!(
            ResourceName::from_property(Some(&json!(42))).unwrap_err(),
            ValidationError::NonStringName { found: "number" }
        );
        assert_eq!(
            ResourceName::from_property(Some(&json!("ok"))).unwrap().as_str(),
            "ok"
        );
    }

    #[test]
    fn deserialize_routes_through_validation() {
        let ok: ResourceName = serde_json::from_value(json!("valid_name")).unwrap();
        assert_eq!(ok.to_string(), "valid_name");
        assert!(serde_json::from_value::<ResourceName>(json!("Invalid")).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn class_members_are_valid(name in "[a-z._]{1,24}") {
                prop_assert!(ResourceName::new(name).is_ok());
            }

            #[test]
            fn any_forbidden_char_is_rejected(
                prefix in "[a-z._]{0,8}",
                bad in "[A-Z0-9 /-]",
                suffix in "[a-z._]{0,8}",
            ) {
                let name = format!("{prefix}{bad}{suffix}");
                prop_assert!(ResourceName::new(name).is_err());
            }
        }
    }
}

//! # Raw Descriptors
//!
//! A descriptor is an untyped JSON object with ordered keys. It is the single
//! source of truth for resources and packages: validated views are derived
//! from it and serialization always emits it verbatim.
//!
//! Key order is preserved because `serde_json` is built with its
//! `preserve_order` feature across the workspace.

use serde_json::{Map, Value};

/// An ordered-key JSON object.
pub type RawDescriptor = Map<String, Value>;

/// Package property holding the array of resource descriptors.
pub const RESOURCES_PROP: &str = "resources";
/// Resource name property.
pub const NAME_PROP: &str = "name";
/// Resource path property.
pub const PATH_PROP: &str = "path";
/// Resource inline data property.
pub const DATA_PROP: &str = "data";
/// Resource schema property.
pub const SCHEMA_PROP: &str = "schema";
/// Resource format property.
pub const FORMAT_PROP: &str = "format";
/// Resource media type property.
pub const MEDIATYPE_PROP: &str = "mediatype";

/// Look up a property, treating an explicit JSON `null` as absent.
pub fn property<'a>(descriptor: &'a RawDescriptor, key: &str) -> Option<&'a Value> {
    descriptor.get(key).filter(|v| !v.is_null())
}

/// Whether a property is present and non-null.
pub fn has_property(descriptor: &RawDescriptor, key: &str) -> bool {
    property(descriptor, key).is_some()
}

/// JSON type name of a value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! # Resources
//!
//! A [`Resource`] is a read-only view over a resource descriptor. The
//! descriptor object it was built from is kept verbatim and is what gets
//! serialized; `name` and content are denormalized projections of it.
//! Inline data is not copied out of the descriptor: the projection records
//! only its shape, and [`Resource::data`] borrows the payload.
//!
//! ```text
//! Resource
//! ├── descriptor (RawDescriptor — source of truth)
//! ├── name
//! └── content: ResourceContent
//!     ├── Paths(ResourcePaths)   — "path": "a.csv" | ["a.csv", ...]
//!     └── Data(DataKind)         — "data": "..." | {...} | [{...}, ...]
//! ```
//!
//! `path` and `data` are a single sum type, so a validated resource can never
//! carry both. Only [`Resource::unchecked`] produces a resource without
//! content.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use datapack_core::descriptor::{DATA_PROP, NAME_PROP, SCHEMA_PROP};
use datapack_core::{property, RawDescriptor, ValidationError};

use crate::path::ResourcePaths;
use crate::validate::{ResourceValidator, StrictValidator};

/// Shape of a validated inline payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// A string, interpreted through the sibling `format`/`mediatype`.
    Text,
    /// A single JSON object.
    Object,
    /// An array of JSON objects.
    Records,
}

/// Borrowed view of an inline payload inside its resource descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataValue<'a> {
    /// A string payload.
    Text(&'a str),
    /// A single JSON object.
    Object(&'a RawDescriptor),
    /// An array whose elements are all JSON objects.
    Records(&'a [Value]),
}

impl DataValue<'_> {
    /// Shape of the payload.
    pub fn kind(&self) -> DataKind {
        match self {
            Self::Text(_) => DataKind::Text,
            Self::Object(_) => DataKind::Object,
            Self::Records(_) => DataKind::Records,
        }
    }

    /// Iterate the rows of a records payload. Empty for other shapes.
    pub fn records(&self) -> impl Iterator<Item = &RawDescriptor> {
        let rows: &[Value] = match self {
            Self::Records(rows) => *rows,
            _ => &[],
        };
        rows.iter().filter_map(Value::as_object)
    }

    /// An owned copy of the payload.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text(s) => Value::String((*s).to_string()),
            Self::Object(map) => Value::Object((*map).clone()),
            Self::Records(rows) => Value::Array(rows.to_vec()),
        }
    }
}

/// Where a resource's content lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceContent {
    /// One or more files or URLs.
    Paths(ResourcePaths),
    /// Inline payload, described by its shape.
    Data(DataKind),
}

impl ResourceContent {
    /// Short label: `path` or `data`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paths(_) => "path",
            Self::Data(_) => "data",
        }
    }
}

/// A validated (or explicitly unchecked) data resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    descriptor: RawDescriptor,
    name: String,
    content: Option<ResourceContent>,
}

impl Resource {
    /// Validate a descriptor with the strict rule set.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation found.
    pub fn new(descriptor: RawDescriptor) -> Result<Self, ValidationError> {
        StrictValidator.validate(descriptor)
    }

    /// Wrap a descriptor without validating it.
    ///
    /// The name is taken from a string `name` property when there is one and
    /// is empty otherwise. The result has no content projection and may not
    /// be valid. Only use this for descriptors that were validated before.
    pub fn unchecked(descriptor: RawDescriptor) -> Self {
        let name = descriptor
            .get(NAME_PROP)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self {
            descriptor,
            name,
            content: None,
        }
    }

    pub(crate) fn from_parts(
        descriptor: RawDescriptor,
        name: String,
        content: ResourceContent,
    ) -> Self {
        Self {
            descriptor,
            name,
            content: Some(content),
        }
    }

    /// Resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Content projection; `None` only for unchecked resources.
    pub fn content(&self) -> Option<&ResourceContent> {
        self.content.as_ref()
    }

    /// Paths, when the resource points at files or URLs.
    pub fn paths(&self) -> Option<&ResourcePaths> {
        match &self.content {
            Some(ResourceContent::Paths(paths)) => Some(paths),
            _ => None,
        }
    }

    /// Inline data, borrowed from the descriptor, when the resource carries it.
    pub fn data(&self) -> Option<DataValue<'_>> {
        let Some(ResourceContent::Data(kind)) = &self.content else {
            return None;
        };
        match (kind, property(&self.descriptor, DATA_PROP)?) {
            (DataKind::Text, Value::String(s)) => Some(DataValue::Text(s)),
            (DataKind::Object, Value::Object(map)) => Some(DataValue::Object(map)),
            (DataKind::Records, Value::Array(rows)) => Some(DataValue::Records(rows.as_slice())),
            _ => None,
        }
    }

    /// The raw `schema` property, if set.
    pub fn schema(&self) -> Option<&Value> {
        property(&self.descriptor, SCHEMA_PROP)
    }

    /// A copy of the backing descriptor.
    pub fn descriptor(&self) -> RawDescriptor {
        self.descriptor.clone()
    }

    /// Borrow the backing descriptor.
    pub fn as_descriptor(&self) -> &RawDescriptor {
        &self.descriptor
    }

    /// Unwrap into the backing descriptor.
    pub fn into_descriptor(self) -> RawDescriptor {
        self.descriptor
    }

    /// Whether the backing descriptor passes strict validation.
    pub fn is_valid(&self) -> bool {
        StrictValidator.validate(self.descriptor.clone()).is_ok()
    }
}

impl Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.descriptor.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let descriptor = RawDescriptor::deserialize(deserializer)?;
        Self::new(descriptor).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathKind;
    use serde_json::json;

    fn object(value: Value) -> RawDescriptor {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn projections_for_a_path_resource() {
        let r = Resource::new(object(json!({"name": "pop", "path": "population.csv"}))).unwrap();
        assert_eq!(r.name(), "pop");
        let paths = r.paths().unwrap();
        assert_eq!(paths.entries(), ["population.csv"]);
        assert_eq!(paths.kind(), PathKind::Relative);
        assert!(r.data().is_none());
        assert_eq!(r.content().map(ResourceContent::label), Some("path"));
    }

    #[test]
    fn projections_for_a_data_resource() {
        let r = Resource::new(object(json!({
            "name": "inline",
            "data": [{"a": 1}, {"a": 2}],
        })))
        .unwrap();
        assert!(r.paths().is_none());
        let data = r.data().unwrap();
        assert_eq!(data.kind(), DataKind::Records);
        assert_eq!(data.records().count(), 2);
        assert_eq!(data.to_value(), json!([{"a": 1}, {"a": 2}]));
        assert_eq!(r.content(), Some(&ResourceContent::Data(DataKind::Records)));
    }

    #[test]
    fn data_is_borrowed_from_the_descriptor() {
        let r = Resource::new(object(json!({"name": "inline", "data": {"k": "v"}}))).unwrap();
        let Some(DataValue::Object(view)) = r.data() else {
            panic!("expected an object payload");
        };
        let Some(Value::Object(backing)) = r.as_descriptor().get("data") else {
            panic!("descriptor lost its data");
        };
        assert!(std::ptr::eq(view, backing));
    }

    #[test]
    fn serialization_emits_the_backing_descriptor() {
        let input = json!({
            "name": "pop",
            "path": ["a.csv", "b.csv"],
            "title": "Population",
            "schema": {"fields": [{"name": "year", "type": "integer"}]},
        });
        let r = Resource::new(object(input.clone())).unwrap();
        assert_eq!(serde_json::to_value(&r).unwrap(), input);
        assert_eq!(r.schema(), input.get("schema"));
    }

    #[test]
    fn deserialization_validates() {
        let ok: Resource =
            serde_json::from_value(json!({"name": "ok", "path": "x.csv"})).unwrap();
        assert_eq!(ok.name(), "ok");

        let err = serde_json::from_value::<Resource>(json!({"name": "NotOk", "path": "x.csv"}))
            .unwrap_err();
        assert!(err.to_string().contains("NotOk"));
    }

    #[test]
    fn unchecked_extracts_only_the_name() {
        let r = Resource::unchecked(object(json!({"name": "Whatever", "path": "/abs"})));
        assert_eq!(r.name(), "Whatever");
        assert!(r.content().is_none());
        assert!(!r.is_valid());

        let nameless = Resource::unchecked(object(json!({"name": 3})));
        assert_eq!(nameless.name(), "");
    }

    #[test]
    fn descriptor_accessor_returns_a_copy() {
        let r = Resource::new(object(json!({"name": "pop", "path": "p.csv"}))).unwrap();
        let mut copy = r.descriptor();
        copy.insert("path".to_string(), json!("/tampered"));
        assert_eq!(r.as_descriptor().get("path"), Some(&json!("p.csv")));
        assert!(r.is_valid());
    }
}

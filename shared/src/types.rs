//! Core value and state types
//!
//! `Dynamic` is the loosely-typed representation of configuration and state
//! values; `ResourceState` is the attribute map a managed object's state is
//! written into, optionally checked against a schema.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};
use crate::schema::Schema;

/// A configuration or state value of any type.
///
/// Numbers are always `f64` to match the configuration language. `Unknown`
/// marks values that are not resolved until apply.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dynamic {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Dynamic>),
    Map(HashMap<String, Dynamic>),
    Unknown,
}

const UNKNOWN_SENTINEL: &str = "__unknown__";

impl Serialize for Dynamic {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Dynamic::Null => serializer.serialize_unit(),
            Dynamic::Bool(b) => serializer.serialize_bool(*b),
            Dynamic::Number(n) => serializer.serialize_f64(*n),
            Dynamic::String(s) => serializer.serialize_str(s),
            Dynamic::List(l) => l.serialize(serializer),
            Dynamic::Map(m) => m.serialize(serializer),
            Dynamic::Unknown => serializer.serialize_str(UNKNOWN_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for Dynamic {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct DynamicVisitor;

        impl<'de> Visitor<'de> for DynamicVisitor {
            type Value = Dynamic;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid attribute value")
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Dynamic, E> {
                Ok(Dynamic::Null)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Dynamic, E> {
                Ok(Dynamic::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Dynamic, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Dynamic::deserialize(deserializer)
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Dynamic, E> {
                Ok(Dynamic::Bool(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Dynamic, E> {
                Ok(Dynamic::Number(value as f64))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Dynamic, E> {
                Ok(Dynamic::Number(value as f64))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Dynamic, E> {
                Ok(Dynamic::Number(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Dynamic, E> {
                if value == UNKNOWN_SENTINEL {
                    Ok(Dynamic::Unknown)
                } else {
                    Ok(Dynamic::String(value.to_string()))
                }
            }

            fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<Dynamic, E> {
                if value == UNKNOWN_SENTINEL {
                    Ok(Dynamic::Unknown)
                } else {
                    Ok(Dynamic::String(value))
                }
            }

            fn visit_seq<V>(self, mut seq: V) -> std::result::Result<Dynamic, V::Error>
            where
                V: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Dynamic::List(vec))
            }

            fn visit_map<V>(self, mut map: V) -> std::result::Result<Dynamic, V::Error>
            where
                V: de::MapAccess<'de>,
            {
                let mut values = HashMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Dynamic::Map(values))
            }
        }

        deserializer.deserialize_any(DynamicVisitor)
    }
}

impl Dynamic {
    pub fn is_null(&self) -> bool {
        matches!(self, Dynamic::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Dynamic::Unknown)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Dynamic::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Dynamic::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Dynamic::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Dynamic::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Dynamic]> {
        match self {
            Dynamic::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, Dynamic>> {
        match self {
            Dynamic::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Collect a list or set of strings. Non-string elements render through
    /// their display form, matching how state stores them.
    pub fn as_string_vec(&self) -> Option<Vec<String>> {
        self.as_list().map(|items| {
            items
                .iter()
                .map(|item| match item {
                    Dynamic::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
    }

    pub fn get_attr(&self, name: &str) -> Option<&Dynamic> {
        self.as_map().and_then(|m| m.get(name))
    }

    /// Navigate a path through nested maps and lists.
    pub fn get_path(&self, path: &AttributePath) -> Option<&Dynamic> {
        let mut current = self;
        for step in &path.steps {
            current = match (current, step) {
                (Dynamic::Map(m), AttributePathStep::AttributeName(name)) => m.get(name)?,
                (Dynamic::Map(m), AttributePathStep::ElementKeyString(key)) => m.get(key)?,
                (Dynamic::List(l), AttributePathStep::ElementKeyInt(idx)) => {
                    l.get(*idx as usize)?
                }
                _ => return None,
            };
        }
        Some(current)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::Null => "null",
            Dynamic::Bool(_) => "bool",
            Dynamic::Number(_) => "number",
            Dynamic::String(_) => "string",
            Dynamic::List(_) => "list",
            Dynamic::Map(_) => "map",
            Dynamic::Unknown => "unknown",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Dynamic::Null => serde_json::Value::Null,
            Dynamic::Bool(b) => serde_json::Value::Bool(*b),
            Dynamic::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Dynamic::String(s) => serde_json::Value::String(s.clone()),
            Dynamic::List(l) => serde_json::Value::Array(l.iter().map(Dynamic::to_json).collect()),
            Dynamic::Map(m) => serde_json::Value::Object(
                m.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Dynamic::Unknown => serde_json::Value::String(UNKNOWN_SENTINEL.to_string()),
        }
    }
}

impl fmt::Display for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dynamic::Null => f.write_str("null"),
            Dynamic::Bool(b) => write!(f, "{b}"),
            Dynamic::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Dynamic::String(s) => f.write_str(s),
            Dynamic::List(_) | Dynamic::Map(_) => write!(f, "{}", self.to_json()),
            Dynamic::Unknown => f.write_str(UNKNOWN_SENTINEL),
        }
    }
}

impl From<bool> for Dynamic {
    fn from(value: bool) -> Self {
        Dynamic::Bool(value)
    }
}

impl From<f64> for Dynamic {
    fn from(value: f64) -> Self {
        Dynamic::Number(value)
    }
}

impl From<i64> for Dynamic {
    fn from(value: i64) -> Self {
        Dynamic::Number(value as f64)
    }
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Dynamic::String(value.to_string())
    }
}

impl From<String> for Dynamic {
    fn from(value: String) -> Self {
        Dynamic::String(value)
    }
}

impl From<Vec<Dynamic>> for Dynamic {
    fn from(value: Vec<Dynamic>) -> Self {
        Dynamic::List(value)
    }
}

impl From<HashMap<String, Dynamic>> for Dynamic {
    fn from(value: HashMap<String, Dynamic>) -> Self {
        Dynamic::Map(value)
    }
}

impl From<serde_json::Value> for Dynamic {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Dynamic::Null,
            serde_json::Value::Bool(b) => Dynamic::Bool(b),
            serde_json::Value::Number(n) => Dynamic::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) if s == UNKNOWN_SENTINEL => Dynamic::Unknown,
            serde_json::Value::String(s) => Dynamic::String(s),
            serde_json::Value::Array(items) => {
                Dynamic::List(items.into_iter().map(Dynamic::from).collect())
            }
            serde_json::Value::Object(fields) => Dynamic::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Dynamic::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Path to an attribute within a configuration or state value
#[derive(Debug, Clone, PartialEq)]
pub struct AttributePath {
    pub steps: Vec<AttributePathStep>,
}

impl AttributePath {
    pub fn new(name: &str) -> Self {
        Self {
            steps: vec![AttributePathStep::AttributeName(name.to_string())],
        }
    }

    pub fn root() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn attribute(mut self, name: &str) -> Self {
        self.steps
            .push(AttributePathStep::AttributeName(name.to_string()));
        self
    }

    pub fn index(mut self, idx: i64) -> Self {
        self.steps.push(AttributePathStep::ElementKeyInt(idx));
        self
    }

    pub fn key(mut self, key: &str) -> Self {
        self.steps
            .push(AttributePathStep::ElementKeyString(key.to_string()));
        self
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                AttributePathStep::AttributeName(name) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                AttributePathStep::ElementKeyString(key) => write!(f, "[\"{key}\"]")?,
                AttributePathStep::ElementKeyInt(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributePathStep {
    AttributeName(String),
    ElementKeyString(String),
    ElementKeyInt(i64),
}

/// The state of a managed object: a flat attribute map, optionally bound to
/// the schema it must conform to. When a schema is bound, `set` rejects
/// undeclared attributes and type mismatches; those rejections are what the
/// packer aggregates into its "failed saving state" error.
#[derive(Debug, Clone, Default)]
pub struct ResourceState {
    values: HashMap<String, Dynamic>,
    schema: Option<Schema>,
}

impl ResourceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: Schema) -> Self {
        Self {
            values: HashMap::new(),
            schema: Some(schema),
        }
    }

    pub fn from_dynamic(value: Dynamic) -> Result<Self> {
        match value {
            Dynamic::Map(values) => Ok(Self {
                values,
                schema: None,
            }),
            other => Err(SharedError::TypeMismatch {
                attribute: String::new(),
                expected: "map".to_string(),
                actual: other.type_name().to_string(),
            }),
        }
    }

    pub fn set(&mut self, key: &str, value: Dynamic) -> Result<()> {
        if let Some(schema) = &self.schema {
            let attribute = schema
                .attribute(key)
                .ok_or_else(|| SharedError::UnknownAttribute(key.to_string()))?;
            if !attribute.attr_type.matches(&value) {
                return Err(SharedError::TypeMismatch {
                    attribute: key.to_string(),
                    expected: attribute.attr_type.name().to_string(),
                    actual: value.type_name().to_string(),
                });
            }
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Dynamic> {
        self.values.get(key)
    }

    pub fn get_path(&self, path: &AttributePath) -> Option<&Dynamic> {
        let mut steps = path.steps.iter();
        let first = match steps.next()? {
            AttributePathStep::AttributeName(name) => self.values.get(name)?,
            _ => return None,
        };
        first.get_path(&AttributePath {
            steps: steps.cloned().collect(),
        })
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| v.as_str()).map(str::to_string)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Dynamic::as_bool)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Dynamic::as_i64)
    }

    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(Dynamic::as_string_vec)
            .unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Dynamic)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_dynamic(&self) -> Dynamic {
        Dynamic::Map(self.values.clone())
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.to_dynamic().to_json()
    }

    /// Wire encoding; state travels as msgpack.
    pub fn encode_msgpack(&self) -> Result<Vec<u8>> {
        rmp_serde::encode::to_vec(&self.values)
            .map_err(|e| SharedError::Encoding(format!("msgpack encoding failed: {e}")))
    }

    pub fn decode_msgpack(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::new());
        }
        let values = rmp_serde::decode::from_slice(data)
            .map_err(|e| SharedError::Decoding(format!("msgpack decoding failed: {e}")))?;
        Ok(Self {
            values,
            schema: None,
        })
    }

    pub fn encode_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.values)
            .map_err(|e| SharedError::Encoding(format!("json encoding failed: {e}")))
    }

    pub fn decode_json(data: &[u8]) -> Result<Self> {
        let values = serde_json::from_slice(data)
            .map_err(|e| SharedError::Decoding(format!("json decoding failed: {e}")))?;
        Ok(Self {
            values,
            schema: None,
        })
    }
}

/// A warning or error raised while validating or applying configuration
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: Option<String>,
    pub attribute: Option<AttributePath>,
}

/// Collected diagnostics, split by severity
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error<S: Into<String>, D: Into<String>>(&mut self, summary: S, detail: Option<D>) {
        self.errors.push(Diagnostic {
            summary: summary.into(),
            detail: detail.map(Into::into),
            attribute: None,
        });
    }

    pub fn add_warning<S: Into<String>, D: Into<String>>(&mut self, summary: S, detail: Option<D>) {
        self.warnings.push(Diagnostic {
            summary: summary.into(),
            detail: detail.map(Into::into),
            attribute: None,
        });
    }

    pub fn add_attribute_error<S: Into<String>, D: Into<String>>(
        &mut self,
        path: AttributePath,
        summary: S,
        detail: D,
    ) {
        self.errors.push(Diagnostic {
            summary: summary.into(),
            detail: Some(detail.into()),
            attribute: Some(path),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn unable_to_create_resource(&mut self, err: impl fmt::Display) {
        self.add_error(
            "Unable to Create Resource",
            Some(format!(
                "An unexpected error occurred while creating the resource update request. \
                 Please report this issue to the provider developers.\n\nError: {err}"
            )),
        );
    }

    pub fn unable_to_refresh_resource(&mut self, err: impl fmt::Display) {
        self.add_error(
            "Unable to Refresh Resource",
            Some(format!(
                "An unexpected error occurred while attempting to refresh resource state. \
                 Please retry the operation or report this issue to the provider developers.\n\nError: {err}"
            )),
        );
    }

    pub fn unable_to_update_resource(&mut self, err: impl fmt::Display) {
        self.add_error(
            "Unable to Update Resource",
            Some(format!(
                "An unexpected error occurred while updating the resource update request. \
                 Please report this issue to the provider developers.\n\nError: {err}"
            )),
        );
    }

    pub fn unable_to_delete_resource(&mut self, err: impl fmt::Display) {
        self.add_error(
            "Unable to Delete Resource",
            Some(format!(
                "An unexpected error occurred while attempting to delete the resource. \
                 Please retry the operation or report this issue to the provider developers.\n\nError: {err}"
            )),
        );
    }
}

/// Configuration values as handed to validate/configure hooks
pub type Config = Dynamic;

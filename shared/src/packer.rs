//! Payload → state packing
//!
//! Serializes a domain struct and writes its fields into a `ResourceState`,
//! one state attribute per top-level field. serde drives the field walk, so
//! a `#[serde(rename)]` wins over the derived name the same way an explicit
//! tag does; otherwise the serialized field name is snake_cased.

use serde::Serialize;

use crate::error::{Result, SharedError};
use crate::predicate::AttributePredicate;
use crate::schema::Schema;
use crate::types::{Dynamic, ResourceState};

/// A packing step: writes (part of) a payload into state
pub type PackFunc<T> = Box<dyn Fn(&T, &mut ResourceState) -> Result<()> + Send + Sync>;

/// Pack every field whose derived attribute name passes the predicate.
/// Set failures are collected and reported together.
pub fn universal<T: Serialize>(predicate: AttributePredicate) -> PackFunc<T> {
    Box::new(move |payload, state| {
        let values = lookup(payload, &predicate)?;

        let mut errors = Vec::new();
        for (attribute, value) in values {
            if let Err(err) = state.set(&attribute, value) {
                errors.push(err.to_string());
            }
        }

        if !errors.is_empty() {
            return Err(SharedError::StateWrite(errors));
        }
        Ok(())
    })
}

/// Run several packers over the same payload, collecting all failures.
pub fn compose<T: 'static>(packers: Vec<PackFunc<T>>) -> PackFunc<T> {
    Box::new(move |payload, state| {
        let mut errors = Vec::new();
        for packer in &packers {
            if let Err(err) = packer(payload, state) {
                errors.push(err.to_string());
            }
        }

        if !errors.is_empty() {
            return Err(SharedError::StateWrite(errors));
        }
        Ok(())
    })
}

/// The packer most resources want: only schema-declared attributes, never
/// the password or repository-class fields.
pub fn default_packer<T: Serialize>(schema: &Schema) -> PackFunc<T> {
    universal(AttributePredicate::all(vec![
        AttributePredicate::schema_has_key(schema),
        AttributePredicate::no_password(),
        AttributePredicate::no_class(),
    ]))
}

fn lookup<T: Serialize>(
    payload: &T,
    predicate: &AttributePredicate,
) -> Result<Vec<(String, Dynamic)>> {
    let value =
        serde_json::to_value(payload).map_err(|e| SharedError::Encoding(e.to_string()))?;
    let serde_json::Value::Object(fields) = value else {
        return Err(SharedError::Encoding(
            "payload must serialize to an object".to_string(),
        ));
    };

    let mut values = Vec::new();
    for (field, value) in fields {
        let attribute = field_to_attribute(&field);
        if !predicate.test(&attribute) {
            continue;
        }
        match value {
            // Absent optionals are left out of state
            serde_json::Value::Null => {}
            // Nested objects are stored as single-element block lists
            serde_json::Value::Object(_) => {
                values.push((attribute, Dynamic::List(vec![Dynamic::from(value)])));
            }
            other => values.push((attribute, Dynamic::from(other))),
        }
    }
    Ok(values)
}

/// Derive the state attribute name for a serialized field name. Names that
/// are already snake_case pass through; CamelCase and camelCase convert,
/// with acronym runs kept together ("BaseURL" → "base_url").
pub fn field_to_attribute(field: &str) -> String {
    let chars: Vec<char> = field.chars().collect();
    let mut out = String::with_capacity(field.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev_lower_or_digit =
                i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
            let prev_upper = i > 0 && chars[i - 1].is_ascii_uppercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev_lower_or_digit || (prev_upper && next_lower) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

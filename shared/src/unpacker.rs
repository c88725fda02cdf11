//! State → payload unpacking
//!
//! The inverse of the packer: collapses single-element block lists back into
//! objects, drops unresolved values, and deserializes the attribute map into
//! the domain struct.

use serde::de::DeserializeOwned;

use crate::error::{Result, SharedError};
use crate::types::{Dynamic, ResourceState};

/// Implemented by payloads that know their own resource id
pub trait Identifiable {
    fn id(&self) -> String;
}

/// An unpacking step: reads state into a payload plus its resource id
pub type UnpackFunc<T> = Box<dyn Fn(&ResourceState) -> Result<(T, String)> + Send + Sync>;

/// Unpack the state into a payload and return it with its resource id.
pub fn universal<T>(state: &ResourceState) -> Result<(T, String)>
where
    T: DeserializeOwned + Identifiable,
{
    let payload = unpack::<T>(state)?;
    let id = payload.id();
    Ok((payload, id))
}

/// Deserialize the state's attribute map into `T`.
pub fn unpack<T: DeserializeOwned>(state: &ResourceState) -> Result<T> {
    let mut fields = serde_json::Map::new();
    for (key, value) in state.iter() {
        let collapsed = collapse(value);
        if collapsed.is_unknown() {
            continue;
        }
        fields.insert(key.clone(), collapsed.to_json());
    }

    serde_json::from_value(serde_json::Value::Object(fields))
        .map_err(|e| SharedError::Decoding(e.to_string()))
}

// Single-element block lists unpack as the object they wrap
fn collapse(value: &Dynamic) -> Dynamic {
    match value {
        Dynamic::List(items) if items.len() == 1 && matches!(items[0], Dynamic::Map(_)) => {
            items[0].clone()
        }
        other => other.clone(),
    }
}

//! Helpers for provider acceptance tests
//!
//! Randomized resource names, fixture templating, and flattening of
//! expected attribute values into the `(attribute, expected)` pairs
//! acceptance tests assert on.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::error::{Result, SharedError};
use crate::types::Dynamic;

pub fn random_int() -> u32 {
    rand::rng().random_range(0..10_000_000)
}

pub fn rand_bool() -> bool {
    random_int() % 2 == 0
}

pub fn rand_select<T: Clone>(items: &[T]) -> T {
    items[random_int() as usize % items.len()].clone()
}

/// Build a randomized resource name. Returns the random id, the fully
/// qualified resource name, and the bare name.
pub fn mk_names(name: &str, resource: &str) -> (u32, String, String) {
    let id = random_int();
    let n = format!("{name}{id}");
    (id, format!("{resource}.{n}"), n)
}

/// First non-empty value among the environment variables; acceptance tests
/// refuse to run without their target instance.
pub fn get_env_var_with_fallback(vars: &[&str]) -> Result<String> {
    for var in vars {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return Ok(value);
            }
        }
    }
    Err(SharedError::Custom(format!(
        "{} must be set for acceptance tests",
        vars.join(" or ")
    )))
}

/// Render a configuration fixture template.
///
/// Panics on template errors: a broken fixture is a bug in the test, not a
/// condition to handle.
pub fn execute_template<S: Serialize>(name: &str, template: &str, context: S) -> String {
    let mut env = minijinja::Environment::new();
    env.add_template(name, template)
        .expect("fixture template must parse");
    env.get_template(name)
        .expect("fixture template was just added")
        .render(context)
        .expect("fixture template must render")
}

fn to_hcl_format(value: &Dynamic, indent: usize) -> String {
    match value {
        Dynamic::String(s) => format!("\"{s}\""),
        Dynamic::List(items) => format!(
            "[{}]",
            items
                .iter()
                .map(|item| to_hcl_format(item, indent))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Dynamic::Map(entries) => {
            let inner: BTreeMap<_, _> = entries.iter().map(|(k, v)| (k.clone(), v)).collect();
            let pad = "  ".repeat(indent + 1);
            let body = inner
                .iter()
                .map(|(k, v)| format!("{pad}{k} = {}", to_hcl_format(v, indent + 1)))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{{\n{body}\n{}}}", "  ".repeat(indent))
        }
        other => other.to_string(),
    }
}

/// Render a field map as an aligned HCL attribute block for fixtures.
pub fn fmt_map_to_hcl(fields: &BTreeMap<String, Dynamic>) -> String {
    let width = fields.keys().map(String::len).max().unwrap_or(0);
    fields
        .iter()
        .map(|(key, value)| format!("  {key:<width$} = {}", to_hcl_format(value, 1)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Verify an import produced the expected resource id, both as the state id
/// and under the attribute the resource sets its id from.
pub fn check_import_state(
    resource_id: &str,
    id_attribute: &str,
    states: &[crate::types::ResourceState],
) -> Result<()> {
    let Some(instance) = states.first() else {
        return Err(SharedError::Custom("no import state".to_string()));
    };
    match instance.get_string(id_attribute) {
        Some(value) if value == resource_id => Ok(()),
        other => Err(SharedError::Custom(format!(
            "incorrect state attribute '{id_attribute}': {}",
            other.unwrap_or_default()
        ))),
    }
}

/// An expected state attribute for an acceptance-test assertion
#[derive(Debug, Clone, PartialEq)]
pub struct StateCheck {
    pub resource: String,
    pub attribute: String,
    pub expected: String,
}

/// Flatten a field map into the attribute checks acceptance tests assert
/// on: list entries expand to `key.N`, maps contribute their `key.#` count,
/// scalars map straight through.
pub fn map_to_state_checks(fqrn: &str, fields: &BTreeMap<String, Dynamic>) -> Vec<StateCheck> {
    let mut checks = Vec::new();
    for (key, value) in fields {
        match value {
            Dynamic::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    checks.push(StateCheck {
                        resource: fqrn.to_string(),
                        attribute: format!("{key}.{i}"),
                        expected: item.to_string(),
                    });
                }
            }
            Dynamic::Map(entries) => checks.push(StateCheck {
                resource: fqrn.to_string(),
                attribute: format!("{key}.#"),
                expected: entries.len().to_string(),
            }),
            other => checks.push(StateCheck {
                resource: fqrn.to_string(),
                attribute: key.clone(),
                expected: other.to_string(),
            }),
        }
    }
    checks
}

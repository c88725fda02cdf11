//! Cross-attribute and collection validators
//!
//! These look beyond the validated value: either into each element of a
//! list/set, or at sibling attributes through the full configuration
//! carried on the request.

use std::sync::Arc;

use crate::types::{AttributePath, Diagnostics};
use crate::validator::{should_skip, ValidateRequest, Validator};

struct StringSetInSliceValidator {
    valid: Vec<String>,
}

impl Validator for StringSetInSliceValidator {
    fn description(&self) -> String {
        format!("value must contain one of these: {:?}", self.valid)
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        if should_skip(&request.value) {
            return;
        }
        let Some(values) = request.value.as_string_vec() else {
            diagnostics.add_attribute_error(
                request.path.clone(),
                "Invalid Attribute Value",
                format!("expected {} to be a set of strings", request.path),
            );
            return;
        };
        for value in values {
            if !self.valid.contains(&value) {
                diagnostics.add_attribute_error(
                    request.path.clone(),
                    "Invalid Attribute Value",
                    format!("{} {}, got: {}", request.path, self.description(), value),
                );
            }
        }
    }
}

/// Every element of the list or set must be in the allow-list.
pub fn string_set_in_slice(valid: &[&str]) -> Arc<dyn Validator> {
    Arc::new(StringSetInSliceValidator {
        valid: valid.iter().map(|v| v.to_string()).collect(),
    })
}

struct BoolConflictValidator {
    conflicting: bool,
    paths: Vec<AttributePath>,
}

impl Validator for BoolConflictValidator {
    fn description(&self) -> String {
        format!(
            "the boolean attributes can not all be set to {} for: {}",
            self.conflicting,
            self.paths
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        if should_skip(&request.value) {
            return;
        }
        if request.value.as_bool() != Some(self.conflicting) {
            return;
        }
        for path in &self.paths {
            let Some(other) = request.config.get_path(path) else {
                continue;
            };
            if should_skip(other) {
                continue;
            }
            if other.as_bool() == Some(self.conflicting) {
                diagnostics.add_attribute_error(
                    path.clone(),
                    "Invalid Attribute Value",
                    format!(
                        "Attribute {} can not be set to {}, when {} is {}.",
                        request.path, self.conflicting, path, self.conflicting
                    ),
                );
            }
        }
    }
}

/// Rejects the configuration when this attribute and any referenced
/// attribute both hold the conflicting boolean value.
pub fn bool_conflict(conflicting: bool, paths: Vec<AttributePath>) -> Arc<dyn Validator> {
    Arc::new(BoolConflictValidator { conflicting, paths })
}

struct RequireIfDefinedValidator {
    paths: Vec<AttributePath>,
}

impl Validator for RequireIfDefinedValidator {
    fn description(&self) -> String {
        "required if parent attribute is defined/not null".to_string()
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        if should_skip(&request.value) {
            return;
        }
        for path in &self.paths {
            let defined = request
                .config
                .get_path(path)
                .is_some_and(|value| !should_skip(value));
            if !defined {
                diagnostics.add_attribute_error(
                    path.clone(),
                    "Invalid Attribute Value",
                    format!(
                        "Attribute {} must be set when {} is defined.",
                        path, request.path
                    ),
                );
            }
        }
    }
}

/// When the validated attribute is set, every referenced attribute must be
/// set too.
pub fn require_if_defined(paths: Vec<AttributePath>) -> Arc<dyn Validator> {
    Arc::new(RequireIfDefinedValidator { paths })
}

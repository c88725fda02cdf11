//! Field validators
//!
//! Validators run during plan, against one attribute value at a time. The
//! request also carries the whole configuration so cross-attribute
//! validators can look at siblings. Null and unknown values are skipped by
//! every validator: absence and not-yet-known are never format errors.

pub mod config;
pub mod ldap;
pub mod number;
pub mod string;

use std::sync::Arc;

use crate::types::{AttributePath, Diagnostics, Dynamic};

/// Validates a single attribute value
pub trait Validator: Send + Sync {
    /// Human-readable description of what passes
    fn description(&self) -> String;

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics);
}

pub struct ValidateRequest {
    pub value: Dynamic,
    pub config: Dynamic,
    pub path: AttributePath,
}

impl ValidateRequest {
    pub fn new(value: Dynamic, path: AttributePath) -> Self {
        Self {
            value,
            config: Dynamic::Null,
            path,
        }
    }

    pub fn with_config(mut self, config: Dynamic) -> Self {
        self.config = config;
        self
    }
}

pub(crate) fn should_skip(value: &Dynamic) -> bool {
    value.is_null() || value.is_unknown()
}

pub(crate) fn invalid_value(
    diagnostics: &mut Diagnostics,
    path: &AttributePath,
    description: &str,
    value: &str,
) {
    diagnostics.add_attribute_error(
        path.clone(),
        "Invalid Attribute Value",
        format!("{path} {description}, got: {value}"),
    );
}

struct AllValidator {
    validators: Vec<Arc<dyn Validator>>,
}

impl Validator for AllValidator {
    fn description(&self) -> String {
        self.validators
            .iter()
            .map(|v| v.description())
            .collect::<Vec<_>>()
            .join(" and ")
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        for validator in &self.validators {
            validator.validate(request, diagnostics);
        }
    }
}

/// Combine validators; every one runs and all diagnostics are collected.
pub fn all(validators: Vec<Arc<dyn Validator>>) -> Arc<dyn Validator> {
    Arc::new(AllValidator { validators })
}

/// Run an attribute's validators against a configuration value.
pub fn run_validators(
    validators: &[Arc<dyn Validator>],
    value: &Dynamic,
    config: &Dynamic,
    path: &AttributePath,
) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let request = ValidateRequest {
        value: value.clone(),
        config: config.clone(),
        path: path.clone(),
    };
    for validator in validators {
        validator.validate(&request, &mut diagnostics);
    }
    diagnostics
}

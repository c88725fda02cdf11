//! Numeric validators

use std::sync::Arc;

use crate::types::Diagnostics;
use crate::validator::{should_skip, ValidateRequest, Validator};

struct IntAtLeastValidator {
    min: i64,
}

impl Validator for IntAtLeastValidator {
    fn description(&self) -> String {
        format!("value must be at least {}", self.min)
    }

    fn validate(&self, request: &ValidateRequest, diagnostics: &mut Diagnostics) {
        if should_skip(&request.value) {
            return;
        }
        match request.value.as_i64() {
            Some(value) => {
                if value < self.min {
                    diagnostics.add_attribute_error(
                        request.path.clone(),
                        "Invalid Attribute Value",
                        format!(
                            "expected {} to be at least ({}), got {}",
                            request.path, self.min, value
                        ),
                    );
                }
            }
            None => diagnostics.add_attribute_error(
                request.path.clone(),
                "Invalid Attribute Value",
                format!(
                    "expected type of {} to be integer, got {}",
                    request.path,
                    request.value.type_name()
                ),
            ),
        }
    }
}

pub fn int_at_least(min: i64) -> Arc<dyn Validator> {
    Arc::new(IntAtLeastValidator { min })
}

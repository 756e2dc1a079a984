//! Scenario input validation, decoupled from the report pipeline.
//!
//! Produces a tagged result: either a typed [`ScenarioInput`] or a list of
//! per-field errors using the wire field names, so the HTTP layer can
//! surface a structured 400 and the core stays free of validation concerns.

use serde::{Deserialize, Serialize};

use crate::models::ScenarioInput;

/// Bounds for `yearsSinceGrad`.
const MAX_YEARS_SINCE_GRAD: u32 = 5;

/// One failing field: the wire-format path and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Validate a raw JSON body as a scenario.
///
/// Phase one deserializes through `serde_path_to_error`, so a shape or type
/// failure yields one entry naming the offending path. Phase two applies
/// semantic checks, each appending independently.
pub fn validate_scenario(value: serde_json::Value) -> Result<ScenarioInput, Vec<FieldError>> {
    let scenario: ScenarioInput = serde_path_to_error::deserialize(value)
        .map_err(|err| vec![FieldError::new(err.path().to_string(), err.inner().to_string())])?;

    let mut errors = Vec::new();

    if scenario.school_id.is_empty() {
        errors.push(FieldError::new("schoolId", "School is required"));
    }
    if scenario.major_id.is_empty() {
        errors.push(FieldError::new("majorId", "Major is required"));
    }
    if let Some(years) = scenario.years_since_grad {
        if years > MAX_YEARS_SINCE_GRAD {
            errors.push(FieldError::new(
                "yearsSinceGrad",
                format!("yearsSinceGrad must be between 0 and {MAX_YEARS_SINCE_GRAD}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(scenario)
    } else {
        Err(errors)
    }
}

//! Validation helpers for statistical inputs.

use crate::types::ValidationResult;

use super::ValueRange;

pub(crate) fn _chain<T>(
    result: ValidationResult<T>,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    match result {
        ValidationResult::Valid(_) => {}
        ValidationResult::Warnings(_, warns) => {
            warnings.extend(warns);
        }
        ValidationResult::Invalid(warns, errs) => {
            warnings.extend(warns);
            errors.extend(errs);
        }
    }
}

pub(crate) fn _return(warnings: Vec<String>, errors: Vec<String>) -> ValidationResult {
    if errors.is_empty() {
        ValidationResult::Valid(())
    } else {
        ValidationResult::Invalid(warnings, errors)
    }
}

pub fn validate_range(range: &ValueRange) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    if range.min > range.max {
        errors.push("Range minimum cannot be greater than maximum.".to_string());
    }

    if range.min.is_nan() || range.max.is_nan() {
        errors.push("Range values cannot be NaN.".to_string());
    }

    if range.min.is_infinite() || range.max.is_infinite() {
        errors.push("Range values cannot be infinite.".to_string());
    }

    _return(warnings, errors)
}

pub fn validate_non_empty(values: &[f64]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    if values.is_empty() {
        errors.push("Values cannot be empty.".to_string());
    }

    _return(warnings, errors)
}

pub fn validate_finite(values: &[f64]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    // Check if all values are finite
    for (i, &value) in values.iter().enumerate() {
        if value.is_nan() || value.is_infinite() {
            errors.push(format!(
                "Value at index {} is not a valid number: {}",
                i, value
            ));
        }
    }

    _return(warnings, errors)
}

pub fn validate_values(values: &[f64]) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    let w = &mut warnings;
    let e = &mut errors;

    _chain(validate_non_empty(values), w, e);
    _chain(validate_finite(values), w, e);
    _return(warnings, errors)
}

//! Shared guard clauses for value object constructors

use crate::error::{DomainError, Result};

const BLANK: &str = "should not be null, blank, or empty";

/// Rejects blank input, keeping the value untouched otherwise.
pub(crate) fn not_blank(field: &'static str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, BLANK));
    }
    Ok(value)
}

/// Rejects blank input and returns the value without surrounding whitespace.
pub(crate) fn trimmed(field: &'static str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(field, BLANK));
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

pub(crate) fn max_chars(field: &'static str, value: &str, max: usize) -> Result<()> {
    let count = value.chars().count();
    if count > max {
        return Err(DomainError::validation(
            field,
            format!("cannot have more than {max} characters (got {count})"),
        ));
    }
    Ok(())
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::validation(field, "must be positive"));
    }
    Ok(value)
}

pub(crate) fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if !value.is_finite() || value < min || value > max {
        return Err(DomainError::validation(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

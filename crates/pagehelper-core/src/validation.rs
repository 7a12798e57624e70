//! Validation utilities.

use crate::{FieldError, PageHelperError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `PageHelperError` on failure.
    fn validate_request(&self) -> Result<(), PageHelperError> {
        self.validate().map_err(validation_errors_to_page_helper_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors, sorted by field.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Converts `validator::ValidationErrors` to `PageHelperError`.
#[must_use]
pub fn validation_errors_to_page_helper_error(errors: ValidationErrors) -> PageHelperError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    PageHelperError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Tokens that would let an ordering expression smuggle in a statement.
    const UNSAFE_ORDER_BY_TOKENS: &[&str] = &[";", "--", "/*", "*/"];

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Rejects ordering expressions containing statement separators or
    /// comment markers.
    ///
    /// Only applied when binding untrusted input; expressions passed
    /// directly to the configurer are forwarded untouched.
    pub fn safe_order_by(value: &str) -> Result<(), ValidationError> {
        if UNSAFE_ORDER_BY_TOKENS.iter().any(|token| value.contains(token)) {
            return Err(ValidationError::new("unsafe_order_by"));
        }
        Ok(())
    }
}

//! Validation helpers built on the `validator` crate.

use anyhow::anyhow;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Join all field errors into one message, using the rule message when one is
/// attached and `"<field> is invalid"` otherwise.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    // field_errors() is backed by a HashMap
    messages.sort();
    messages.join(", ")
}

/// Run `Validate::validate` and map a failure to a validation [`AppError`].
pub fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|errors| AppError::unprocessable(anyhow!(format_errors(&errors))))
}

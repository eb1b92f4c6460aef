//! Request input types and validation.
//!
//! Validation failures surface as a per-field error map; nothing is
//! persisted when any field fails.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{AuthError, FieldErrors};

/// Registration payload. Field names are the wire contract.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "The name may not be greater than 255 characters.")
    )]
    pub name: String,

    #[validate(
        email(message = "The email must be a valid email address."),
        length(max = 255, message = "The email may not be greater than 255 characters.")
    )]
    pub email: String,

    #[validate(length(min = 8, message = "The password must be at least 8 characters."))]
    pub password: String,

    #[validate(must_match(
        other = "password",
        message = "The password confirmation does not match."
    ))]
    pub password_confirmation: String,
}

/// Login payload. Structural checks only; credential correctness is the
/// service's concern.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message("The name field is required.".into()));
    }
    Ok(())
}

/// Run validation, flattening errors into the per-field map.
pub fn check<T: Validate>(input: &T) -> Result<(), AuthError> {
    input
        .validate()
        .map_err(|e| AuthError::Validation(field_errors(&e)))
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("The {field} field is invalid."),
            })
            .collect();
        map.insert(field.to_string(), messages);
    }
    map
}

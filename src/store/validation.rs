//! Person field validation
//!
//! Runs inside the store before any write, for inserts and replaces alike.

use std::fmt;

use thiserror::Error;

use super::model::PersonDraft;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("Path `{}` is required.", field),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Document failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Person validation failed: {}", join_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fields that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPerson {
    pub name: String,
    pub number: String,
}

/// Validate a draft, collecting every field error
pub fn validate(draft: PersonDraft) -> Result<ValidPerson, ValidationError> {
    let mut errors = Vec::new();

    let name = required_text("name", draft.name, &mut errors);
    let number = required_text("number", draft.number, &mut errors);

    match (name, number) {
        (Some(name), Some(number)) => Ok(ValidPerson { name, number }),
        _ => Err(ValidationError { errors }),
    }
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            errors.push(FieldError::required(field));
            None
        }
    }
}

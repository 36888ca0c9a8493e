//! Field-level validation helpers shared by every resource.
//!
//! Input DTOs derive [`validator::Validate`]; [`validate_input`] runs the
//! derived rules and folds any failures into a [`FieldErrors`] map so the API
//! layer can return `{ field: message }` to the caller.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Ordered `field -> message` map. Only the first message per field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field` unless one is already present.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Convert into `Err(CoreError::InvalidFields)` when any field failed.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&field, first));
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// Run the derived validation rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::InvalidFields(FieldErrors::from(&e)))
}

/// Build a [`ValidationError`] for use inside `#[validate(custom(...))]` functions.
pub fn custom_error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Check that `value` belongs to a closed set of allowed strings.
pub fn check_one_of(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(custom_error(
            "one_of",
            format!("'{value}' is not allowed. Must be one of: {}", allowed.join(", ")),
        ))
    }
}

fn default_message(field: &str, err: &ValidationError) -> String {
    let param = |name: &str| err.params.get(name).map(|v| v.to_string());
    match err.code.as_ref() {
        "email" => format!("{field} must be a valid email address"),
        "url" => format!("{field} must be a valid URL"),
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => {
                format!("{field} must be between {min} and {max} characters")
            }
            (Some(min), None) => format!("{field} must be at least {min} characters"),
            (None, Some(max)) => format!("{field} must be at most {max} characters"),
            (None, None) => format!("{field} has an invalid length"),
        },
        "required" => format!("{field} is required"),
        _ => format!("{field} is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 3))]
        name: String,
        #[validate(email(message = "Please provide a valid email"))]
        email: String,
        #[validate(url)]
        homepage: Option<String>,
    }

    #[test]
    fn valid_input_passes() {
        let s = Sample {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            homepage: None,
        };
        assert!(validate_input(&s).is_ok());
    }

    #[test]
    fn failures_become_field_map() {
        let s = Sample {
            name: "A".into(),
            email: "nope".into(),
            homepage: Some("not a url".into()),
        };
        let err = validate_input(&s).unwrap_err();
        let CoreError::InvalidFields(fields) = err else {
            panic!("expected InvalidFields, got {err:?}");
        };
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("name"), Some("name must be at least 3 characters"));
        assert_eq!(fields.get("email"), Some("Please provide a valid email"));
        assert_eq!(fields.get("homepage"), Some("homepage must be a valid URL"));
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut fields = FieldErrors::new();
        fields.add("title", "too short");
        fields.add("title", "too long");
        assert_eq!(fields.get("title"), Some("too short"));
        assert!(fields.into_result().is_err());
    }

    #[test]
    fn empty_field_errors_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn one_of_rejects_unknown_values() {
        assert!(check_one_of("a", &["a", "b"]).is_ok());
        let err = check_one_of("c", &["a", "b"]).unwrap_err();
        assert_eq!(err.code, "one_of");
        assert!(err.message.unwrap().contains("Must be one of: a, b"));
    }

    #[test]
    fn display_joins_fields_in_order() {
        let mut fields = FieldErrors::new();
        fields.add("b", "second");
        fields.add("a", "first");
        assert_eq!(fields.to_string(), "a: first; b: second");
    }
}

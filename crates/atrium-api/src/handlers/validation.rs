//! Schema checks shared by the submission handlers.
//!
//! Submissions are validated before any insert: required fields, length
//! bounds, and basic shape checks. Failures produce a structured 400 body
//! listing every offending field at once, so a client can fix a form in one
//! round trip.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Body of a 400 validation failure.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    /// Fixed discriminator for clients.
    pub error: &'static str,
    /// One entry per offending field.
    pub details: Vec<String>,
}

/// Renders the collected field errors as a 400 response.
pub fn validation_error(details: Vec<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ValidationErrorBody { error: "validation failed", details }))
        .into_response()
}

/// Accumulates field errors across a submission body.
#[derive(Debug, Default)]
pub struct FieldCheck {
    errors: Vec<String>,
}

impl FieldCheck {
    /// Creates an empty checker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a custom error.
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Checks a required text field; blank counts as missing.
    pub fn required(
        &mut self,
        field: &str,
        value: Option<String>,
        max_len: usize,
    ) -> Option<String> {
        match normalize(value) {
            Some(text) => {
                if text.chars().count() > max_len {
                    self.push(format!("{field} must be at most {max_len} characters"));
                }
                Some(text)
            },
            None => {
                self.push(format!("{field} is required"));
                None
            },
        }
    }

    /// Checks an optional text field; blank collapses to absent.
    pub fn optional(
        &mut self,
        field: &str,
        value: Option<String>,
        max_len: usize,
    ) -> Option<String> {
        let text = normalize(value)?;
        if text.chars().count() > max_len {
            self.push(format!("{field} must be at most {max_len} characters"));
        }
        Some(text)
    }

    /// Returns the collected errors, if any.
    pub fn finish(self) -> Result<(), Vec<String>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Trims whitespace and collapses empty strings to absent.
fn normalize(value: Option<String>) -> Option<String> {
    let text = value?.trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_field_is_reported() {
        let mut check = FieldCheck::new();
        let value = check.required("name", None, 120);

        assert!(value.is_none());
        assert_eq!(check.finish().unwrap_err(), vec!["name is required".to_string()]);
    }

    #[test]
    fn blank_required_field_counts_as_missing() {
        let mut check = FieldCheck::new();
        check.required("name", Some("   ".to_string()), 120);

        assert!(check.finish().is_err());
    }

    #[test]
    fn over_long_field_is_reported() {
        let mut check = FieldCheck::new();
        check.required("name", Some("x".repeat(121)), 120);

        let errors = check.finish().unwrap_err();
        assert_eq!(errors, vec!["name must be at most 120 characters".to_string()]);
    }

    #[test]
    fn optional_blank_field_collapses_to_absent() {
        let mut check = FieldCheck::new();
        let value = check.optional("phone", Some("  ".to_string()), 32);

        assert!(value.is_none());
        assert!(check.finish().is_ok());
    }

    #[test]
    fn all_errors_are_collected_in_one_pass() {
        let mut check = FieldCheck::new();
        check.required("name", None, 120);
        check.required("email", None, 254);
        check.push("rating must be between 1 and 5");

        assert_eq!(check.finish().unwrap_err().len(), 3);
    }

    #[test]
    fn values_are_trimmed() {
        let mut check = FieldCheck::new();
        let value = check.required("name", Some("  Ada  ".to_string()), 120);

        assert_eq!(value.as_deref(), Some("Ada"));
        assert!(check.finish().is_ok());
    }
}

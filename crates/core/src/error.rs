//! Field-level validation errors.
//!
//! Every input type reports **all** violated fields in one error, not
//! just the first, so a form can highlight each offending field in a
//! single pass.

use std::fmt;

/// A single violated constraint on one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as it appears on the input type.
    pub field: String,
    /// Human-readable reason the constraint failed.
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// All violated fields of one input, sorted by field name for
/// deterministic output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
            first = false;
        }
        Ok(())
    }
}

/// Local schema validation failure, reported before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {0}")]
pub struct ValidationError(pub FieldErrors);

impl ValidationError {
    /// Build an error for a single violated field.
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self(FieldErrors(vec![FieldError::new(field, reason)]))
    }

    /// The violated fields, in field-name order.
    pub fn fields(&self) -> &[FieldError] {
        &self.0 .0
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    reason: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self(FieldErrors(fields))
    }
}

/// Adapter from `validator` derive checks to [`ValidationError`].
pub trait ValidateInput: validator::Validate {
    /// Check all field constraints, reporting every violated field.
    fn validate_input(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)
    }
}

impl<T: validator::Validate> ValidateInput for T {}

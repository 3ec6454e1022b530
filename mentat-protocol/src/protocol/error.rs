//! Protocol error types with field-level reporting

use std::fmt;
use thiserror::Error;

/// Error returned when encoding or decoding a protocol shape
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl ProtocolError {
    /// The validation failure, if this error is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ProtocolError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Conformance failure with the path of the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    /// Path to the field that failed (e.g. "content[2].color", "$" for the root)
    pub field_path: String,
    pub kind: ValidationErrorKind,
    /// Optional additional context
    pub context: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed at '{}': {}", self.field_path, self.kind)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({})", ctx)?;
        }
        Ok(())
    }
}

/// Specific validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    #[error("required field is missing")]
    RequiredFieldMissing,

    #[error("invalid type: expected {expected}, got {actual}")]
    InvalidType { expected: String, actual: String },

    #[error("invalid value: expected {expected}, got {actual}")]
    InvalidValue { expected: String, actual: String },
}

impl ValidationError {
    pub fn new(field_path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            field_path: field_path.into(),
            kind,
            context: None,
        }
    }

    /// Add context to the validation error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Helper to create a required field error
    pub fn required(field_path: impl Into<String>) -> Self {
        Self::new(field_path, ValidationErrorKind::RequiredFieldMissing)
    }

    /// Helper to create an invalid type error
    pub fn invalid_type(
        field_path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(
            field_path,
            ValidationErrorKind::InvalidType {
                expected: expected.into(),
                actual: actual.into(),
            },
        )
    }

    /// Helper to create an invalid value error
    pub fn invalid_value(
        field_path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(
            field_path,
            ValidationErrorKind::InvalidValue {
                expected: expected.into(),
                actual: actual.into(),
            },
        )
    }
}

/// Result type for protocol operations
pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context() {
        let err = ValidationError::invalid_value("source", "server | client", "peer")
            .with_context("StreamMessage");
        assert_eq!(
            err.to_string(),
            "Validation failed at 'source': invalid value: expected server | client, got peer (StreamMessage)"
        );
    }

    #[test]
    fn test_protocol_error_from_validation() {
        let err: ProtocolError = ValidationError::required("id").into();
        assert_eq!(err.as_validation().map(|e| e.field_path.as_str()), Some("id"));
        assert_eq!(err.to_string(), "Validation failed at 'id': required field is missing");
    }
}

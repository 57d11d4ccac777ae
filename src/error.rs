//! Custom error types for WellSpace
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::advisor::AdvisorError;

/// The main error type for WellSpace operations
#[derive(Error, Debug)]
pub enum WellspaceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An identifier prefix matched more than one entity
    #[error("{entity_type} identifier '{identifier}' is ambiguous ({matches} matches)")]
    Ambiguous {
        entity_type: &'static str,
        identifier: String,
        matches: usize,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// PIN gate errors
    #[error("{0}")]
    Auth(String),

    /// Category advisor errors
    #[error("Category advisor error: {0}")]
    Advisor(#[from] AdvisorError),
}

impl WellspaceError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a PIN gate error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

impl From<std::io::Error> for WellspaceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WellspaceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for WellSpace operations
pub type WellspaceResult<T> = Result<T, WellspaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WellspaceError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = WellspaceError::expense_not_found("1234abcd");
        assert_eq!(err.to_string(), "Expense not found: 1234abcd");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_ambiguous_error() {
        let err = WellspaceError::Ambiguous {
            entity_type: "Expense",
            identifier: "ab".into(),
            matches: 3,
        };
        assert_eq!(
            err.to_string(),
            "Expense identifier 'ab' is ambiguous (3 matches)"
        );
    }

    #[test]
    fn test_auth_error_is_bare_message() {
        let err = WellspaceError::Auth("Incorrect PIN. Please try again.".into());
        assert_eq!(err.to_string(), "Incorrect PIN. Please try again.");
        assert!(err.is_auth());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WellspaceError = io_err.into();
        assert!(matches!(err, WellspaceError::Io(_)));
    }

    #[test]
    fn test_from_advisor_error() {
        let err: WellspaceError = AdvisorError::NotConfigured("no key".into()).into();
        assert!(matches!(err, WellspaceError::Advisor(_)));
    }
}

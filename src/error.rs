//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation failures of the value objects live in [`crate::domain::ValidationError`].

use thiserror::Error;

pub use crate::domain::ValidationError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load an env file
    #[error("Failed to load env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "Unknown level: loud".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for LOG_LEVEL: Unknown level: loud"
        );

        let err = ValidationError::InvalidPhone("42".to_string());
        assert_eq!(err.to_string(), "Phone number must be 10 digits: 42");
    }
}

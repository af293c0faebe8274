//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Invalid image payload for meal analysis
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    /// Invalid health profile value
    #[error("Invalid health profile: {field} {reason}")]
    InvalidHealthProfile { field: String, reason: String },
}

impl DomainError {
    /// Create an invalid health profile error
    pub fn invalid_profile(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHealthProfile {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("message is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: message is required");
    }

    #[test]
    fn invalid_image_error_message() {
        let err = DomainError::InvalidImage("unsupported mime type".to_string());
        assert_eq!(err.to_string(), "Invalid image: unsupported mime type");
    }

    #[test]
    fn invalid_profile_creates_correct_error() {
        let err = DomainError::invalid_profile("height", "must be positive");
        match err {
            DomainError::InvalidHealthProfile { field, reason } => {
                assert_eq!(field, "height");
                assert_eq!(reason, "must be positive");
            },
            _ => unreachable!("Expected InvalidHealthProfile error"),
        }
    }

    #[test]
    fn invalid_profile_error_message() {
        let err = DomainError::invalid_profile("height", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid health profile: height must be positive"
        );
    }
}

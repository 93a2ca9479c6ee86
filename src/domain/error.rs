use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Notification error: {message}")]
    Notification { message: String },

    #[error("Audit error: {message}")]
    Audit { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::Notification {
            message: message.into(),
        }
    }

    pub fn audit(message: impl Into<String>) -> Self {
        Self::Audit {
            message: message.into(),
        }
    }

    /// Whether this error was raised by input validation rather than a collaborator
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("Database unavailable");
        assert_eq!(error.to_string(), "Storage error: Database unavailable");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid email");
        assert_eq!(error.to_string(), "Validation error: Invalid email");
        assert!(error.is_validation());
    }

    #[test]
    fn test_collaborator_errors_are_not_validation() {
        assert!(!DomainError::storage("disk full").is_validation());
        assert!(!DomainError::notification("smtp down").is_validation());
        assert!(!DomainError::audit("sink closed").is_validation());
    }

    #[test]
    fn test_notification_error() {
        let error = DomainError::notification("Connection refused");
        assert_eq!(error.to_string(), "Notification error: Connection refused");
    }
}

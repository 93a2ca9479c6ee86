//! User validation utilities

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Invalid email")]
    InvalidEmail,
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        DomainError::validation(err.to_string())
    }
}

/// Validate an email address
///
/// The only rule is that the address contains an '@'. Anything stricter is
/// left to the notification transport.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !email.contains('@') {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("juan@ejemplo.com").is_ok());
        assert!(validate_email("ok@ejemplo.com").is_ok());
        assert!(validate_email("a@b").is_ok());
        // No domain check beyond the '@'
        assert!(validate_email("@").is_ok());
    }

    #[test]
    fn test_missing_at_sign() {
        assert_eq!(
            validate_email("juanejemplo.com"),
            Err(UserValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_empty_email() {
        assert_eq!(validate_email(""), Err(UserValidationError::InvalidEmail));
    }

    #[test]
    fn test_into_domain_error_keeps_message() {
        let err: DomainError = UserValidationError::InvalidEmail.into();
        assert_eq!(
            err,
            DomainError::Validation {
                message: "Invalid email".to_string()
            }
        );
    }
}

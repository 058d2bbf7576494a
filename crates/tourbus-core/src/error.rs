//! Error types for the tourbus core library

use thiserror::Error;

use crate::cafe::CheckoutStep;

/// Message shown to the user when a login attempt does not match any credential
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Τα στοιχεία δεν είναι σωστά. Δοκίμασε ξανά.";

pub type Result<T> = std::result::Result<T, AuthError>;

/// Authentication error types
///
/// Unknown usernames and wrong passwords produce the same variant so the
/// message never reveals which usernames exist.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,
}

impl AuthError {
    /// User-facing message for this error
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
        }
    }
}

/// Cafe ordering errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CafeError {
    #[error("Το καλάθι σου είναι άδειο")]
    EmptyCart,
    #[error("order is at {found:?}, expected {expected:?}")]
    WrongStep {
        expected: CheckoutStep,
        found: CheckoutStep,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_message() {
        let err = AuthError::InvalidCredentials;
        assert_eq!(err.to_string(), INVALID_CREDENTIALS_MESSAGE);
        assert_eq!(err.message(), INVALID_CREDENTIALS_MESSAGE);
        assert!(!err.message().is_empty());
    }
}

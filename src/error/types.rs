//! Error types
//!
//! Defines domain-specific error types for each module of the account manager.

use std::fmt;
use std::io;

/// Authentication errors
#[derive(Debug)]
pub enum AuthError {
    UserNotFound(String),
    InvalidPassword(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::UserNotFound(u) => write!(f, "User not found: {}", u),
            AuthError::InvalidPassword(u) => write!(f, "Invalid password for user: {}", u),
        }
    }
}

impl std::error::Error for AuthError {}

/// Username and password policy violations
///
/// All variants are recoverable by prompting for new input.
#[derive(Debug)]
pub enum ValidationError {
    EmptyUsername,
    InvalidUsername(String),
    DuplicateUsername(String),
    /// Carries the minimum required length
    WeakPassword(usize),
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyUsername => write!(f, "Username cannot be empty"),
            ValidationError::InvalidUsername(u) => write!(f, "Invalid username: {}", u),
            ValidationError::DuplicateUsername(u) => write!(f, "Username already exists: {}", u),
            ValidationError::WeakPassword(min) => {
                write!(f, "Password must be at least {} characters long", min)
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Store module errors
#[derive(Debug)]
pub enum StoreError {
    IoError(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::IoError(error)
    }
}

/// General account manager error that encompasses all error types
#[derive(Debug)]
pub enum AccountError {
    Auth(AuthError),
    Validation(ValidationError),
    Store(StoreError),
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::Auth(e) => write!(f, "{}", e),
            AccountError::Validation(e) => write!(f, "{}", e),
            AccountError::Store(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for AccountError {}

// Implement conversions from specific errors to AccountError
impl From<AuthError> for AccountError {
    fn from(error: AuthError) -> Self {
        AccountError::Auth(error)
    }
}

impl From<ValidationError> for AccountError {
    fn from(error: ValidationError) -> Self {
        AccountError::Validation(error)
    }
}

impl From<StoreError> for AccountError {
    fn from(error: StoreError) -> Self {
        AccountError::Store(error)
    }
}

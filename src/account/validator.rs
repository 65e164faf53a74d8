//! Account policy validation
//!
//! Username and password policy checks shared by the account operations.

use crate::config::ManagerConfig;
use crate::error::ValidationError;
use crate::store::{DELIMITER, Store};

/// Validates a candidate username against the store and policy.
///
/// Surrounding whitespace is trimmed first; the trimmed name is returned and
/// is what gets stored. The delimiter and line-control characters are banned
/// because the backing format is line-based with no escaping. The duplicate
/// check is a case-sensitive exact match.
pub fn validate_new_username(
    username: &str,
    store: &Store,
    config: &ManagerConfig,
) -> Result<String, ValidationError> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::EmptyUsername);
    }

    if username.contains([DELIMITER, '\r', '\n', '\0'])
        || username.chars().count() > config.max_username_length
    {
        return Err(ValidationError::InvalidUsername(username.to_string()));
    }

    if store.contains(username) {
        return Err(ValidationError::DuplicateUsername(username.to_string()));
    }

    Ok(username.to_string())
}

/// Validates a new password against the length policy.
///
/// Length is measured in characters, not bytes. Passwords are never trimmed.
pub fn validate_new_password(
    password: &str,
    config: &ManagerConfig,
) -> Result<(), ValidationError> {
    if password.chars().count() < config.min_password_length {
        return Err(ValidationError::WeakPassword(config.min_password_length));
    }
    Ok(())
}

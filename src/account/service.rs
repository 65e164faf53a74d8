//! Account lifecycle operations
//!
//! Implements create, authenticate, change password, change username, and
//! delete. Every mutating operation validates fully before touching the
//! store and persists the full store before returning success.

use log::info;

use crate::account::validator::{validate_new_password, validate_new_username};
use crate::config::ManagerConfig;
use crate::error::{AccountError, AuthError, ValidationError};
use crate::store::{CredentialStore, Store};

/// Enforces the account policy and orchestrates store mutation
pub struct AccountService {
    credentials: CredentialStore,
    config: ManagerConfig,
}

impl AccountService {
    pub fn new(config: ManagerConfig) -> Self {
        let credentials = CredentialStore::new(config.accounts_path());
        Self {
            credentials,
            config,
        }
    }

    /// Loads the current store from the backing file.
    ///
    /// Also used to re-load defensively after operations that may have
    /// changed durable state, and after a failed save, when the in-memory
    /// store can no longer be trusted to match the file.
    pub fn load(&self) -> Result<Store, AccountError> {
        Ok(self.credentials.load()?)
    }

    /// Creates a new account and persists the store.
    ///
    /// Returns the stored (trimmed) username.
    pub fn create_account(
        &self,
        store: &mut Store,
        username: &str,
        password: &str,
    ) -> Result<String, AccountError> {
        let username = validate_new_username(username, store, &self.config)?;
        validate_new_password(password, &self.config)?;

        store.insert(username.clone(), password.to_string());
        self.credentials.save(store)?;

        info!("Created account for {}", username);
        Ok(username)
    }

    /// Checks credentials and returns the logged-in identity on success.
    ///
    /// Read-only; the comparison is exact and case-sensitive, and the
    /// password is never trimmed.
    pub fn authenticate(
        &self,
        store: &Store,
        username: &str,
        password: &str,
    ) -> Result<String, AccountError> {
        let username = username.trim();
        match store.get(username) {
            Some(stored) if stored == password => {
                info!("User {} logged in", username);
                Ok(username.to_string())
            }
            Some(_) => Err(AuthError::InvalidPassword(username.to_string()).into()),
            None => Err(AuthError::UserNotFound(username.to_string()).into()),
        }
    }

    /// Replaces the stored password for `current_user` and persists.
    pub fn change_password(
        &self,
        store: &mut Store,
        current_user: &str,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), AccountError> {
        match store.get(current_user) {
            Some(stored) if stored != old_password => {
                return Err(AuthError::InvalidPassword(current_user.to_string()).into());
            }
            Some(_) => {}
            None => return Err(AuthError::UserNotFound(current_user.to_string()).into()),
        }

        validate_new_password(new_password, &self.config)?;
        if new_password != confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        store.insert(current_user.to_string(), new_password.to_string());
        self.credentials.save(store)?;

        info!("Password updated for {}", current_user);
        Ok(())
    }

    /// Moves `current_user`'s record to a new username and persists.
    ///
    /// The new name passes the same checks as account creation; renaming to
    /// the current name is rejected as a duplicate. Returns the new username,
    /// which the caller must adopt as its session identity.
    pub fn change_username(
        &self,
        store: &mut Store,
        current_user: &str,
        new_username: &str,
    ) -> Result<String, AccountError> {
        let new_username = validate_new_username(new_username, store, &self.config)?;

        let record = store
            .remove(current_user)
            .ok_or_else(|| AuthError::UserNotFound(current_user.to_string()))?;
        store.insert(new_username.clone(), record.password);
        self.credentials.save(store)?;

        info!("Username changed from {} to {}", current_user, new_username);
        Ok(new_username)
    }

    /// Deletes `current_user`'s account if confirmed.
    ///
    /// Without confirmation nothing is mutated and `false` is returned. On a
    /// confirmed delete the caller must transition its session to logged out.
    pub fn delete_account(
        &self,
        store: &mut Store,
        current_user: &str,
        confirmed: bool,
    ) -> Result<bool, AccountError> {
        if !confirmed {
            info!("Account deletion cancelled for {}", current_user);
            return Ok(false);
        }

        store
            .remove(current_user)
            .ok_or_else(|| AuthError::UserNotFound(current_user.to_string()))?;
        self.credentials.save(store)?;

        info!("Account {} deleted", current_user);
        Ok(true)
    }
}

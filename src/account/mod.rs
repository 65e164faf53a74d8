//! Account lifecycle
//!
//! Handles account creation, authentication, and credential mutation on top
//! of the credential store.

pub mod service;
pub mod validator;

pub use service::AccountService;
pub use validator::{validate_new_password, validate_new_username};

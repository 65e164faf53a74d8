//! Error handling
//!
//! Defines error types and handling for the account manager.

pub mod types;

pub use types::*;

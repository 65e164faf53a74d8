//! Credential storage
//!
//! In-memory store types and durable persistence of the backing file.

pub mod persistence;
pub mod records;

pub use persistence::{CredentialStore, DELIMITER};
pub use records::{Record, Store};

pub mod account;
pub mod config;
pub mod error;
pub mod session;
pub mod store;

pub use account::AccountService;
pub use config::ManagerConfig;
pub use error::AccountError;
pub use session::Session;
pub use store::{CredentialStore, Store};

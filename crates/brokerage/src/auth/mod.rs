//! Credential management: hashing, the account store, and the register /
//! login / reset-password operations.

pub mod domain;
pub mod hashing;
pub mod service;
pub mod store;

pub use domain::{
    AuthMode, RegistrationRequest, Role, SecurityAnswers, SessionIdentity, UserRecord,
};
pub use service::{login, register, reset_password, AuthError};
pub use store::CredentialStore;

//! `storefront-auth` — user registration and credential verification.
//!
//! This crate is decoupled from HTTP; it only knows about a key/value store
//! of usernames to password digests.

pub mod credentials;
pub mod service;

pub use credentials::{PasswordDigest, Username};
pub use service::{AuthService, INVALID_CREDENTIALS, USERNAME_TAKEN};

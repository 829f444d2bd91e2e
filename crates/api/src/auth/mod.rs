//! Credentials and sessions.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`session`] -- Signed session tokens carrying the user's role.

pub mod password;
pub mod session;

//! Request extractors for sessions and roles.
//!
//! - [`auth::Session`] -- the caller's verified session.
//! - [`rbac::RequireAdmin`] / [`rbac::RequireClient`] -- role gates.

pub mod auth;
pub mod rbac;

//! Request handlers.
//!
//! Each submodule serves one resource. Handlers delegate persistence to the
//! repositories in `clientdesk_db` and map errors via [`AppError`](crate::error::AppError).

pub mod admin;
pub mod auth;
pub mod callback;
pub mod dashboard;
pub mod onboarding;

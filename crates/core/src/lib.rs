//! Domain types and rules for the client onboarding backend.
//!
//! This crate has no IO: it defines the error taxonomy, request/payload
//! schemas exchanged with clients and the automation system, and the small
//! pure helpers (identifier generation, secret checks, link grouping) used
//! by the persistence and HTTP layers.

pub mod callback;
pub mod client_id;
pub mod error;
pub mod handoff;
pub mod links;
pub mod onboarding;
pub mod roles;
pub mod secret;
pub mod types;
pub mod webhook_log;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts

pub mod activity_log;
pub mod client;
pub mod client_link;
pub mod status;
pub mod user;
pub mod webhook_log;

//! Automation handoff and audit trail.
//!
//! - [`AuditLog`]: append-only writer for the `webhook_logs` table, with a
//!   best-effort variant for failure paths that must not fail themselves.
//! - [`AutomationDispatcher`]: the single outbound POST made after
//!   onboarding, audited as success or failure.
//! - [`spawn_handoff`]: runs a dispatch as a detached background task.

pub mod audit;
pub mod dispatcher;
pub mod task;

pub use audit::AuditLog;
pub use dispatcher::{AutomationDispatcher, DispatchError, DEFAULT_TIMEOUT};
pub use task::spawn_handoff;

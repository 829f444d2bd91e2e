//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async data-access methods.
//! Methods that take part in multi-statement transactions accept any
//! [`sqlx::PgExecutor`], so callers can pass either `&PgPool` or `&mut *tx`.

pub mod activity_log_repo;
pub mod client_link_repo;
pub mod client_repo;
pub mod link_batch_repo;
pub mod onboarding_repo;
pub mod user_repo;
pub mod webhook_log_repo;

pub use activity_log_repo::ActivityLogRepo;
pub use client_link_repo::ClientLinkRepo;
pub use client_repo::ClientRepo;
pub use link_batch_repo::{LinkBatch, LinkBatchRepo};
pub use onboarding_repo::OnboardingRepo;
pub use user_repo::UserRepo;
pub use webhook_log_repo::WebhookLogRepo;

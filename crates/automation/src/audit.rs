//! Writer for the automation audit trail.

use clientdesk_db::models::webhook_log::{CreateWebhookLog, WebhookLog};
use clientdesk_db::repositories::WebhookLogRepo;
use clientdesk_db::DbPool;

/// Appends entries to `webhook_logs`.
#[derive(Clone)]
pub struct AuditLog {
    pool: DbPool,
}

impl AuditLog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Append an entry, propagating database errors.
    pub async fn record(&self, entry: &CreateWebhookLog) -> Result<WebhookLog, sqlx::Error> {
        WebhookLogRepo::create(&self.pool, entry).await
    }

    /// Append an entry, logging instead of returning a failure.
    ///
    /// Used when the caller is already reporting a different error and the
    /// audit write must not replace it.
    pub async fn record_best_effort(&self, entry: &CreateWebhookLog) {
        if let Err(e) = self.record(entry).await {
            tracing::error!(
                error = %e,
                webhook_type = %entry.webhook_type,
                direction = entry.direction.as_str(),
                unique_client_id = entry.unique_client_id.as_deref(),
                "Failed to write automation audit entry"
            );
        }
    }
}

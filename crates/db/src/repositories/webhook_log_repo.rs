//! Repository for the append-only `webhook_logs` audit table.

use clientdesk_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::webhook_log::{CreateWebhookLog, WebhookLog};

const COLUMNS: &str = "id, client_id, unique_client_id, direction, webhook_type, payload, \
    status, error_message, created_at";

/// Append and read automation audit entries. There is no update or delete.
pub struct WebhookLogRepo;

impl WebhookLogRepo {
    /// Append an audit entry.
    pub async fn create<'e, E>(executor: E, input: &CreateWebhookLog) -> Result<WebhookLog, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO webhook_logs
                (client_id, unique_client_id, direction, webhook_type, payload, status,
                 error_message)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WebhookLog>(&query)
            .bind(input.client_id)
            .bind(&input.unique_client_id)
            .bind(input.direction.as_str())
            .bind(&input.webhook_type)
            .bind(&input.payload)
            .bind(input.status.as_str())
            .bind(&input.error_message)
            .fetch_one(executor)
            .await
    }

    /// Entries correlated to a client by internal id, oldest first.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<WebhookLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM webhook_logs
             WHERE client_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, WebhookLog>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Entries correlated by unique client identifier, oldest first.
    ///
    /// Covers rows whose client could not be resolved and so carry no
    /// internal id.
    pub async fn list_for_unique_client_id(
        pool: &PgPool,
        unique_client_id: &str,
    ) -> Result<Vec<WebhookLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM webhook_logs
             WHERE unique_client_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, WebhookLog>(&query)
            .bind(unique_client_id)
            .fetch_all(pool)
            .await
    }
}

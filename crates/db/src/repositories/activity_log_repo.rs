//! Repository for the `activity_logs` table.

use clientdesk_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::activity_log::{ActivityLog, CreateActivityLog};

const COLUMNS: &str = "id, client_id, activity_type, activity_description, metadata, created_at";

pub struct ActivityLogRepo;

impl ActivityLogRepo {
    pub async fn create<'e, E>(executor: E, input: &CreateActivityLog) -> Result<ActivityLog, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO activity_logs (client_id, activity_type, activity_description, metadata)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(input.client_id)
            .bind(&input.activity_type)
            .bind(&input.activity_description)
            .bind(&input.metadata)
            .fetch_one(executor)
            .await
    }

    /// A client's activity history, newest first.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<ActivityLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_logs
             WHERE client_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ActivityLog>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }
}

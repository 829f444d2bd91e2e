//! Repository for the `client_links` table.

use clientdesk_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::client_link::{ClientLink, CreateClientLink};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, link_type, title, url, description, icon, \
    generated_by_automation, workflow_id, created_at";

/// Provides insert and listing operations for client resource links.
pub struct ClientLinkRepo;

impl ClientLinkRepo {
    /// Insert a link, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &CreateClientLink) -> Result<ClientLink, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO client_links
                (client_id, link_type, title, url, description, icon,
                 generated_by_automation, workflow_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientLink>(&query)
            .bind(input.client_id)
            .bind(input.link_type.as_str())
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.generated_by_automation)
            .bind(&input.workflow_id)
            .fetch_one(executor)
            .await
    }

    /// List a client's links, newest first.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<ClientLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM client_links
             WHERE client_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ClientLink>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Count a client's links.
    pub async fn count_for_client(pool: &PgPool, client_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM client_links WHERE client_id = $1")
            .bind(client_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

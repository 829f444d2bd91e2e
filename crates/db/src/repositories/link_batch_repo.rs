//! Atomic persistence of a callback's link batch.

use clientdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::activity_log::CreateActivityLog;
use crate::models::client_link::{ClientLink, CreateClientLink};
use crate::models::status::ClientStatus;
use crate::models::webhook_log::CreateWebhookLog;
use crate::repositories::{ActivityLogRepo, ClientLinkRepo, ClientRepo, WebhookLogRepo};

/// Everything one successful callback writes.
#[derive(Debug, Clone)]
pub struct LinkBatch {
    pub client_id: DbId,
    pub links: Vec<CreateClientLink>,
    pub activity: CreateActivityLog,
    pub audit: CreateWebhookLog,
}

pub struct LinkBatchRepo;

impl LinkBatchRepo {
    /// Flip the client to `active`, insert the links, then append the
    /// activity and audit entries in a single transaction.
    ///
    /// Returns `Ok(None)` (and writes nothing) if the client row is gone.
    pub async fn commit(
        pool: &PgPool,
        batch: &LinkBatch,
    ) -> Result<Option<Vec<ClientLink>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !ClientRepo::set_status(&mut *tx, batch.client_id, ClientStatus::Active).await? {
            tx.rollback().await?;
            return Ok(None);
        }

        let mut created = Vec::with_capacity(batch.links.len());
        for link in &batch.links {
            created.push(ClientLinkRepo::create(&mut *tx, link).await?);
        }

        ActivityLogRepo::create(&mut *tx, &batch.activity).await?;
        WebhookLogRepo::create(&mut *tx, &batch.audit).await?;

        tx.commit().await?;
        Ok(Some(created))
    }
}

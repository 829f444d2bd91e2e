//! Automation audit log models and DTOs.

use clientdesk_core::types::{DbId, Timestamp};
use clientdesk_core::webhook_log::{Direction, ExchangeStatus};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `webhook_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookLog {
    pub id: DbId,
    pub client_id: Option<DbId>,
    pub unique_client_id: Option<String>,
    pub direction: String,
    pub webhook_type: String,
    pub payload: serde_json::Value,
    pub status: String,
    pub error_message: Option<String>,
    pub created_at: Timestamp,
}

/// Input for appending an audit entry.
///
/// At least one of `client_id` / `unique_client_id` must be set; the table's
/// `ck_webhook_logs_correlation` constraint rejects rows with neither.
#[derive(Debug, Clone)]
pub struct CreateWebhookLog {
    pub client_id: Option<DbId>,
    pub unique_client_id: Option<String>,
    pub direction: Direction,
    pub webhook_type: String,
    pub payload: serde_json::Value,
    pub status: ExchangeStatus,
    pub error_message: Option<String>,
}

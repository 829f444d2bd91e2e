//! Client activity log models and DTOs.

use clientdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `activity_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: DbId,
    pub client_id: DbId,
    pub activity_type: String,
    pub activity_description: String,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
}

/// Input for appending an activity entry.
#[derive(Debug, Clone)]
pub struct CreateActivityLog {
    pub client_id: DbId,
    pub activity_type: String,
    pub activity_description: String,
    pub metadata: serde_json::Value,
}

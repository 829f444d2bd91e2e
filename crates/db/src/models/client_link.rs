//! Client link entity model and DTOs.

use clientdesk_core::links::LinkType;
use clientdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A resource link row from the `client_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientLink {
    pub id: DbId,
    pub client_id: DbId,
    pub link_type: String,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub generated_by_automation: bool,
    pub workflow_id: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a link.
#[derive(Debug, Clone)]
pub struct CreateClientLink {
    pub client_id: DbId,
    pub link_type: LinkType,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub generated_by_automation: bool,
    pub workflow_id: Option<String>,
}

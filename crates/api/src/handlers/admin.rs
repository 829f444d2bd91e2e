//! Admin-only client directory listing.

use axum::extract::State;
use axum::Json;
use clientdesk_core::types::{DbId, Timestamp};
use clientdesk_db::models::client::ClientSummary;
use clientdesk_db::models::status::client_status_name;
use clientdesk_db::repositories::ClientRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// One client as shown in the admin listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminClientItem {
    pub id: DbId,
    pub unique_client_id: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub email: String,
    pub status: &'static str,
    pub onboarding_completed: bool,
    pub onboarding_completed_at: Option<Timestamp>,
    pub monthly_budget_range: String,
    pub created_at: Timestamp,
    pub last_login: Option<Timestamp>,
    pub link_count: i64,
    pub activity_count: i64,
    pub website_url: Option<String>,
}

impl From<ClientSummary> for AdminClientItem {
    fn from(row: ClientSummary) -> Self {
        Self {
            id: row.id,
            unique_client_id: row.unique_client_id,
            company_name: row.company_name,
            industry: row.industry,
            email: row.email,
            status: client_status_name(row.status_id),
            onboarding_completed: row.onboarding_completed,
            onboarding_completed_at: row.onboarding_completed_at,
            monthly_budget_range: row.monthly_budget_range,
            created_at: row.created_at,
            last_login: row.last_login_at,
            link_count: row.link_count,
            activity_count: row.activity_count,
            website_url: row.website_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClientListResponse {
    pub clients: Vec<AdminClientItem>,
    pub total: usize,
}

/// GET /api/admin/clients
///
/// Every client, newest first.
pub async fn list_clients(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<ClientListResponse>> {
    let clients: Vec<AdminClientItem> = ClientRepo::list_summaries(&state.pool)
        .await?
        .into_iter()
        .map(AdminClientItem::from)
        .collect();

    tracing::debug!(admin_id = admin.user_id, count = clients.len(), "Listed clients");

    Ok(Json(ClientListResponse {
        total: clients.len(),
        clients,
    }))
}

//! Handler for the client's own dashboard.

use axum::extract::State;
use axum::Json;
use clientdesk_core::error::CoreError;
use clientdesk_core::links::GroupedLinks;
use clientdesk_core::types::{DbId, Timestamp};
use clientdesk_db::models::client_link::ClientLink;
use clientdesk_db::models::status::client_status_name;
use clientdesk_db::repositories::{ClientLinkRepo, ClientRepo, UserRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireClient;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardClient {
    pub id: DbId,
    pub unique_client_id: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub status: &'static str,
    pub onboarding_completed: bool,
    pub onboarding_completed_at: Option<Timestamp>,
    pub email: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_links: usize,
    pub document_count: usize,
    pub project_count: usize,
    pub data_count: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub client: DashboardClient,
    pub links: GroupedLinks<ClientLink>,
    pub stats: DashboardStats,
}

/// GET /api/client/dashboard
///
/// The caller's client record, links grouped by category (newest first
/// within each group), and per-category counts.
pub async fn get_dashboard(
    State(state): State<AppState>,
    RequireClient(user): RequireClient,
) -> AppResult<Json<DashboardResponse>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Client",
            key: format!("for user {}", user.user_id),
        })
    };

    let client = ClientRepo::find_by_user_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(not_found)?;
    let owner = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(not_found)?;

    let links = ClientLinkRepo::list_for_client(&state.pool, client.id).await?;
    let links = GroupedLinks::partition(links, |link| link.link_type.as_str());

    let stats = DashboardStats {
        total_links: links.total(),
        document_count: links.documents.len(),
        project_count: links.projects.len(),
        data_count: links.data.len(),
    };

    Ok(Json(DashboardResponse {
        client: DashboardClient {
            id: client.id,
            unique_client_id: client.unique_client_id,
            company_name: client.company_name,
            industry: client.industry,
            status: client_status_name(client.status_id),
            onboarding_completed: client.onboarding_completed,
            onboarding_completed_at: client.onboarding_completed_at,
            email: owner.email,
            created_at: client.created_at,
        },
        links,
        stats,
    }))
}

//! Role gates.
//!
//! Both extractors resolve the [`Session`] first, so a missing or invalid
//! session is a 401 before the role is looked at.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use clientdesk_core::error::CoreError;
use clientdesk_core::roles::Role;

use super::auth::Session;
use crate::error::AppError;
use crate::state::AppState;

async fn session_with_role(
    parts: &mut Parts,
    state: &AppState,
    role: Role,
) -> Result<Session, AppError> {
    let session = Session::from_request_parts(parts, state).await?;
    if session.role != role {
        return Err(CoreError::Forbidden(format!("{role} role required")).into());
    }
    Ok(session)
}

/// Admin sessions only; 403 otherwise.
pub struct RequireAdmin(pub Session);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_with_role(parts, state, Role::Admin).await.map(RequireAdmin)
    }
}

/// Client sessions only; 403 otherwise.
///
/// Admins are rejected too: the dashboard reads the caller's own client
/// record, which an admin does not have.
pub struct RequireClient(pub Session);

impl FromRequestParts<AppState> for RequireClient {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_with_role(parts, state, Role::Client).await.map(RequireClient)
    }
}

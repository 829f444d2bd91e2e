//! Session extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use clientdesk_core::error::CoreError;
use clientdesk_core::roles::Role;
use clientdesk_core::types::DbId;

use crate::auth::session;
use crate::error::AppError;
use crate::state::AppState;

/// The caller's session, read from `Authorization: Bearer <token>`.
///
/// Any missing, malformed, expired or foreign token is a 401.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: DbId,
    pub role: Role,
}

fn bearer_token(parts: &Parts) -> Result<&str, CoreError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| CoreError::Unauthorized("Missing session token".into()))?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| CoreError::Unauthorized("Malformed Authorization header".into()))
}

impl FromRequestParts<AppState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = session::verify(token, &state.config.session).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            CoreError::Unauthorized("Invalid or expired session".into())
        })?;

        Ok(Session {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

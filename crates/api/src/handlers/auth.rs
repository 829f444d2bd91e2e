//! Handler for `/auth/login`.

use axum::extract::State;
use axum::Json;
use clientdesk_core::error::CoreError;
use clientdesk_core::roles::Role;
use clientdesk_core::types::DbId;
use clientdesk_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::auth::session;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub role: Role,
}

/// POST /api/auth/login
///
/// Authenticate with email + password and receive a session token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let email = input.email.trim().to_lowercase();
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Failed login attempt");
        return Err(invalid());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let role = Role::parse(&user.role).ok_or_else(|| {
        AppError::InternalError(format!("User {} has unknown role '{}'", user.id, user.role))
    })?;
    let issued = session::issue(user.id, role, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Session signing error: {e}")))?;

    Ok(Json(LoginResponse {
        access_token: issued.token,
        expires_in: issued.expires_in,
        user: UserInfo {
            id: user.id,
            email: user.email,
            role,
        },
    }))
}

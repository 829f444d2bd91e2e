//! Handler for the public onboarding intake.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use clientdesk_automation::spawn_handoff;
use clientdesk_core::client_id::generate_unique_client_id;
use clientdesk_core::error::CoreError;
use clientdesk_core::handoff::HandoffPayload;
use clientdesk_core::onboarding::OnboardingSubmission;
use clientdesk_core::roles::ROLE_CLIENT;
use clientdesk_core::types::DbId;
use clientdesk_db::models::client::CreateClient;
use clientdesk_db::models::user::CreateUser;
use clientdesk_db::repositories::{ClientRepo, OnboardingRepo, UserRepo};
use clientdesk_db::DbPool;
use serde::Serialize;

use crate::auth::password::hash_password;
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Attempts at drawing an unused unique client identifier before giving up.
const MAX_CLIENT_ID_ATTEMPTS: usize = 5;

const DUPLICATE_EMAIL: &str = "User with this email already exists";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponse {
    pub success: bool,
    pub message: &'static str,
    pub user_id: DbId,
    pub client_id: DbId,
    pub unique_client_id: String,
}

/// POST /api/onboarding/submit
///
/// Validate the submission, create the user and client in one transaction,
/// then hand the profile to the automation system in the background. The
/// response never waits on, or reflects, the handoff.
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<OnboardingSubmission>,
) -> AppResult<Json<OnboardingResponse>> {
    let registration = input.into_registration()?;

    if UserRepo::find_by_email(&state.pool, &registration.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(DUPLICATE_EMAIL.into())));
    }

    let password_hash = hash_password(&registration.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let new_user = CreateUser {
        email: registration.email,
        password_hash,
        role: ROLE_CLIENT.to_string(),
    };
    let new_client = CreateClient {
        unique_client_id: allocate_unique_client_id(&state.pool).await?,
        profile: registration.profile,
    };

    // The existence check above leaves a window for a concurrent signup with
    // the same email; the unique constraint closes it.
    let (user, client) = match OnboardingRepo::register(&state.pool, &new_user, &new_client).await
    {
        Ok(created) => created,
        Err(e) if is_unique_violation(&e, "uq_users_email") => {
            return Err(AppError::Core(CoreError::Conflict(DUPLICATE_EMAIL.into())));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        user_id = user.id,
        client_id = client.id,
        unique_client_id = %client.unique_client_id,
        "Client onboarded"
    );

    match &state.dispatcher {
        Some(dispatcher) => spawn_handoff(
            Arc::clone(dispatcher),
            HandoffPayload::new(
                client.unique_client_id.clone(),
                client.id,
                user.email.clone(),
                new_client.profile,
            ),
        ),
        None => tracing::debug!(
            unique_client_id = %client.unique_client_id,
            "No automation endpoint configured, skipping handoff"
        ),
    }

    Ok(Json(OnboardingResponse {
        success: true,
        message: "Onboarding completed successfully",
        user_id: user.id,
        client_id: client.id,
        unique_client_id: client.unique_client_id,
    }))
}

/// Draw identifiers until one is not yet taken.
async fn allocate_unique_client_id(pool: &DbPool) -> AppResult<String> {
    for _ in 0..MAX_CLIENT_ID_ATTEMPTS {
        let candidate = generate_unique_client_id();
        if !ClientRepo::unique_client_id_exists(pool, &candidate).await? {
            return Ok(candidate);
        }
        tracing::debug!(candidate = %candidate, "Unique client identifier taken, redrawing");
    }
    Err(AppError::Core(CoreError::Internal(
        "Could not allocate a unique client identifier".into(),
    )))
}

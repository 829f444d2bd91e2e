//! Handler for callbacks from the automation system.
//!
//! Flow: shared-secret check on the raw body, schema and shape check, client
//! resolution, then one transaction that stores the links, activates the
//! client, and appends the activity and audit entries. Failures after the
//! shape check (other than an unknown client) leave a `failed` audit entry
//! behind.

use axum::extract::State;
use axum::Json;
use clientdesk_core::callback::{
    audit_snapshot, presented_secret, without_nul, CallbackPayload, ClientRef, ValidatedCallback,
};
use clientdesk_core::error::CoreError;
use clientdesk_core::secret::check_shared_secret;
use clientdesk_core::types::DbId;
use clientdesk_core::webhook_log::{
    activity_types, links_generated_description, webhook_types, Direction, ExchangeStatus,
};
use clientdesk_db::models::activity_log::CreateActivityLog;
use clientdesk_db::models::client::Client;
use clientdesk_db::models::client_link::CreateClientLink;
use clientdesk_db::models::webhook_log::CreateWebhookLog;
use clientdesk_db::repositories::{ClientRepo, LinkBatch, LinkBatchRepo};
use serde::Serialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackResponse {
    pub success: bool,
    pub message: &'static str,
    pub links_created: usize,
    pub client_id: DbId,
}

/// POST /api/webhooks/callback
pub async fn receive(
    State(state): State<AppState>,
    AppJson(body): AppJson<serde_json::Value>,
) -> AppResult<Json<CallbackResponse>> {
    let check = check_shared_secret(
        state.config.automation.callback_secret.as_deref(),
        presented_secret(&body),
    );
    if !check.is_allowed() {
        tracing::warn!("Rejected automation callback with a missing or wrong secret");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid webhook secret".into(),
        )));
    }

    let snapshot = audit_snapshot(&body);
    let validated = CallbackPayload::from_json(body)?.validate_shape()?;

    let client = match ClientRepo::resolve(&state.pool, &validated.target).await {
        Ok(Some(client)) => client,
        Ok(None) => return Err(client_not_found(&validated.target)),
        Err(e) => {
            let entry = failed_entry(
                validated.target.client_id,
                validated.target.unique_client_id.clone(),
                &snapshot,
                &e,
            );
            state.audit.record_best_effort(&entry).await;
            return Err(e.into());
        }
    };

    let batch = build_batch(&client, &validated, &snapshot);
    let links_created = batch.links.len();

    match LinkBatchRepo::commit(&state.pool, &batch).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(client_not_found(&validated.target)),
        Err(e) => {
            let entry = failed_entry(
                Some(client.id),
                Some(client.unique_client_id.clone()),
                &snapshot,
                &e,
            );
            state.audit.record_best_effort(&entry).await;
            return Err(e.into());
        }
    }

    tracing::info!(
        client_id = client.id,
        unique_client_id = %client.unique_client_id,
        links_created,
        "Automation links saved"
    );

    Ok(Json(CallbackResponse {
        success: true,
        message: "Links saved successfully",
        links_created,
        client_id: client.id,
    }))
}

fn build_batch(
    client: &Client,
    validated: &ValidatedCallback,
    snapshot: &serde_json::Value,
) -> LinkBatch {
    let links: Vec<CreateClientLink> = validated
        .links
        .iter()
        .map(|link| CreateClientLink {
            client_id: client.id,
            link_type: link.link_type,
            title: link.title.clone(),
            url: link.url.clone(),
            description: link.description.clone(),
            icon: link.icon.clone(),
            generated_by_automation: true,
            workflow_id: link.workflow_id.clone(),
        })
        .collect();

    let link_types: Vec<&str> = links.iter().map(|l| l.link_type.as_str()).collect();

    LinkBatch {
        client_id: client.id,
        activity: CreateActivityLog {
            client_id: client.id,
            activity_type: activity_types::LINKS_GENERATED.to_string(),
            activity_description: links_generated_description(links.len()),
            metadata: json!({
                "linkCount": links.len(),
                "linkTypes": link_types,
            }),
        },
        audit: CreateWebhookLog {
            client_id: Some(client.id),
            unique_client_id: Some(client.unique_client_id.clone()),
            direction: Direction::Inbound,
            webhook_type: webhook_types::LINKS_GENERATED.to_string(),
            payload: snapshot.clone(),
            status: ExchangeStatus::Success,
            error_message: None,
        },
        links,
    }
}

fn failed_entry(
    client_id: Option<DbId>,
    unique_client_id: Option<String>,
    snapshot: &serde_json::Value,
    error: &sqlx::Error,
) -> CreateWebhookLog {
    CreateWebhookLog {
        client_id,
        unique_client_id: unique_client_id.map(|id| without_nul(&id)),
        direction: Direction::Inbound,
        webhook_type: webhook_types::LINKS_GENERATED.to_string(),
        payload: snapshot.clone(),
        status: ExchangeStatus::Failed,
        error_message: Some(error.to_string()),
    }
}

fn client_not_found(target: &ClientRef) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Client",
        key: target.display_key(),
    })
}

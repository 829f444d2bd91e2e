//! Outbound handoff to the automation system.
//!
//! [`AutomationDispatcher`] POSTs a JSON-encoded [`HandoffPayload`] to the
//! configured endpoint exactly once. There is no retry: the outcome is
//! recorded in the audit trail and an operator re-triggers by hand.

use std::time::Duration;

use clientdesk_core::handoff::HandoffPayload;
use clientdesk_core::types::DbId;
use clientdesk_core::webhook_log::{webhook_types, Direction, ExchangeStatus};
use clientdesk_db::models::webhook_log::CreateWebhookLog;
use serde::Serialize;
use serde_json::json;

use crate::audit::AuditLog;

/// HTTP request timeout for the handoff POST unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for handoff failures.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The automation endpoint returned a non-2xx status code.
    #[error("Automation endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// AutomationDispatcher
// ---------------------------------------------------------------------------

/// Sends onboarding handoffs to the automation endpoint.
pub struct AutomationDispatcher {
    client: reqwest::Client,
    url: String,
    audit: AuditLog,
}

impl AutomationDispatcher {
    /// Build a dispatcher for `url` with a per-request `timeout`.
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        audit: AuditLog,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            audit,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the handoff and record the outcome.
    ///
    /// Exactly one outbound audit entry is appended per call, `success` on a
    /// 2xx response and `failed` (with the error text) otherwise. The audit
    /// write itself is best-effort.
    pub async fn dispatch(&self, payload: &HandoffPayload) -> Result<(), DispatchError> {
        let result = self.try_send(payload).await;

        let (status, error_message) = match &result {
            Ok(()) => (ExchangeStatus::Success, None),
            Err(e) => (ExchangeStatus::Failed, Some(e.to_string())),
        };

        self.audit
            .record_best_effort(&CreateWebhookLog {
                client_id: Some(payload.client_id),
                unique_client_id: Some(payload.unique_client_id.clone()),
                direction: Direction::Outbound,
                webhook_type: webhook_types::ONBOARDING_COMPLETE.to_string(),
                payload: audit_payload(payload, &payload.unique_client_id, payload.client_id),
                status,
                error_message,
            })
            .await;

        if result.is_ok() {
            tracing::info!(
                unique_client_id = %payload.unique_client_id,
                "Automation handoff delivered"
            );
        }

        result
    }

    /// Execute a single POST request and check the response status.
    async fn try_send(&self, payload: &HandoffPayload) -> Result<(), DispatchError> {
        let response = self.client.post(&self.url).json(payload).send().await?;
        if !response.status().is_success() {
            return Err(DispatchError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

/// Audit copy of an outbound payload.
///
/// If the payload cannot be encoded, the entry keeps the correlation keys and
/// the encoding error instead.
fn audit_payload<T: Serialize>(
    payload: &T,
    unique_client_id: &str,
    client_id: DbId,
) -> serde_json::Value {
    serde_json::to_value(payload).unwrap_or_else(|e| {
        tracing::warn!(
            error = %e,
            unique_client_id,
            "Could not encode handoff payload for the audit log"
        );
        json!({
            "uniqueClientId": unique_client_id,
            "clientId": client_id,
            "encodingError": e.to_string(),
        })
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Detached execution of the onboarding handoff.

use std::sync::Arc;

use clientdesk_core::handoff::HandoffPayload;

use crate::dispatcher::AutomationDispatcher;

/// Run the handoff in the background.
///
/// The caller gets no handle and never observes the outcome; onboarding has
/// already succeeded by the time this is called. Failures end up in the
/// audit trail and the log.
pub fn spawn_handoff(dispatcher: Arc<AutomationDispatcher>, payload: HandoffPayload) {
    tokio::spawn(async move {
        if let Err(e) = dispatcher.dispatch(&payload).await {
            tracing::warn!(
                unique_client_id = %payload.unique_client_id,
                url = %dispatcher.url(),
                error = %e,
                "Automation handoff failed"
            );
        }
    });
}

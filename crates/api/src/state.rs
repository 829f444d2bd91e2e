use std::sync::Arc;

use clientdesk_automation::{AuditLog, AutomationDispatcher};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: clientdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Writer for the automation audit trail.
    pub audit: AuditLog,
    /// Outbound handoff dispatcher; `None` when no automation URL is configured.
    pub dispatcher: Option<Arc<AutomationDispatcher>>,
}

impl AppState {
    /// Assemble state from a pool and config, building the dispatcher when an
    /// automation endpoint is configured.
    pub fn new(pool: clientdesk_db::DbPool, config: ServerConfig) -> Result<Self, reqwest::Error> {
        let audit = AuditLog::new(pool.clone());
        let dispatcher = match &config.automation.onboarding_webhook_url {
            Some(url) => Some(Arc::new(AutomationDispatcher::new(
                url.clone(),
                config.automation.timeout(),
                audit.clone(),
            )?)),
            None => None,
        };

        Ok(Self {
            pool,
            config: Arc::new(config),
            audit,
            dispatcher,
        })
    }
}

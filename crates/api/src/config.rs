use std::time::Duration;

use crate::auth::session::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL and session secret have defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Session token signing key and lifetime.
    pub session: SessionConfig,
    /// Automation handoff and callback settings.
    pub automation: AutomationConfig,
}

/// Settings for the exchange with the external automation system.
#[derive(Debug, Clone, Default)]
pub struct AutomationConfig {
    /// Endpoint receiving the onboarding handoff. `None` disables dispatch.
    pub onboarding_webhook_url: Option<String>,
    /// Shared secret expected on callbacks. `None` accepts every callback.
    pub callback_secret: Option<String>,
    /// Timeout for the outbound handoff request (default: `10`).
    pub timeout_secs: u64,
}

/// Default outbound handoff timeout in seconds.
const DEFAULT_AUTOMATION_TIMEOUT_SECS: u64 = 10;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            session: SessionConfig::from_env(),
            automation: AutomationConfig::from_env(),
        }
    }
}

impl AutomationConfig {
    /// Load automation settings from environment variables.
    ///
    /// | Env Var                             | Default |
    /// |-------------------------------------|---------|
    /// | `AUTOMATION_ONBOARDING_WEBHOOK_URL` | unset   |
    /// | `AUTOMATION_CALLBACK_SECRET`        | unset   |
    /// | `AUTOMATION_TIMEOUT_SECS`           | `10`    |
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        let timeout_secs: u64 = std::env::var("AUTOMATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_AUTOMATION_TIMEOUT_SECS.to_string())
            .parse()
            .expect("AUTOMATION_TIMEOUT_SECS must be a valid u64");

        Self {
            onboarding_webhook_url: non_empty(std::env::var("AUTOMATION_ONBOARDING_WEBHOOK_URL").ok()),
            callback_secret: non_empty(std::env::var("AUTOMATION_CALLBACK_SECRET").ok()),
            timeout_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

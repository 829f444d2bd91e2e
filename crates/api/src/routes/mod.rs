pub mod admin;
pub mod auth;
pub mod client;
pub mod health;
pub mod onboarding;
pub mod webhooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login              login (public)
/// /admin/clients           client directory (admin only)
/// /client/dashboard        own dashboard (client only)
/// /onboarding/submit       onboarding intake (public)
/// /webhooks/callback       automation callback (shared secret)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/client", client::router())
        .nest("/onboarding", onboarding::router())
        .nest("/webhooks", webhooks::router())
}

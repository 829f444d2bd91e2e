//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET /clients   -> list_clients (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/clients", get(admin::list_clients))
}

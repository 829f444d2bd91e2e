use axum::routing::post;
use axum::Router;

use crate::handlers::callback;
use crate::state::AppState;

/// Routes mounted at `/webhooks`.
///
/// ```text
/// POST /callback -> receive (shared secret in body)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/callback", post(callback::receive))
}

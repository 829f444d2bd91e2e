use axum::routing::post;
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Routes mounted at `/onboarding`.
///
/// ```text
/// POST /submit   -> submit (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/submit", post(onboarding::submit))
}

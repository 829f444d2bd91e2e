#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use clientdesk_api::auth::password::hash_password;
use clientdesk_api::auth::session::{self, SessionConfig};
use clientdesk_api::config::{AutomationConfig, ServerConfig};
use clientdesk_api::router::build_app_router;
use clientdesk_api::state::AppState;
use clientdesk_core::roles::Role;
use clientdesk_core::types::DbId;
use clientdesk_db::models::user::{CreateUser, User};
use clientdesk_db::repositories::UserRepo;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_CALLBACK_SECRET: &str = "s3cret";

/// Build a test `ServerConfig` with safe defaults and the given automation settings.
pub fn test_config(automation: AutomationConfig) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            ttl_mins: 60,
        },
        automation,
    }
}

/// Automation disabled outbound, callbacks require [`TEST_CALLBACK_SECRET`].
pub fn default_automation() -> AutomationConfig {
    AutomationConfig {
        onboarding_webhook_url: None,
        callback_secret: Some(TEST_CALLBACK_SECRET.to_string()),
        timeout_secs: 10,
    }
}

/// Build the full application router with the default test configuration.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, default_automation())
}

/// Build the full application router with custom automation settings.
pub fn build_test_app_with(pool: PgPool, automation: AutomationConfig) -> Router {
    let config = test_config(automation);
    let state = AppState::new(pool, config.clone()).unwrap();
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A complete onboarding submission for `email`.
pub fn onboarding_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "password123",
        "companyName": "Acme Corp",
        "industry": "Retail",
        "websiteUrl": "https://acme.test",
        "currentChannels": ["seo", "email"],
        "socialPlatforms": ["instagram"],
        "primaryGoal": "More qualified leads",
        "idealCustomerProfile": "Owners of small retail stores",
        "monthlyBudgetRange": "1k-5k",
        "hasMarketingContact": "yes",
        "marketingContactEmail": "marketing@acme.test"
    })
}

/// Onboard a client through the API and return the response JSON.
pub async fn onboard(app: Router, email: &str) -> serde_json::Value {
    let response = post_json(app, "/api/onboarding/submit", onboarding_body(email)).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

/// Insert a user directly, returning the row.
pub async fn create_user(pool: &PgPool, email: &str, role: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hash_password("password123").unwrap(),
            role: role.to_string(),
        },
    )
    .await
    .unwrap()
}

/// A valid session token signed with the test JWT secret.
pub fn token_for(user_id: DbId, role: Role) -> String {
    session::issue(user_id, role, &test_config(default_automation()).session)
        .unwrap()
        .token
}

// ---------------------------------------------------------------------------
// Automation stub
// ---------------------------------------------------------------------------

/// Serve a stub automation endpoint on an ephemeral port.
///
/// `/ok` answers 200, `/slow` stalls for two seconds.
pub async fn spawn_automation_stub() -> String {
    let app = Router::new()
        .route("/ok", post(|| async { StatusCode::OK }))
        .route(
            "/slow",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                StatusCode::OK
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

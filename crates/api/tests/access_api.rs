//! Session and role enforcement for the admin listing and client dashboard,
//! plus the login endpoint that issues session tokens.

mod common;

use axum::http::StatusCode;
use clientdesk_core::roles::{Role, ROLE_ADMIN, ROLE_CLIENT};
use clientdesk_db::repositories::UserRepo;
use common::{body_json, get, get_auth, post_json, token_for, TEST_CALLBACK_SECRET};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_issues_usable_token(pool: PgPool) {
    let json = common::onboard(common::build_test_app(pool.clone()), "login@acme.test").await;
    let user_id = json["userId"].as_i64().unwrap();

    let body = json!({ "email": "LOGIN@acme.test", "password": "password123" });
    let response = post_json(common::build_test_app(pool.clone()), "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let login = body_json(response).await;
    assert_eq!(login["user"]["id"], user_id);
    assert_eq!(login["user"]["role"], "client");
    assert_eq!(login["expiresIn"], 3600);

    let token = login["accessToken"].as_str().unwrap();
    let response = get_auth(common::build_test_app(pool.clone()), "/api/client/dashboard", token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let user = UserRepo::find_by_id(&pool, user_id).await.unwrap().unwrap();
    assert!(user.last_login_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_user(&pool, "wrongpw@acme.test", ROLE_CLIENT).await;

    let body = json!({ "email": "wrongpw@acme.test", "password": "not-the-password" });
    let response = post_json(common::build_test_app(pool), "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let body = json!({ "email": "ghost@acme.test", "password": "whatever1" });
    let response = post_json(common::build_test_app(pool), "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Admin listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_list_requires_session(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/admin/clients").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_list_rejects_invalid_token(pool: PgPool) {
    let response =
        get_auth(common::build_test_app(pool), "/api/admin/clients", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_non_bearer_authorization_is_unauthorized(pool: PgPool) {
    let admin = common::create_user(&pool, "admin@agency.test", ROLE_ADMIN).await;
    let token = token_for(admin.id, Role::Admin);

    let request = axum::http::Request::get("/api/admin/clients")
        .header("authorization", format!("Token {token}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(common::build_test_app(pool), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_list_forbidden_for_clients(pool: PgPool) {
    let client = common::create_user(&pool, "client@acme.test", ROLE_CLIENT).await;
    let token = token_for(client.id, Role::Client);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/admin/clients?role=admin",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_list_returns_clients_with_counts(pool: PgPool) {
    let first = common::onboard(common::build_test_app(pool.clone()), "first@acme.test").await;
    let second = common::onboard(common::build_test_app(pool.clone()), "second@acme.test").await;

    let body = json!({
        "uniqueClientId": first["uniqueClientId"],
        "secret": TEST_CALLBACK_SECRET,
        "links": [{ "type": "google_doc", "title": "Doc", "url": "https://x" }]
    });
    let response =
        post_json(common::build_test_app(pool.clone()), "/api/webhooks/callback", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let admin = common::create_user(&pool, "admin@agency.test", ROLE_ADMIN).await;
    let token = token_for(admin.id, Role::Admin);
    let response = get_auth(common::build_test_app(pool), "/api/admin/clients", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
    let clients = json["clients"].as_array().unwrap();
    assert_eq!(clients.len(), 2);

    // Newest first.
    assert_eq!(clients[0]["id"], second["clientId"]);
    assert_eq!(clients[1]["id"], first["clientId"]);

    let activated = &clients[1];
    assert_eq!(activated["status"], "active");
    assert_eq!(activated["linkCount"], 1);
    assert_eq!(activated["activityCount"], 1);
    assert_eq!(activated["email"], "first@acme.test");
    assert_eq!(activated["monthlyBudgetRange"], "1k-5k");
    assert_eq!(activated["websiteUrl"], "https://acme.test");
    assert!(activated["lastLogin"].is_null());
    assert_eq!(clients[0]["status"], "pending");
}

// ---------------------------------------------------------------------------
// Client dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_requires_session(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/client/dashboard").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_forbidden_for_admins(pool: PgPool) {
    let admin = common::create_user(&pool, "admin@agency.test", ROLE_ADMIN).await;
    let token = token_for(admin.id, Role::Admin);

    let response = get_auth(common::build_test_app(pool), "/api/client/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_without_client_record_is_not_found(pool: PgPool) {
    let user = common::create_user(&pool, "orphan@acme.test", ROLE_CLIENT).await;
    let token = token_for(user.id, Role::Client);

    let response = get_auth(common::build_test_app(pool), "/api/client/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_groups_links(pool: PgPool) {
    let onboarded = common::onboard(common::build_test_app(pool.clone()), "dash@acme.test").await;

    let body = json!({
        "uniqueClientId": onboarded["uniqueClientId"],
        "secret": TEST_CALLBACK_SECRET,
        "links": [
            { "type": "google_doc", "title": "Strategy", "url": "https://docs.test/1" },
            { "type": "google_doc", "title": "Brief", "url": "https://docs.test/2" },
            { "type": "clickup", "title": "Board", "url": "https://clickup.test" },
            { "type": "airtable", "title": "Base", "url": "https://airtable.test" },
            { "type": "figma", "title": "Designs", "url": "https://figma.test" }
        ]
    });
    let response =
        post_json(common::build_test_app(pool.clone()), "/api/webhooks/callback", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let token = token_for(onboarded["userId"].as_i64().unwrap(), Role::Client);
    let response = get_auth(common::build_test_app(pool), "/api/client/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["client"]["id"], onboarded["clientId"]);
    assert_eq!(json["client"]["uniqueClientId"], onboarded["uniqueClientId"]);
    assert_eq!(json["client"]["status"], "active");
    assert_eq!(json["client"]["email"], "dash@acme.test");
    assert_eq!(json["client"]["companyName"], "Acme Corp");

    assert_eq!(json["links"]["documents"].as_array().unwrap().len(), 2);
    assert_eq!(json["links"]["projects"].as_array().unwrap().len(), 1);
    assert_eq!(json["links"]["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["links"]["other"][0]["title"], "Designs");

    assert_eq!(json["stats"]["totalLinks"], 5);
    assert_eq!(json["stats"]["documentCount"], 2);
    assert_eq!(json["stats"]["projectCount"], 1);
    assert_eq!(json["stats"]["dataCount"], 1);
}

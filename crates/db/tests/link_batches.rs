//! Integration tests for callback persistence and the audit trail.

use clientdesk_core::links::LinkType;
use clientdesk_core::onboarding::OnboardingSubmission;
use clientdesk_core::roles::ROLE_CLIENT;
use clientdesk_core::types::DbId;
use clientdesk_core::webhook_log::{activity_types, webhook_types, Direction, ExchangeStatus};
use clientdesk_db::models::activity_log::CreateActivityLog;
use clientdesk_db::models::client::CreateClient;
use clientdesk_db::models::client_link::CreateClientLink;
use clientdesk_db::models::status::ClientStatus;
use clientdesk_db::models::user::CreateUser;
use clientdesk_db::models::webhook_log::CreateWebhookLog;
use clientdesk_db::repositories::{
    ActivityLogRepo, ClientLinkRepo, ClientRepo, LinkBatch, LinkBatchRepo, OnboardingRepo,
    WebhookLogRepo,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_client(pool: &PgPool, unique_client_id: &str) -> DbId {
    let registration = OnboardingSubmission {
        email: Some(format!("{}@acme.test", unique_client_id.to_lowercase())),
        password: Some("password123".into()),
        company_name: Some("Acme".into()),
        primary_goal: Some("Leads".into()),
        ideal_customer_profile: Some("SMB".into()),
        monthly_budget_range: Some("1k-5k".into()),
        ..Default::default()
    }
    .into_registration()
    .unwrap();

    let (_, client) = OnboardingRepo::register(
        pool,
        &CreateUser {
            email: registration.email,
            password_hash: "$argon2id$placeholder".into(),
            role: ROLE_CLIENT.into(),
        },
        &CreateClient {
            unique_client_id: unique_client_id.into(),
            profile: registration.profile,
        },
    )
    .await
    .unwrap();
    client.id
}

fn link(client_id: DbId, link_type: LinkType, title: &str) -> CreateClientLink {
    CreateClientLink {
        client_id,
        link_type,
        title: title.into(),
        url: format!("https://example.test/{title}"),
        description: None,
        icon: None,
        generated_by_automation: true,
        workflow_id: Some("wf-1".into()),
    }
}

fn batch(client_id: DbId, unique_client_id: &str, links: Vec<CreateClientLink>) -> LinkBatch {
    LinkBatch {
        client_id,
        activity: CreateActivityLog {
            client_id,
            activity_type: activity_types::LINKS_GENERATED.into(),
            activity_description: format!("Generated {} resource links via automation", links.len()),
            metadata: json!({ "linkCount": links.len() }),
        },
        audit: CreateWebhookLog {
            client_id: Some(client_id),
            unique_client_id: Some(unique_client_id.into()),
            direction: Direction::Inbound,
            webhook_type: webhook_types::LINKS_GENERATED.into(),
            payload: json!({ "uniqueClientId": unique_client_id }),
            status: ExchangeStatus::Success,
            error_message: None,
        },
        links,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_commit_writes_links_status_activity_and_audit(pool: PgPool) {
    let client_id = seed_client(&pool, "CL-BATCH1").await;

    let links = vec![
        link(client_id, LinkType::GoogleDoc, "Strategy"),
        link(client_id, LinkType::Clickup, "Board"),
    ];
    let created = LinkBatchRepo::commit(&pool, &batch(client_id, "CL-BATCH1", links))
        .await
        .unwrap()
        .expect("client exists");

    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|l| l.generated_by_automation));
    assert_eq!(created[0].link_type, "google_doc");

    let client = ClientRepo::find_by_id(&pool, client_id).await.unwrap().unwrap();
    assert_eq!(client.status_id, ClientStatus::Active.id());

    assert_eq!(ClientLinkRepo::count_for_client(&pool, client_id).await.unwrap(), 2);

    let activity = ActivityLogRepo::list_for_client(&pool, client_id).await.unwrap();
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].activity_type, activity_types::LINKS_GENERATED);

    let audit = WebhookLogRepo::list_for_client(&pool, client_id).await.unwrap();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].direction, "inbound");
    assert_eq!(audit[0].status, "success");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_batch_still_activates_client(pool: PgPool) {
    let client_id = seed_client(&pool, "CL-EMPTY1").await;

    let created = LinkBatchRepo::commit(&pool, &batch(client_id, "CL-EMPTY1", Vec::new()))
        .await
        .unwrap()
        .expect("client exists");
    assert!(created.is_empty());

    let client = ClientRepo::find_by_id(&pool, client_id).await.unwrap().unwrap();
    assert_eq!(client.status_id, ClientStatus::Active.id());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_commit_for_missing_client_writes_nothing(pool: PgPool) {
    let result = LinkBatchRepo::commit(&pool, &batch(9_999, "CL-GHOST1", Vec::new()))
        .await
        .unwrap();
    assert!(result.is_none());

    let audit = WebhookLogRepo::list_for_unique_client_id(&pool, "CL-GHOST1")
        .await
        .unwrap();
    assert!(audit.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_links_list_newest_first(pool: PgPool) {
    let client_id = seed_client(&pool, "CL-ORDER1").await;
    ClientLinkRepo::create(&pool, &link(client_id, LinkType::Other, "first"))
        .await
        .unwrap();
    ClientLinkRepo::create(&pool, &link(client_id, LinkType::Airtable, "second"))
        .await
        .unwrap();

    let links = ClientLinkRepo::list_for_client(&pool, client_id).await.unwrap();
    let titles: Vec<&str> = links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, ["second", "first"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_audit_entry_requires_a_correlation_key(pool: PgPool) {
    let result = WebhookLogRepo::create(
        &pool,
        &CreateWebhookLog {
            client_id: None,
            unique_client_id: None,
            direction: Direction::Outbound,
            webhook_type: webhook_types::ONBOARDING_COMPLETE.into(),
            payload: json!({}),
            status: ExchangeStatus::Failed,
            error_message: Some("timeout".into()),
        },
    )
    .await;

    match result {
        Err(sqlx::Error::Database(db)) => {
            assert_eq!(db.constraint(), Some("ck_webhook_logs_correlation"));
        }
        other => panic!("expected check violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_audit_entry_by_unique_id_without_client_row(pool: PgPool) {
    let entry = WebhookLogRepo::create(
        &pool,
        &CreateWebhookLog {
            client_id: None,
            unique_client_id: Some("CL-UNKNWN".into()),
            direction: Direction::Inbound,
            webhook_type: webhook_types::LINKS_GENERATED.into(),
            payload: json!({ "links": [] }),
            status: ExchangeStatus::Failed,
            error_message: Some("Client not found".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(entry.client_id, None);

    let rows = WebhookLogRepo::list_for_unique_client_id(&pool, "CL-UNKNWN")
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].error_message.as_deref(), Some("Client not found"));
}

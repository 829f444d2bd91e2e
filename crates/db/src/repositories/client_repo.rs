//! Repository for the `clients` table (the client directory).

use clientdesk_core::callback::ClientRef;
use clientdesk_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::client::{Client, ClientSummary, CreateClient};
use crate::models::status::ClientStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, unique_client_id, status_id, \
    company_name, industry, website_url, company_description, employee_count, business_model, \
    worked_with_agency, current_channels, marketing_feedback, primary_challenges, \
    has_google_analytics, has_facebook_pixel, tracking_tools, can_provide_analytics_access, \
    analytics_notes, \
    social_platforms, has_fb_business_manager, has_google_ads, \
    primary_goal, success_definition, key_metrics, revenue_target, target_cpa, target_roas, \
    ideal_customer_profile, geographic_targeting, age_range, gender_targeting, competitors, \
    competitor_strengths, \
    monthly_budget_range, has_creative_assets, has_marketing_contact, marketing_contact_name, \
    marketing_contact_email, \
    onboarding_completed, onboarding_completed_at, created_at, updated_at";

/// Lookup and lifecycle operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a client for `user_id` with onboarding marked complete and
    /// status `pending`.
    pub async fn create<'e, E>(
        executor: E,
        user_id: DbId,
        input: &CreateClient,
    ) -> Result<Client, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO clients (
                user_id, unique_client_id, status_id,
                company_name, industry, website_url, company_description, employee_count,
                business_model,
                worked_with_agency, current_channels, marketing_feedback, primary_challenges,
                has_google_analytics, has_facebook_pixel, tracking_tools,
                can_provide_analytics_access, analytics_notes,
                social_platforms, has_fb_business_manager, has_google_ads,
                primary_goal, success_definition, key_metrics, revenue_target, target_cpa,
                target_roas,
                ideal_customer_profile, geographic_targeting, age_range, gender_targeting,
                competitors, competitor_strengths,
                monthly_budget_range, has_creative_assets, has_marketing_contact,
                marketing_contact_name, marketing_contact_email,
                onboarding_completed, onboarding_completed_at
             ) VALUES (
                $1, $2, $3,
                $4, $5, $6, $7, $8, $9,
                $10, $11, $12, $13,
                $14, $15, $16, $17, $18,
                $19, $20, $21,
                $22, $23, $24, $25, $26, $27,
                $28, $29, $30, $31, $32, $33,
                $34, $35, $36, $37, $38,
                true, NOW()
             )
             RETURNING {COLUMNS}"
        );

        let p = &input.profile;
        sqlx::query_as::<_, Client>(&query)
            .bind(user_id)
            .bind(&input.unique_client_id)
            .bind(ClientStatus::Pending.id())
            .bind(&p.business_info.company_name)
            .bind(&p.business_info.industry)
            .bind(&p.business_info.website_url)
            .bind(&p.business_info.company_description)
            .bind(&p.business_info.employee_count)
            .bind(&p.business_info.business_model)
            .bind(&p.marketing_state.worked_with_agency)
            .bind(&p.marketing_state.current_channels)
            .bind(&p.marketing_state.marketing_feedback)
            .bind(&p.marketing_state.primary_challenges)
            .bind(&p.analytics.has_google_analytics)
            .bind(&p.analytics.has_facebook_pixel)
            .bind(&p.analytics.tracking_tools)
            .bind(&p.analytics.can_provide_analytics_access)
            .bind(&p.analytics.analytics_notes)
            .bind(&p.social_media.social_platforms)
            .bind(&p.social_media.has_fb_business_manager)
            .bind(&p.social_media.has_google_ads)
            .bind(&p.goals.primary_goal)
            .bind(&p.goals.success_definition)
            .bind(&p.goals.key_metrics)
            .bind(&p.goals.revenue_target)
            .bind(&p.goals.target_cpa)
            .bind(&p.goals.target_roas)
            .bind(&p.audience.ideal_customer_profile)
            .bind(&p.audience.geographic_targeting)
            .bind(&p.audience.age_range)
            .bind(&p.audience.gender_targeting)
            .bind(&p.audience.competitors)
            .bind(&p.audience.competitor_strengths)
            .bind(&p.budget.monthly_budget_range)
            .bind(&p.budget.has_creative_assets)
            .bind(&p.budget.has_marketing_contact)
            .bind(&p.budget.marketing_contact_name)
            .bind(&p.budget.marketing_contact_email)
            .fetch_one(executor)
            .await
    }

    /// Find a client by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the client profile owned by a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE user_id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a unique client identifier is already taken.
    pub async fn unique_client_id_exists(
        pool: &PgPool,
        unique_client_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE unique_client_id = $1)")
                .bind(unique_client_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Resolve a client from an identifier pair.
    ///
    /// Matches on internal id OR unique client identifier. The uniqueness of
    /// both keys means at most one row matches each side; if the two sides
    /// name different clients, the internal-id match wins.
    pub async fn resolve(pool: &PgPool, target: &ClientRef) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients
             WHERE id = $1 OR unique_client_id = $2
             ORDER BY CASE WHEN id = $1 THEN 0 ELSE 1 END
             LIMIT 1"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(target.client_id)
            .bind(target.unique_client_id.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a client's status. Returns `true` if the row exists.
    pub async fn set_status<'e, E>(
        executor: E,
        id: DbId,
        status: ClientStatus,
    ) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("UPDATE clients SET status_id = $2 WHERE id = $1")
            .bind(id)
            .bind(status.id())
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every client with its owner's email, last login, and link /
    /// activity counts, newest first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ClientSummary>, sqlx::Error> {
        sqlx::query_as::<_, ClientSummary>(
            "SELECT c.id, c.unique_client_id, c.company_name, c.industry, c.website_url,
                    u.email, c.status_id, c.onboarding_completed, c.onboarding_completed_at,
                    c.monthly_budget_range, c.created_at, u.last_login_at,
                    (SELECT COUNT(*) FROM client_links l WHERE l.client_id = c.id) AS link_count,
                    (SELECT COUNT(*) FROM activity_logs a WHERE a.client_id = c.id) AS activity_count
             FROM clients c
             JOIN users u ON u.id = c.user_id
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Count all clients.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

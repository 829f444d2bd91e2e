//! Client entity model and DTOs.

use clientdesk_core::onboarding::ClientProfile;
use clientdesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::status::StatusId;

/// Full client row from the `clients` table.
#[derive(Debug, Clone, FromRow)]
pub struct Client {
    pub id: DbId,
    pub user_id: DbId,
    /// External correlation key; immutable after insert.
    pub unique_client_id: String,
    pub status_id: StatusId,

    pub company_name: String,
    pub industry: Option<String>,
    pub website_url: Option<String>,
    pub company_description: Option<String>,
    pub employee_count: Option<String>,
    pub business_model: Option<String>,

    pub worked_with_agency: Option<String>,
    pub current_channels: Option<Vec<String>>,
    pub marketing_feedback: Option<String>,
    pub primary_challenges: Option<String>,

    pub has_google_analytics: Option<String>,
    pub has_facebook_pixel: Option<String>,
    pub tracking_tools: Option<Vec<String>>,
    pub can_provide_analytics_access: Option<String>,
    pub analytics_notes: Option<String>,

    pub social_platforms: Option<Vec<String>>,
    pub has_fb_business_manager: Option<String>,
    pub has_google_ads: Option<String>,

    pub primary_goal: String,
    pub success_definition: Option<String>,
    pub key_metrics: Option<Vec<String>>,
    pub revenue_target: Option<String>,
    pub target_cpa: Option<String>,
    pub target_roas: Option<String>,

    pub ideal_customer_profile: String,
    pub geographic_targeting: Option<String>,
    pub age_range: Option<String>,
    pub gender_targeting: Option<String>,
    pub competitors: Option<String>,
    pub competitor_strengths: Option<String>,

    pub monthly_budget_range: String,
    pub has_creative_assets: Option<String>,
    pub has_marketing_contact: Option<String>,
    pub marketing_contact_name: Option<String>,
    pub marketing_contact_email: Option<String>,

    pub onboarding_completed: bool,
    pub onboarding_completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a client row at the end of onboarding.
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub unique_client_id: String,
    pub profile: ClientProfile,
}

/// One row of the admin client listing: the client joined with its user and
/// link / activity counts.
#[derive(Debug, Clone, FromRow)]
pub struct ClientSummary {
    pub id: DbId,
    pub unique_client_id: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub website_url: Option<String>,
    pub email: String,
    pub status_id: StatusId,
    pub onboarding_completed: bool,
    pub onboarding_completed_at: Option<Timestamp>,
    pub monthly_budget_range: String,
    pub created_at: Timestamp,
    pub last_login_at: Option<Timestamp>,
    pub link_count: i64,
    pub activity_count: i64,
}

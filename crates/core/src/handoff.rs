//! Outbound handoff payload sent to the automation system.

use serde::Serialize;

use crate::onboarding::ClientProfile;
use crate::types::DbId;

/// Body of the single POST made to the automation endpoint after onboarding.
///
/// Carries both correlation keys so the automation system can call back with
/// either one. `onboardingData` repeats the grouped profile in full.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffPayload {
    pub unique_client_id: String,
    pub client_id: DbId,
    pub email: String,
    pub company_name: String,
    pub industry: Option<String>,
    pub website_url: Option<String>,
    pub onboarding_data: ClientProfile,
}

impl HandoffPayload {
    pub fn new(
        unique_client_id: impl Into<String>,
        client_id: DbId,
        email: impl Into<String>,
        profile: ClientProfile,
    ) -> Self {
        Self {
            unique_client_id: unique_client_id.into(),
            client_id,
            email: email.into(),
            company_name: profile.business_info.company_name.clone(),
            industry: profile.business_info.industry.clone(),
            website_url: profile.business_info.website_url.clone(),
            onboarding_data: profile,
        }
    }
}

//! Onboarding submission schema, normalization, and validation.
//!
//! The public intake form posts one flat record. After validation it is split
//! into the credentials used to create the user and a [`ClientProfile`] whose
//! groups mirror the steps of the form. The same profile groups are forwarded
//! verbatim to the automation system in the handoff payload.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Raw onboarding submission as posted by the intake form.
///
/// Every field is optional at the serde level so that missing required fields
/// are reported together by [`OnboardingSubmission::into_registration`]
/// instead of one at a time by the deserializer. Unknown fields are rejected.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OnboardingSubmission {
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, length(min = 8))]
    pub password: Option<String>,

    // Business fundamentals
    #[validate(required, length(min = 1, max = 200))]
    pub company_name: Option<String>,
    pub industry: Option<String>,
    #[validate(url)]
    pub website_url: Option<String>,
    pub company_description: Option<String>,
    pub employee_count: Option<String>,
    pub business_model: Option<String>,

    // Marketing history
    pub worked_with_agency: Option<String>,
    pub current_channels: Option<Vec<String>>,
    pub marketing_feedback: Option<String>,
    pub primary_challenges: Option<String>,

    // Analytics and tracking
    pub has_google_analytics: Option<String>,
    pub has_facebook_pixel: Option<String>,
    pub tracking_tools: Option<Vec<String>>,
    pub can_provide_analytics_access: Option<String>,
    pub analytics_notes: Option<String>,

    // Social platforms
    pub social_platforms: Option<Vec<String>>,
    pub has_fb_business_manager: Option<String>,
    pub has_google_ads: Option<String>,

    // Goals and targets
    #[validate(required, length(min = 1))]
    pub primary_goal: Option<String>,
    pub success_definition: Option<String>,
    pub key_metrics: Option<Vec<String>>,
    pub revenue_target: Option<String>,
    pub target_cpa: Option<String>,
    pub target_roas: Option<String>,

    // Audience and competitors
    #[validate(required, length(min = 1))]
    pub ideal_customer_profile: Option<String>,
    pub geographic_targeting: Option<String>,
    pub age_range: Option<String>,
    pub gender_targeting: Option<String>,
    pub competitors: Option<String>,
    pub competitor_strengths: Option<String>,

    // Budget and resources
    #[validate(required, length(min = 1))]
    pub monthly_budget_range: Option<String>,
    pub has_creative_assets: Option<String>,
    pub has_marketing_contact: Option<String>,
    pub marketing_contact_name: Option<String>,
    #[validate(email)]
    pub marketing_contact_email: Option<String>,
}

/// A validated submission: login credentials plus the grouped client profile.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Lower-cased, trimmed email address.
    pub email: String,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
    pub profile: ClientProfile,
}

/// Client profile grouped by intake step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    pub business_info: BusinessInfo,
    pub marketing_state: MarketingState,
    pub analytics: Analytics,
    pub social_media: SocialMedia,
    pub goals: Goals,
    pub audience: Audience,
    pub budget: Budget,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub company_name: String,
    pub industry: Option<String>,
    pub website_url: Option<String>,
    pub company_description: Option<String>,
    pub employee_count: Option<String>,
    pub business_model: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingState {
    pub worked_with_agency: Option<String>,
    pub current_channels: Option<Vec<String>>,
    pub marketing_feedback: Option<String>,
    pub primary_challenges: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub has_google_analytics: Option<String>,
    pub has_facebook_pixel: Option<String>,
    pub tracking_tools: Option<Vec<String>>,
    pub can_provide_analytics_access: Option<String>,
    pub analytics_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    pub social_platforms: Option<Vec<String>>,
    pub has_fb_business_manager: Option<String>,
    pub has_google_ads: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goals {
    pub primary_goal: String,
    pub success_definition: Option<String>,
    pub key_metrics: Option<Vec<String>>,
    pub revenue_target: Option<String>,
    pub target_cpa: Option<String>,
    pub target_roas: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    pub ideal_customer_profile: String,
    pub geographic_targeting: Option<String>,
    pub age_range: Option<String>,
    pub gender_targeting: Option<String>,
    pub competitors: Option<String>,
    pub competitor_strengths: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub monthly_budget_range: String,
    pub has_creative_assets: Option<String>,
    pub has_marketing_contact: Option<String>,
    pub marketing_contact_name: Option<String>,
    pub marketing_contact_email: Option<String>,
}

impl OnboardingSubmission {
    /// Normalize, validate, and split the submission.
    ///
    /// Text fields are trimmed and empty strings treated as absent before the
    /// required-field check runs, so `"  "` does not satisfy a required field.
    pub fn into_registration(self) -> Result<Registration, CoreError> {
        let s = self.normalized();
        s.validate()
            .map_err(|errors| CoreError::Validation(describe_errors(&errors)))?;

        let (
            Some(email),
            Some(password),
            Some(company_name),
            Some(primary_goal),
            Some(ideal_customer_profile),
            Some(monthly_budget_range),
        ) = (
            s.email,
            s.password,
            s.company_name,
            s.primary_goal,
            s.ideal_customer_profile,
            s.monthly_budget_range,
        )
        else {
            return Err(CoreError::Validation("Missing required fields".into()));
        };

        Ok(Registration {
            email,
            password,
            profile: ClientProfile {
                business_info: BusinessInfo {
                    company_name,
                    industry: s.industry,
                    website_url: s.website_url,
                    company_description: s.company_description,
                    employee_count: s.employee_count,
                    business_model: s.business_model,
                },
                marketing_state: MarketingState {
                    worked_with_agency: s.worked_with_agency,
                    current_channels: s.current_channels,
                    marketing_feedback: s.marketing_feedback,
                    primary_challenges: s.primary_challenges,
                },
                analytics: Analytics {
                    has_google_analytics: s.has_google_analytics,
                    has_facebook_pixel: s.has_facebook_pixel,
                    tracking_tools: s.tracking_tools,
                    can_provide_analytics_access: s.can_provide_analytics_access,
                    analytics_notes: s.analytics_notes,
                },
                social_media: SocialMedia {
                    social_platforms: s.social_platforms,
                    has_fb_business_manager: s.has_fb_business_manager,
                    has_google_ads: s.has_google_ads,
                },
                goals: Goals {
                    primary_goal,
                    success_definition: s.success_definition,
                    key_metrics: s.key_metrics,
                    revenue_target: s.revenue_target,
                    target_cpa: s.target_cpa,
                    target_roas: s.target_roas,
                },
                audience: Audience {
                    ideal_customer_profile,
                    geographic_targeting: s.geographic_targeting,
                    age_range: s.age_range,
                    gender_targeting: s.gender_targeting,
                    competitors: s.competitors,
                    competitor_strengths: s.competitor_strengths,
                },
                budget: Budget {
                    monthly_budget_range,
                    has_creative_assets: s.has_creative_assets,
                    has_marketing_contact: s.has_marketing_contact,
                    marketing_contact_name: s.marketing_contact_name,
                    marketing_contact_email: s.marketing_contact_email,
                },
            },
        })
    }

    fn normalized(self) -> Self {
        Self {
            email: text(self.email).map(|e| e.to_lowercase()),
            // Passwords are taken as typed; only an empty one counts as missing.
            password: self.password.filter(|p| !p.is_empty()),
            company_name: text(self.company_name),
            industry: text(self.industry),
            website_url: text(self.website_url),
            company_description: text(self.company_description),
            employee_count: text(self.employee_count),
            business_model: text(self.business_model),
            worked_with_agency: text(self.worked_with_agency),
            current_channels: list(self.current_channels),
            marketing_feedback: text(self.marketing_feedback),
            primary_challenges: text(self.primary_challenges),
            has_google_analytics: text(self.has_google_analytics),
            has_facebook_pixel: text(self.has_facebook_pixel),
            tracking_tools: list(self.tracking_tools),
            can_provide_analytics_access: text(self.can_provide_analytics_access),
            analytics_notes: text(self.analytics_notes),
            social_platforms: list(self.social_platforms),
            has_fb_business_manager: text(self.has_fb_business_manager),
            has_google_ads: text(self.has_google_ads),
            primary_goal: text(self.primary_goal),
            success_definition: text(self.success_definition),
            key_metrics: list(self.key_metrics),
            revenue_target: text(self.revenue_target),
            target_cpa: text(self.target_cpa),
            target_roas: text(self.target_roas),
            ideal_customer_profile: text(self.ideal_customer_profile),
            geographic_targeting: text(self.geographic_targeting),
            age_range: text(self.age_range),
            gender_targeting: text(self.gender_targeting),
            competitors: text(self.competitors),
            competitor_strengths: text(self.competitor_strengths),
            monthly_budget_range: text(self.monthly_budget_range),
            has_creative_assets: text(self.has_creative_assets),
            has_marketing_contact: text(self.has_marketing_contact),
            marketing_contact_name: text(self.marketing_contact_name),
            marketing_contact_email: text(self.marketing_contact_email),
        }
    }
}

/// Trim a text field; blank becomes `None`.
fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trim list entries and drop blanks; an empty list becomes `None`.
fn list(values: Option<Vec<String>>) -> Option<Vec<String>> {
    values
        .map(|vs| {
            vs.into_iter()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|vs| !vs.is_empty())
}

/// Render validator errors as a single message naming the offending fields
/// in their wire (camelCase) spelling, sorted for stable output.
fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| to_camel_case(field))
        .collect();
    fields.sort();
    format!("Missing or invalid fields: {}", fields.join(", "))
}

fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

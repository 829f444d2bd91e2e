//! Vocabulary for automation audit log entries.
//!
//! Audit entries record every exchange with the automation system in either
//! direction. They are append-only and are used for diagnosis, never replay.

use serde::{Deserialize, Serialize};

/// Known webhook type tags.
pub mod webhook_types {
    /// Outbound handoff sent after onboarding completes.
    pub const ONBOARDING_COMPLETE: &str = "onboarding_complete";
    /// Inbound callback delivering generated links.
    pub const LINKS_GENERATED: &str = "links_generated";
}

/// Known activity log types.
pub mod activity_types {
    pub const LINKS_GENERATED: &str = "links_generated";
}

/// Which side initiated the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Outbound,
    Inbound,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Outbound => "outbound",
            Direction::Inbound => "inbound",
        }
    }
}

/// Outcome of an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeStatus {
    Success,
    Failed,
}

impl ExchangeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ExchangeStatus::Success => "success",
            ExchangeStatus::Failed => "failed",
        }
    }
}

/// Description stored on the activity entry written for a link batch.
pub fn links_generated_description(count: usize) -> String {
    let noun = if count == 1 { "link" } else { "links" };
    format!("Generated {count} resource {noun} via automation")
}

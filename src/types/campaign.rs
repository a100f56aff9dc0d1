//! Campaign records and their lifecycle statuses.
//!
//! A campaign moves through a fine-grained status enumeration (creation →
//! recruiting → content planning → production → review → monitoring) which
//! the workflow module collapses into five coarse stages for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Fine-grained lifecycle status of a campaign.
///
/// The wire/storage representation is the kebab-case form (`plan-review`,
/// `content-approved`, ...). `Paused`, `Cancelled` and `Settlement` sit
/// outside the main progression and are absorbed by the workflow mapper's
/// fallback stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignStatus {
    /// Brand is still filling in the campaign brief
    #[default]
    Creating,
    /// Brief submitted, awaiting admin review
    Submitted,
    /// Open for influencer applications
    Recruiting,
    /// Influencer proposals under consideration
    Proposing,
    /// Influencer lineup confirmed
    Confirmed,
    /// Content plan being drafted
    Planning,
    /// Content plan submitted for brand review
    PlanReview,
    /// Brand requested plan changes
    PlanRevision,
    /// Content plan approved
    PlanApproved,
    /// Content in production
    Producing,
    /// Produced content under review
    ContentReview,
    /// Brand requested content changes
    ContentRevision,
    /// Content approved for publishing
    ContentApproved,
    /// Content published on target platforms
    Live,
    /// Performance tracking in progress
    Monitoring,
    /// Campaign finished
    Completed,
    /// Temporarily on hold
    Paused,
    /// Abandoned before completion
    Cancelled,
    /// Billing and settlement in progress
    Settlement,
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, thiserror::Error)]
#[error("unknown campaign status '{0}'")]
pub struct ParseStatusError(String);

impl CampaignStatus {
    /// All statuses in lifecycle order, side states last.
    pub fn all() -> &'static [CampaignStatus] {
        &[
            CampaignStatus::Creating,
            CampaignStatus::Submitted,
            CampaignStatus::Recruiting,
            CampaignStatus::Proposing,
            CampaignStatus::Confirmed,
            CampaignStatus::Planning,
            CampaignStatus::PlanReview,
            CampaignStatus::PlanRevision,
            CampaignStatus::PlanApproved,
            CampaignStatus::Producing,
            CampaignStatus::ContentReview,
            CampaignStatus::ContentRevision,
            CampaignStatus::ContentApproved,
            CampaignStatus::Live,
            CampaignStatus::Monitoring,
            CampaignStatus::Completed,
            CampaignStatus::Paused,
            CampaignStatus::Cancelled,
            CampaignStatus::Settlement,
        ]
    }

    /// The kebab-case form used in storage, the API and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Creating => "creating",
            CampaignStatus::Submitted => "submitted",
            CampaignStatus::Recruiting => "recruiting",
            CampaignStatus::Proposing => "proposing",
            CampaignStatus::Confirmed => "confirmed",
            CampaignStatus::Planning => "planning",
            CampaignStatus::PlanReview => "plan-review",
            CampaignStatus::PlanRevision => "plan-revision",
            CampaignStatus::PlanApproved => "plan-approved",
            CampaignStatus::Producing => "producing",
            CampaignStatus::ContentReview => "content-review",
            CampaignStatus::ContentRevision => "content-revision",
            CampaignStatus::ContentApproved => "content-approved",
            CampaignStatus::Live => "live",
            CampaignStatus::Monitoring => "monitoring",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Cancelled => "cancelled",
            CampaignStatus::Settlement => "settlement",
        }
    }

    /// Next status along the happy path, saturating at `Completed`.
    ///
    /// Revision statuses advance to their approved counterpart; side states
    /// (`Paused`, `Cancelled`, `Settlement`) stay put.
    pub fn advanced(&self) -> CampaignStatus {
        match self {
            CampaignStatus::Creating => CampaignStatus::Submitted,
            CampaignStatus::Submitted => CampaignStatus::Recruiting,
            CampaignStatus::Recruiting => CampaignStatus::Proposing,
            CampaignStatus::Proposing => CampaignStatus::Confirmed,
            CampaignStatus::Confirmed => CampaignStatus::Planning,
            CampaignStatus::Planning => CampaignStatus::PlanReview,
            CampaignStatus::PlanReview => CampaignStatus::PlanApproved,
            CampaignStatus::PlanRevision => CampaignStatus::PlanReview,
            CampaignStatus::PlanApproved => CampaignStatus::Producing,
            CampaignStatus::Producing => CampaignStatus::ContentReview,
            CampaignStatus::ContentReview => CampaignStatus::ContentApproved,
            CampaignStatus::ContentRevision => CampaignStatus::ContentReview,
            CampaignStatus::ContentApproved => CampaignStatus::Live,
            CampaignStatus::Live => CampaignStatus::Monitoring,
            CampaignStatus::Monitoring => CampaignStatus::Completed,
            CampaignStatus::Completed => CampaignStatus::Completed,
            CampaignStatus::Paused => CampaignStatus::Paused,
            CampaignStatus::Cancelled => CampaignStatus::Cancelled,
            CampaignStatus::Settlement => CampaignStatus::Settlement,
        }
    }

    /// Whether the campaign is still in flight (not finished or abandoned).
    pub fn is_active(&self) -> bool {
        !matches!(
            self,
            CampaignStatus::Completed | CampaignStatus::Cancelled | CampaignStatus::Settlement
        )
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A marketing engagement record tracked through the multi-stage lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    /// Unique identifier
    pub id: Uuid,

    /// Campaign title shown on the dashboard
    pub title: String,

    /// Owning brand name
    pub brand: String,

    /// Current lifecycle status
    pub status: CampaignStatus,

    /// Total budget in KRW
    #[serde(default)]
    pub budget_krw: Option<u64>,

    /// Number of influencers engaged
    #[serde(default)]
    pub influencer_count: Option<u32>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Create a new campaign in the `creating` status.
    pub fn new(title: impl Into<String>, brand: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            brand: brand.into(),
            status: CampaignStatus::Creating,
            budget_krw: None,
            influencer_count: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this campaign is still in flight.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

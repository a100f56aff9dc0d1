//! Workflow stage derivation for campaigns.
//!
//! Collapses the 19 fine-grained campaign statuses into five coarse stages
//! that drive the progress UI and tab gating. Everything here is a pure
//! function of its input: stages, steps and tab flags are recomputed on every
//! call and never persisted.

use crate::types::{Campaign, CampaignStatus};

/// Tab identifiers used by the dashboard and the REST workflow endpoint.
pub const TAB_OVERVIEW: &str = "overview";
pub const TAB_CONTENT_PLANS: &str = "content-plans";
pub const TAB_CONTENT_PRODUCTION: &str = "content-production";
pub const TAB_CONTENT_REVIEW: &str = "content-review";

/// The dashboard tabs in display order.
pub const ALL_TABS: [&str; 4] = [
    TAB_OVERVIEW,
    TAB_CONTENT_PLANS,
    TAB_CONTENT_PRODUCTION,
    TAB_CONTENT_REVIEW,
];

/// Coarse 1–5 stage derived from a campaign's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WorkflowStage {
    pub stage: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub progress: u8,
}

/// One of the five fixed milestones rendered as a progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct WorkflowStep {
    pub id: u8,
    pub title: &'static str,
    pub completed: bool,
    pub current: bool,
}

/// Fixed step titles, indexed by step id minus one.
const STEP_TITLES: [&str; 5] = [
    "캠페인 생성",
    "콘텐츠 기획",
    "콘텐츠 제작",
    "콘텐츠 검수",
    "성과 모니터링",
];

/// Map a campaign (or its absence) to a workflow stage.
///
/// Total over the whole status enumeration. A missing campaign yields the
/// blank stage-1 placeholder; statuses outside the main progression
/// (`paused`, `cancelled`, `settlement`) yield the generic in-progress stage.
pub fn stage_for(campaign: Option<&Campaign>) -> WorkflowStage {
    let Some(campaign) = campaign else {
        return WorkflowStage {
            stage: 1,
            title: "",
            description: "",
            progress: 0,
        };
    };
    stage_for_status(campaign.status)
}

/// Map a status to its workflow stage.
pub fn stage_for_status(status: CampaignStatus) -> WorkflowStage {
    match status {
        CampaignStatus::Creating
        | CampaignStatus::Submitted
        | CampaignStatus::Recruiting
        | CampaignStatus::Proposing
        | CampaignStatus::Confirmed => WorkflowStage {
            stage: 1,
            title: "캠페인 생성 완료",
            description: "캠페인이 등록되어 인플루언서 섭외를 진행하고 있습니다",
            progress: 20,
        },
        CampaignStatus::Planning | CampaignStatus::PlanReview | CampaignStatus::PlanRevision => {
            WorkflowStage {
                stage: 2,
                title: "콘텐츠 기획",
                description: "인플루언서가 콘텐츠 기획안을 작성하고 있습니다",
                progress: 40,
            }
        }
        CampaignStatus::PlanApproved | CampaignStatus::Producing => WorkflowStage {
            stage: 3,
            title: "콘텐츠 제작",
            description: "승인된 기획안으로 콘텐츠를 제작하고 있습니다",
            progress: 60,
        },
        CampaignStatus::ContentReview | CampaignStatus::ContentRevision => WorkflowStage {
            stage: 4,
            title: "콘텐츠 검수",
            description: "제작된 콘텐츠를 검수하고 있습니다",
            progress: 80,
        },
        CampaignStatus::ContentApproved
        | CampaignStatus::Live
        | CampaignStatus::Monitoring
        | CampaignStatus::Completed => WorkflowStage {
            stage: 5,
            title: "성과 모니터링",
            description: "콘텐츠가 게시되어 성과를 모니터링하고 있습니다",
            progress: 100,
        },
        // Side states outside the main progression fall back to a generic
        // in-progress stage rather than failing.
        CampaignStatus::Paused | CampaignStatus::Cancelled | CampaignStatus::Settlement => {
            WorkflowStage {
                stage: 1,
                title: "캠페인 진행중",
                description: "캠페인이 진행되고 있습니다",
                progress: 20,
            }
        }
    }
}

/// Build the five-step milestone list for a stage.
///
/// Steps before the stage are completed, the stage's own step is current,
/// later steps are neither. The stage is assumed normalized to 1–5 by
/// [`stage_for`].
pub fn workflow_steps(stage: u8) -> [WorkflowStep; 5] {
    std::array::from_fn(|i| {
        let id = i as u8 + 1;
        WorkflowStep {
            id,
            title: STEP_TITLES[i],
            completed: id < stage,
            current: id == stage,
        }
    })
}

/// Whether a dashboard tab is enabled at the given stage.
///
/// Unrecognized tab names are enabled unconditionally. That permissiveness
/// matches the product behavior; see DESIGN.md for the open question.
pub fn tab_enabled(tab: &str, stage: u8) -> bool {
    match tab {
        TAB_CONTENT_PLANS => stage >= 2,
        TAB_CONTENT_PRODUCTION => stage >= 3,
        TAB_CONTENT_REVIEW => stage >= 4,
        _ => true,
    }
}

/// The tab that should be active by default at the given stage.
///
/// Stage 1 selects `content-plans` even though the gate disables it below
/// stage 2; the product behaves this way and the inconsistency is kept
/// deliberately (see DESIGN.md).
pub fn default_tab(stage: u8) -> &'static str {
    match stage {
        2 => TAB_CONTENT_PLANS,
        3 => TAB_CONTENT_PRODUCTION,
        s if s >= 4 => TAB_CONTENT_REVIEW,
        _ => TAB_CONTENT_PLANS,
    }
}

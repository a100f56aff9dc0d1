//! Data Transfer Objects for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::types::Campaign;
use crate::workflow::{self, WorkflowStage, WorkflowStep};

// =============================================================================
// Campaign DTOs
// =============================================================================

/// Response for a single campaign
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CampaignResponse {
    pub id: Uuid,
    pub title: String,
    pub brand: String,
    /// Kebab-case lifecycle status (e.g. `plan-review`)
    pub status: String,
    /// Workflow stage 1-5 derived from the status
    pub stage: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_krw: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub influencer_count: Option<u32>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Campaign> for CampaignResponse {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id,
            title: campaign.title.clone(),
            brand: campaign.brand.clone(),
            status: campaign.status.to_string(),
            stage: workflow::stage_for(Some(campaign)).stage,
            budget_krw: campaign.budget_krw,
            influencer_count: campaign.influencer_count,
            created_at: campaign.created_at.to_rfc3339(),
            updated_at: campaign.updated_at.to_rfc3339(),
        }
    }
}

/// Request to create a campaign
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCampaignRequest {
    pub title: String,
    pub brand: String,
    #[serde(default)]
    pub budget_krw: Option<u64>,
    #[serde(default)]
    pub influencer_count: Option<u32>,
}

/// Request to change a campaign's status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// Kebab-case status value from the fixed enumeration
    pub status: String,
}

// =============================================================================
// Workflow DTOs
// =============================================================================

/// A workflow milestone with completion flags
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WorkflowStepDto {
    pub id: u8,
    pub title: String,
    pub completed: bool,
    pub current: bool,
}

impl From<&WorkflowStep> for WorkflowStepDto {
    fn from(step: &WorkflowStep) -> Self {
        Self {
            id: step.id,
            title: step.title.to_string(),
            completed: step.completed,
            current: step.current,
        }
    }
}

/// Enablement flag for a dashboard tab
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TabStateDto {
    pub name: String,
    pub enabled: bool,
}

/// Derived workflow view for one campaign
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CampaignWorkflowResponse {
    pub campaign_id: Uuid,
    pub stage: u8,
    pub title: String,
    pub description: String,
    pub progress: u8,
    pub steps: Vec<WorkflowStepDto>,
    pub tabs: Vec<TabStateDto>,
    pub default_tab: String,
}

impl CampaignWorkflowResponse {
    pub fn build(campaign: &Campaign) -> Self {
        let stage: WorkflowStage = workflow::stage_for(Some(campaign));
        let steps = workflow::workflow_steps(stage.stage);

        let tabs = workflow::ALL_TABS
            .iter()
            .map(|name| TabStateDto {
                name: (*name).to_string(),
                enabled: workflow::tab_enabled(name, stage.stage),
            })
            .collect();

        Self {
            campaign_id: campaign.id,
            stage: stage.stage,
            title: stage.title.to_string(),
            description: stage.description.to_string(),
            progress: stage.progress,
            steps: steps.iter().map(WorkflowStepDto::from).collect(),
            tabs,
            default_tab: workflow::default_tab(stage.stage).to_string(),
        }
    }
}

// =============================================================================
// Health DTOs
// =============================================================================

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service status with store info
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub campaign_count: usize,
    pub active_count: usize,
}

//! Derived workflow view endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::rest::dto::CampaignWorkflowResponse;
use crate::rest::error::ApiError;
use crate::rest::state::ApiState;

/// Get the derived workflow view for a campaign: stage, progress, the
/// five-step milestone list, per-tab enablement and the default tab.
#[utoipa::path(
    get,
    path = "/api/v1/campaigns/{id}/workflow",
    tag = "Workflow",
    params(
        ("id" = Uuid, Path, description = "Campaign id")
    ),
    responses(
        (status = 200, description = "Derived workflow view", body = CampaignWorkflowResponse),
        (status = 404, description = "Campaign not found")
    )
)]
pub async fn workflow(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignWorkflowResponse>, ApiError> {
    let store = state.store.read().await;
    store
        .get(id)
        .map(|campaign| Json(CampaignWorkflowResponse::build(campaign)))
        .ok_or_else(|| ApiError::NotFound(format!("Campaign '{id}' not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::CampaignStatus;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_workflow_for_producing_campaign() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();
        let state = ApiState::new(config);

        let id = {
            let mut store = state.store.write().await;
            let id = store
                .create("캠페인".to_string(), "브랜드".to_string(), None, None)
                .unwrap();
            store.set_status(id, CampaignStatus::Producing).unwrap();
            id
        };

        let resp = workflow(State(state), Path(id)).await.unwrap();
        assert_eq!(resp.0.stage, 3);
        assert_eq!(resp.0.progress, 60);
        assert!(resp.0.steps[2].current);
        assert_eq!(resp.0.default_tab, "content-production");
    }

    #[tokio::test]
    async fn test_workflow_unknown_campaign() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.data = temp_dir.path().to_string_lossy().to_string();
        let state = ApiState::new(config);

        let result = workflow(State(state), Path(Uuid::new_v4())).await;
        assert!(result.is_err());
    }
}

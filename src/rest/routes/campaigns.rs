//! Campaign CRUD endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::rest::dto::{CampaignResponse, CreateCampaignRequest, UpdateStatusRequest};
use crate::rest::error::ApiError;
use crate::rest::state::ApiState;
use crate::types::CampaignStatus;

/// List all campaigns
#[utoipa::path(
    get,
    path = "/api/v1/campaigns",
    tag = "Campaigns",
    responses(
        (status = 200, description = "List of campaigns", body = Vec<CampaignResponse>)
    )
)]
pub async fn list(State(state): State<ApiState>) -> Json<Vec<CampaignResponse>> {
    let store = state.store.read().await;
    Json(store.campaigns.iter().map(CampaignResponse::from).collect())
}

/// Get a single campaign
#[utoipa::path(
    get,
    path = "/api/v1/campaigns/{id}",
    tag = "Campaigns",
    params(
        ("id" = Uuid, Path, description = "Campaign id")
    ),
    responses(
        (status = 200, description = "Campaign detail", body = CampaignResponse),
        (status = 404, description = "Campaign not found")
    )
)]
pub async fn get_one(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignResponse>, ApiError> {
    let store = state.store.read().await;
    store
        .get(id)
        .map(|campaign| Json(CampaignResponse::from(campaign)))
        .ok_or_else(|| ApiError::NotFound(format!("Campaign '{id}' not found")))
}

/// Create a campaign
#[utoipa::path(
    post,
    path = "/api/v1/campaigns",
    tag = "Campaigns",
    request_body = CreateCampaignRequest,
    responses(
        (status = 200, description = "Campaign created", body = CampaignResponse),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create(
    State(state): State<ApiState>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<Json<CampaignResponse>, ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::ValidationError("title must not be empty".to_string()));
    }
    if req.brand.trim().is_empty() {
        return Err(ApiError::ValidationError("brand must not be empty".to_string()));
    }

    let mut store = state.store.write().await;
    let id = store.create(req.title, req.brand, req.budget_krw, req.influencer_count)?;

    tracing::info!(%id, "Campaign created");

    let campaign = store
        .get(id)
        .ok_or_else(|| ApiError::InternalError("created campaign missing".to_string()))?;
    Ok(Json(CampaignResponse::from(campaign)))
}

/// Change a campaign's status
#[utoipa::path(
    put,
    path = "/api/v1/campaigns/{id}/status",
    tag = "Campaigns",
    params(
        ("id" = Uuid, Path, description = "Campaign id")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = CampaignResponse),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Campaign not found")
    )
)]
pub async fn set_status(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<CampaignResponse>, ApiError> {
    let status: CampaignStatus = req
        .status
        .parse()
        .map_err(|e: crate::types::ParseStatusError| ApiError::ValidationError(e.to_string()))?;

    let mut store = state.store.write().await;
    if store.get(id).is_none() {
        return Err(ApiError::NotFound(format!("Campaign '{id}' not found")));
    }
    store.set_status(id, status)?;

    tracing::info!(%id, %status, "Campaign status updated");

    let campaign = store
        .get(id)
        .ok_or_else(|| ApiError::InternalError("updated campaign missing".to_string()))?;
    Ok(Json(CampaignResponse::from(campaign)))
}

/// Delete a campaign
#[utoipa::path(
    delete,
    path = "/api/v1/campaigns/{id}",
    tag = "Campaigns",
    params(
        ("id" = Uuid, Path, description = "Campaign id")
    ),
    responses(
        (status = 204, description = "Campaign deleted"),
        (status = 404, description = "Campaign not found")
    )
)]
pub async fn delete(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<axum::http::StatusCode, ApiError> {
    let mut store = state.store.write().await;
    if store.get(id).is_none() {
        return Err(ApiError::NotFound(format!("Campaign '{id}' not found")));
    }
    store.remove(id)?;

    tracing::info!(%id, "Campaign deleted");
    Ok(axum::http::StatusCode::NO_CONTENT)
}

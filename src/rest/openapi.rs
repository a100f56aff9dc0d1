//! OpenAPI specification builder using utoipa.

use utoipa::OpenApi;

use crate::rest::dto::{
    CampaignResponse, CampaignWorkflowResponse, CreateCampaignRequest, HealthResponse,
    StatusResponse, TabStateDto, UpdateStatusRequest, WorkflowStepDto,
};
use crate::rest::error::ErrorResponse;

/// OpenAPI documentation for the campdeck REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "campdeck API",
        version = "0.1.0",
        description = "REST API for managing influencer-marketing campaigns and their derived workflow state.",
        license(name = "MIT")
    ),
    paths(
        // Health endpoints
        crate::rest::routes::health::health,
        crate::rest::routes::health::status,
        // Campaign endpoints
        crate::rest::routes::campaigns::list,
        crate::rest::routes::campaigns::get_one,
        crate::rest::routes::campaigns::create,
        crate::rest::routes::campaigns::set_status,
        crate::rest::routes::campaigns::delete,
        // Workflow endpoints
        crate::rest::routes::workflow::workflow,
    ),
    components(
        schemas(
            HealthResponse,
            StatusResponse,
            CampaignResponse,
            CampaignWorkflowResponse,
            WorkflowStepDto,
            TabStateDto,
            ErrorResponse,
            CreateCampaignRequest,
            UpdateStatusRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health and status"),
        (name = "Campaigns", description = "Campaign CRUD"),
        (name = "Workflow", description = "Derived workflow views"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as pretty JSON
    pub fn json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::json().expect("Failed to generate OpenAPI spec");
        assert!(spec.contains("campdeck API"));
        assert!(spec.contains("/api/v1/campaigns"));
        assert!(spec.contains("/api/v1/campaigns/{id}/workflow"));
    }

    #[test]
    fn test_openapi_has_all_tags() {
        let spec = ApiDoc::json().expect("Failed to generate OpenAPI spec");
        for tag in ["Health", "Campaigns", "Workflow"] {
            assert!(spec.contains(tag), "missing tag {tag}");
        }
    }
}

// ABOUTME: PagesApi trait for the remote deployment service.
// ABOUTME: Create, query status, and cancel a deployment by id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::types::DeploymentId;

/// Remote deployment operations.
///
/// All three calls are one request/response each; transport retries are the
/// caller's concern. `query_status` returns `Ok` for any structured HTTP
/// response, including non-200 — the polling loop needs the status code for
/// error accounting. `Err` means the request itself failed.
#[async_trait]
pub trait PagesApi: Send + Sync {
    /// Submit a new deployment for a previously uploaded artifact.
    async fn create_deployment(
        &self,
        request: &CreateDeploymentRequest,
    ) -> Result<DeploymentCreated, ApiError>;

    /// Query the current status of a deployment.
    async fn query_status(&self, id: &DeploymentId) -> Result<StatusPoll, ApiError>;

    /// Cancel an in-flight deployment.
    async fn cancel_deployment(&self, id: &DeploymentId) -> Result<(), ApiError>;
}

/// Body of the deployment creation request.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDeploymentRequest {
    /// Signed URL of the uploaded artifact.
    pub artifact_url: String,

    /// Version label for this build, also the deployment id fallback.
    pub pages_build_version: String,

    /// OIDC identity token, when the service requires one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_token: Option<String>,

    /// Deploy as a preview rather than to the live site.
    pub preview: bool,
}

/// Response to a successful deployment creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeploymentCreated {
    /// URL to poll for status; its last path segment is the deployment id.
    #[serde(default)]
    pub status_url: Option<String>,

    /// URL the site will be served from once the deployment succeeds.
    #[serde(default)]
    pub page_url: Option<String>,
}

/// One observation from the status endpoint.
#[derive(Debug, Clone)]
pub struct StatusPoll {
    /// HTTP status code of the response.
    pub http_status: u16,

    /// Raw `status` field from the response body.
    pub status: String,
}

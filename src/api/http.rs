// ABOUTME: HTTP implementation of PagesApi over reqwest.
// ABOUTME: Endpoints are scoped by repository slug; auth is a bearer token.

use async_trait::async_trait;
use serde::Deserialize;

use super::error::ApiError;
use super::traits::{CreateDeploymentRequest, DeploymentCreated, PagesApi, StatusPoll};
use crate::types::{DeploymentId, RepoSlug};

const USER_AGENT: &str = concat!("selida/", env!("CARGO_PKG_VERSION"));

/// PagesApi backed by the remote HTTPS service.
pub struct HttpPagesApi {
    http: reqwest::Client,
    api_base: String,
    repository: RepoSlug,
    token: Option<String>,
}

impl HttpPagesApi {
    /// Create a client for the given API base URL and repository.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying client cannot be built.
    pub fn new(
        api_base: &str,
        repository: RepoSlug,
        token: Option<String>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            repository,
            token,
        })
    }

    fn deployments_url(&self) -> String {
        format!(
            "{}/repos/{}/pages/deployments",
            self.api_base, self.repository
        )
    }

    fn deployment_url(&self, id: &DeploymentId) -> String {
        format!("{}/{}", self.deployments_url(), id)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Body of a status response. Anything without a parseable `status` field is
/// reported as `unknown_status` so the polling loop treats it as transient.
#[derive(Debug, Deserialize)]
struct StatusBody {
    status: String,
}

#[async_trait]
impl PagesApi for HttpPagesApi {
    async fn create_deployment(
        &self,
        request: &CreateDeploymentRequest,
    ) -> Result<DeploymentCreated, ApiError> {
        tracing::debug!(repository = %self.repository, "creating deployment");

        let response = self
            .authorize(self.http.post(self.deployments_url()))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Response {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    async fn query_status(&self, id: &DeploymentId) -> Result<StatusPoll, ApiError> {
        let response = self
            .authorize(self.http.get(self.deployment_url(id)))
            .send()
            .await?;

        let http_status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let status = serde_json::from_str::<StatusBody>(&body)
            .map(|b| b.status)
            .unwrap_or_else(|_| "unknown_status".to_string());

        tracing::debug!(deployment = %id, http_status, status, "status poll");

        Ok(StatusPoll {
            http_status,
            status,
        })
    }

    async fn cancel_deployment(&self, id: &DeploymentId) -> Result<(), ApiError> {
        tracing::debug!(deployment = %id, "cancelling deployment");

        let response = self
            .authorize(
                self.http
                    .post(format!("{}/cancel", self.deployment_url(id))),
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Response {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

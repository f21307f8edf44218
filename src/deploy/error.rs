// ABOUTME: Error types for the deployment lifecycle.
// ABOUTME: Maps creation failures and terminal failure outcomes to messages.

use crate::api::{ApiError, ApiErrorKind};

/// Errors that can occur while creating or tracking a deployment.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// The service rejected the creation request (4xx).
    #[error("deployment request rejected: {0}")]
    Rejected(String),

    /// The deployment endpoint does not exist for this repository.
    #[error("pages site not found: {0}")]
    SiteNotFound(String),

    /// The service failed to process the creation request (5xx).
    #[error("pages service error: {0}")]
    Server(String),

    /// The deployment reached the deployment_failed terminal status.
    #[error("deployment failed")]
    Failed,

    /// The artifact was rejected by the service (size or link constraints).
    #[error("artifact could not be deployed; check its size and contents")]
    Content,

    /// Too many failed status checks; the deployment was cancelled.
    #[error("aborted deployment after {0} failed status checks")]
    BudgetExhausted(u32),

    /// The deployment did not settle within the configured timeout.
    #[error("deployment still pending after {0} seconds; cancelled")]
    Timeout(u64),

    /// Transport-level failure outside the structured error taxonomy.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DeployError {
    /// Map a creation-time API failure onto the deployment taxonomy, with a
    /// remediation hint where one exists. Creation is one-shot: these are all
    /// fatal to the caller.
    pub(crate) fn creation(err: ApiError) -> Self {
        match err.kind() {
            ApiErrorKind::ClientError if err.response_status() == Some(404) => {
                DeployError::SiteNotFound(format!(
                    "{err}; ensure Pages is enabled in the repository settings"
                ))
            }
            ApiErrorKind::ClientError => DeployError::Rejected(format!(
                "{err}; ensure the deploy token has the 'pages: write' permission"
            )),
            ApiErrorKind::ServerError => {
                DeployError::Server(format!("{err}; try redeploying later"))
            }
            ApiErrorKind::Network => DeployError::Api(err),
        }
    }
}

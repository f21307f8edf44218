// ABOUTME: Classification of raw status strings from the status endpoint.
// ABOUTME: Separates terminal, recoverable, and unrecognized statuses.

/// Classified result of one status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentStatus {
    /// Deployment finished successfully. Terminal.
    Succeed,

    /// Deployment failed permanently. Terminal, never retried.
    DeploymentFailed,

    /// The artifact itself is invalid. Terminal, never retried.
    ContentFailed,

    /// A known transient condition; counted against the error budget.
    Recoverable(RecoverableStatus),

    /// Any other status string; treated as still in progress.
    Unrecognized(String),
}

/// The known set of transient status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverableStatus {
    UnknownStatus,
    NotFound,
    AttemptError,
}

impl DeploymentStatus {
    pub fn classify(raw: &str) -> Self {
        match raw {
            "succeed" => DeploymentStatus::Succeed,
            "deployment_failed" => DeploymentStatus::DeploymentFailed,
            "deployment_content_failed" => DeploymentStatus::ContentFailed,
            "unknown_status" => DeploymentStatus::Recoverable(RecoverableStatus::UnknownStatus),
            "not_found" => DeploymentStatus::Recoverable(RecoverableStatus::NotFound),
            "deployment_attempt_error" => {
                DeploymentStatus::Recoverable(RecoverableStatus::AttemptError)
            }
            other => DeploymentStatus::Unrecognized(other.to_string()),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, DeploymentStatus::Recoverable(_))
    }
}

impl RecoverableStatus {
    /// Human-readable progress line for this condition.
    pub fn message(&self) -> &'static str {
        match self {
            RecoverableStatus::UnknownStatus => {
                "Status unknown, waiting for the service to report progress"
            }
            RecoverableStatus::NotFound => {
                "Deployment not found yet, the service may still be registering it"
            }
            RecoverableStatus::AttemptError => {
                "Deployment attempt hit a transient error, it will be retried remotely"
            }
        }
    }
}

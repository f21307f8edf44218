// ABOUTME: Generic deployment lifecycle struct parameterized by state marker.
// ABOUTME: Holds the deploy request plus the single-use deployment record.

use std::time::Duration;

use crate::types::{BuildVersion, DeploymentId};

use super::state::{Finished, Prepared, Submitted};
use super::TerminalOutcome;

/// The mutable record of one remote deployment.
///
/// Single-use: created with `pending = true` by a successful submission,
/// settled exactly once by the polling loop or by cancellation, and never
/// reused across lifecycle instances.
#[derive(Debug)]
pub struct DeploymentRecord {
    id: DeploymentId,
    pending: bool,
}

impl DeploymentRecord {
    pub fn new(id: DeploymentId) -> Self {
        Self { id, pending: true }
    }

    pub fn id(&self) -> &DeploymentId {
        &self.id
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Mark the record terminal. Once settled it never becomes pending again.
    pub fn settle(&mut self) {
        self.pending = false;
    }
}

/// Polling policy for one deployment. All values are externally supplied;
/// the lifecycle invents no defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct PollPolicy {
    /// Wall-clock budget for the whole polling loop.
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,

    /// Baseline delay between status queries, before backoff.
    #[serde(with = "humantime_serde")]
    pub reporting_interval: Duration,

    /// Maximum tolerated transient errors before aborting and cancelling.
    pub error_count: u32,
}

/// Inputs for one deployment run.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    /// Signed URL of the already-uploaded artifact.
    pub artifact_url: String,

    /// Version label, also the deployment id fallback.
    pub build_version: BuildVersion,

    /// OIDC identity token forwarded to the creation call.
    pub oidc_token: Option<String>,

    /// Deploy as a preview rather than to the live site.
    pub preview: bool,

    /// Polling policy.
    pub poll: PollPolicy,
}

/// A deployment lifecycle, parameterized by its current state.
///
/// The state type parameter `S` carries state-specific data (the deployment
/// record, the terminal outcome) directly in the state type, so a record can
/// only exist after submission and an outcome only after the loop ends.
#[derive(Debug)]
pub struct PagesDeploy<S> {
    pub(crate) request: DeployRequest,
    pub(crate) state: S,
}

impl PagesDeploy<Prepared> {
    /// Start a new lifecycle for the given request.
    pub fn new(request: DeployRequest) -> Self {
        PagesDeploy {
            request,
            state: Prepared,
        }
    }
}

impl<S> PagesDeploy<S> {
    pub fn request(&self) -> &DeployRequest {
        &self.request
    }
}

impl PagesDeploy<Submitted> {
    /// Id assigned by the remote service.
    pub fn deployment_id(&self) -> &DeploymentId {
        self.state.record().id()
    }
}

impl PagesDeploy<Finished> {
    pub fn deployment_id(&self) -> &DeploymentId {
        self.state.record().id()
    }

    /// Whether the record is still marked pending. False for every outcome
    /// except an abort where cancellation itself failed.
    pub fn is_pending(&self) -> bool {
        self.state.record().is_pending()
    }

    pub fn outcome(&self) -> TerminalOutcome {
        self.state.outcome()
    }
}

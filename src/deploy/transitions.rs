// ABOUTME: State transition methods for the deployment lifecycle.
// ABOUTME: Submission, the polling loop, and best-effort cancellation.

use tokio::time::Instant;

use crate::api::{CreateDeploymentRequest, DeploymentCreated, PagesApi};
use crate::output::Output;
use crate::types::{BuildVersion, DeploymentId};

use super::budget::ErrorBudget;
use super::deployment::{DeploymentRecord, PagesDeploy};
use super::error::DeployError;
use super::outcome::TerminalOutcome;
use super::state::{Finished, Prepared, Submitted};
use super::status::DeploymentStatus;

// =============================================================================
// Prepared -> Submitted
// =============================================================================

impl PagesDeploy<Prepared> {
    /// Submit the deployment to the remote service.
    ///
    /// Creation is one-shot: on failure the API error is mapped onto the
    /// deployment taxonomy and returned, with no record created and no retry.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Rejected`, `SiteNotFound`, or `Server` for
    /// structured responses, `Api` for transport failures.
    #[must_use = "deployment state must be used"]
    pub async fn submit<A: PagesApi>(
        self,
        api: &A,
        out: &Output,
    ) -> Result<PagesDeploy<Submitted>, DeployError> {
        let request = CreateDeploymentRequest {
            artifact_url: self.request.artifact_url.clone(),
            pages_build_version: self.request.build_version.to_string(),
            oidc_token: self.request.oidc_token.clone(),
            preview: self.request.preview,
        };

        let created = api
            .create_deployment(&request)
            .await
            .map_err(DeployError::creation)?;

        let id = derive_deployment_id(&created, &self.request.build_version);
        tracing::info!(deployment = %id, "deployment created");
        out.progress(&format!("Created deployment {id}"));

        if let Some(page_url) = &created.page_url {
            out.progress(&format!("Site will be available at {page_url}"));
        }

        Ok(PagesDeploy {
            request: self.request,
            state: Submitted {
                record: DeploymentRecord::new(id),
            },
        })
    }
}

/// The deployment id is the trailing path segment of the status URL, or the
/// build version when the response carries no usable URL.
fn derive_deployment_id(created: &DeploymentCreated, build_version: &BuildVersion) -> DeploymentId {
    created
        .status_url
        .as_deref()
        .map(|url| url.trim_end_matches('/'))
        .and_then(|url| url.rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .map(|segment| DeploymentId::new(segment.to_string()))
        .unwrap_or_else(|| DeploymentId::new(build_version.as_str().to_string()))
}

// =============================================================================
// Submitted -> Finished
// =============================================================================

impl PagesDeploy<Submitted> {
    /// Poll the status endpoint until the deployment reaches a terminal
    /// state, the error budget runs out, or the timeout elapses.
    ///
    /// Every iteration sleeps `reporting_interval` plus the current backoff
    /// before querying, so budget and timeout checks only run between
    /// iterations. Budget exhaustion and timeout both attempt cancellation
    /// exactly once before returning their outcome.
    ///
    /// # Errors
    ///
    /// Returns `DeployError::Api` if the status query itself fails at the
    /// transport level. That path ends the lifecycle without a cancel call:
    /// with the transport already failing, another request would most likely
    /// fail too and only delay shutdown.
    #[must_use = "deployment state must be used"]
    pub async fn poll_until_terminal<A: PagesApi>(
        mut self,
        api: &A,
        out: &Output,
    ) -> Result<PagesDeploy<Finished>, DeployError> {
        let policy = self.request.poll.clone();
        let started = Instant::now();
        let mut budget = ErrorBudget::new();

        loop {
            tokio::time::sleep(policy.reporting_interval + budget.delay()).await;

            let poll = match api.query_status(self.state.record.id()).await {
                Ok(poll) => poll,
                Err(e) => {
                    tracing::error!(
                        deployment = %self.state.record.id(),
                        error = %e,
                        "status query failed"
                    );
                    out.error(&format!("Status query failed: {e}"));
                    return Err(e.into());
                }
            };

            let status = DeploymentStatus::classify(&poll.status);
            match &status {
                DeploymentStatus::Succeed => {
                    self.state.record.settle();
                    out.success("Deployment succeeded");
                    return Ok(self.finish(TerminalOutcome::Succeeded));
                }
                DeploymentStatus::DeploymentFailed => {
                    self.state.record.settle();
                    out.error("Deployment failed");
                    return Ok(self.finish(TerminalOutcome::DeploymentFailed));
                }
                DeploymentStatus::ContentFailed => {
                    self.state.record.settle();
                    out.error("Artifact could not be deployed; check its size and contents");
                    return Ok(self.finish(TerminalOutcome::ContentFailed));
                }
                DeploymentStatus::Recoverable(kind) => out.progress(kind.message()),
                DeploymentStatus::Unrecognized(raw) => {
                    out.progress(&format!("Current status: {raw}"));
                }
            }

            budget.observe(poll.http_status, &status);

            if budget.is_exhausted(policy.error_count) {
                let errors = budget.error_count();
                out.error(&format!(
                    "Aborting: {errors} status checks failed, cancelling deployment"
                ));
                cancel_if_pending(api, &mut self.state.record, out).await;
                return Ok(self.finish(TerminalOutcome::ErrorBudgetExhausted { errors }));
            }

            if started.elapsed() >= policy.timeout {
                let elapsed_secs = started.elapsed().as_secs();
                out.error(&format!(
                    "Aborting: deployment still pending after {elapsed_secs}s, cancelling"
                ));
                cancel_if_pending(api, &mut self.state.record, out).await;
                return Ok(self.finish(TerminalOutcome::TimedOut { elapsed_secs }));
            }
        }
    }

    fn finish(self, outcome: TerminalOutcome) -> PagesDeploy<Finished> {
        PagesDeploy {
            request: self.request,
            state: Finished {
                record: self.state.record,
                outcome,
            },
        }
    }
}

// =============================================================================
// Cancellation
// =============================================================================

/// Best-effort cancellation of a pending deployment.
///
/// No-op (zero network calls) when the record is already settled. On success
/// the record is settled; on failure the error is reported but never
/// re-raised, so it cannot mask the terminal reason that triggered the
/// cancellation.
pub async fn cancel_if_pending<A: PagesApi>(
    api: &A,
    record: &mut DeploymentRecord,
    out: &Output,
) {
    if !record.is_pending() {
        return;
    }

    match api.cancel_deployment(record.id()).await {
        Ok(()) => {
            record.settle();
            tracing::info!(deployment = %record.id(), "deployment cancelled");
            out.progress(&format!("Deployment {} cancelled", record.id()));
        }
        Err(e) => {
            tracing::warn!(deployment = %record.id(), error = %e, "cancel failed");
            out.warn(&format!("Failed to cancel deployment {}: {e}", record.id()));
        }
    }
}

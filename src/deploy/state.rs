// ABOUTME: Lifecycle state types for the type state pattern.
// ABOUTME: State types carry their own data so illegal transitions cannot compile.

use super::deployment::DeploymentRecord;
use super::outcome::TerminalOutcome;

/// Initial state: request assembled, nothing submitted yet.
/// Available actions: `submit()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Prepared;

/// Deployment created and pending on the remote service.
/// Available actions: `poll_until_terminal()`
#[derive(Debug)]
pub struct Submitted {
    pub(crate) record: DeploymentRecord,
}

/// Terminal state: the deployment settled or was cancelled.
#[derive(Debug)]
pub struct Finished {
    pub(crate) record: DeploymentRecord,
    pub(crate) outcome: TerminalOutcome,
}

impl Submitted {
    pub(crate) fn record(&self) -> &DeploymentRecord {
        &self.record
    }
}

impl Finished {
    pub(crate) fn record(&self) -> &DeploymentRecord {
        &self.record
    }

    pub(crate) fn outcome(&self) -> TerminalOutcome {
        self.outcome
    }
}

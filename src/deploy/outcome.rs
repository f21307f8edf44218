// ABOUTME: Terminal outcomes of the polling loop.
// ABOUTME: Conversion to DeployError drives the CLI exit path.

use super::error::DeployError;

/// How a tracked deployment ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalOutcome {
    /// The deployment succeeded.
    Succeeded,

    /// The service reported a permanent deployment failure.
    DeploymentFailed,

    /// The artifact itself was rejected.
    ContentFailed,

    /// The wall-clock timeout elapsed; cancellation was attempted.
    TimedOut { elapsed_secs: u64 },

    /// The error budget was exhausted; cancellation was attempted.
    ErrorBudgetExhausted { errors: u32 },
}

impl TerminalOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TerminalOutcome::Succeeded)
    }

    /// Map failure outcomes onto the deployment error taxonomy.
    pub fn into_result(self) -> Result<(), DeployError> {
        match self {
            TerminalOutcome::Succeeded => Ok(()),
            TerminalOutcome::DeploymentFailed => Err(DeployError::Failed),
            TerminalOutcome::ContentFailed => Err(DeployError::Content),
            TerminalOutcome::TimedOut { elapsed_secs } => Err(DeployError::Timeout(elapsed_secs)),
            TerminalOutcome::ErrorBudgetExhausted { errors } => {
                Err(DeployError::BudgetExhausted(errors))
            }
        }
    }
}

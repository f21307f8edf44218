// ABOUTME: Deployment lifecycle orchestration using the type state pattern.
// ABOUTME: Exports the state machine, error budget, and status classification.

mod budget;
mod deployment;
mod error;
mod outcome;
mod state;
mod status;
mod transitions;

pub use budget::{ErrorBudget, MAX_BACKOFF_MS, next_backoff};
pub use deployment::{DeployRequest, DeploymentRecord, PagesDeploy, PollPolicy};
pub use error::DeployError;
pub use outcome::TerminalOutcome;
pub use state::{Finished, Prepared, Submitted};
pub use status::{DeploymentStatus, RecoverableStatus};
pub use transitions::cancel_if_pending;

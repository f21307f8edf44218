// ABOUTME: Identifier for a remote deployment job.
// ABOUTME: Wraps the opaque id the status and cancel endpoints are keyed by.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a deployment by the remote service.
///
/// Derived from the trailing path segment of the status URL returned at
/// creation time, or from the build version when no status URL is present.
#[must_use = "IDs reference remote resources and should not be ignored"]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentId(String);

impl DeploymentId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ABOUTME: Build version string attached to a deployment request.
// ABOUTME: Doubles as the deployment id fallback when no status URL is returned.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildVersionError {
    #[error("build version cannot be empty")]
    Empty,

    #[error("build version cannot contain whitespace")]
    Whitespace,
}

/// Caller-supplied version label for the artifact being deployed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildVersion(String);

impl BuildVersion {
    pub fn new(value: &str) -> Result<Self, BuildVersionError> {
        if value.is_empty() {
            return Err(BuildVersionError::Empty);
        }

        if value.chars().any(char::is_whitespace) {
            return Err(BuildVersionError::Whitespace);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

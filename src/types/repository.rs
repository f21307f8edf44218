// ABOUTME: Repository slug validation for owner/name pairs.
// ABOUTME: The slug scopes every deployment endpoint on the remote API.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoSlugError {
    #[error("repository cannot be empty")]
    Empty,

    #[error("repository must be in owner/name form: '{0}'")]
    MissingSlash(String),

    #[error("repository owner cannot be empty")]
    EmptyOwner,

    #[error("repository name cannot be empty")]
    EmptyName,

    #[error("invalid character in repository: '{0}'")]
    InvalidChar(char),
}

/// A validated `owner/name` repository slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    pub fn parse(value: &str) -> Result<Self, RepoSlugError> {
        if value.is_empty() {
            return Err(RepoSlugError::Empty);
        }

        let (owner, name) = value
            .split_once('/')
            .ok_or_else(|| RepoSlugError::MissingSlash(value.to_string()))?;

        if owner.is_empty() {
            return Err(RepoSlugError::EmptyOwner);
        }

        if name.is_empty() {
            return Err(RepoSlugError::EmptyName);
        }

        for c in owner.chars().chain(name.chars()) {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' && c != '.' {
                return Err(RepoSlugError::InvalidChar(c));
            }
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

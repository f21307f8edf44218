// ABOUTME: Type-safe identifiers and validated domain types.
// ABOUTME: Prevents raw strings from flowing through the deployment lifecycle.

mod build_version;
mod id;
mod repository;

pub use build_version::{BuildVersion, BuildVersionError};
pub use id::DeploymentId;
pub use repository::{RepoSlug, RepoSlugError};

// ABOUTME: Remote Pages API collaborator: trait contract and HTTP implementation.
// ABOUTME: Defines PagesApi, wire types, and the transport error taxonomy.

mod error;
mod http;
mod traits;

pub use error::{ApiError, ApiErrorKind};
pub use http::HttpPagesApi;
pub use traits::{CreateDeploymentRequest, DeploymentCreated, PagesApi, StatusPoll};

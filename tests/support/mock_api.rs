// ABOUTME: Scripted PagesApi implementation for lifecycle tests.
// ABOUTME: Replays canned responses and counts every remote call.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use selida::api::{ApiError, CreateDeploymentRequest, DeploymentCreated, PagesApi, StatusPoll};
use selida::types::DeploymentId;

/// Mock remote API that replays a scripted sequence of status polls.
///
/// Panics on a status query past the end of the script, so tests also catch
/// loops that poll more often than they should.
pub struct ScriptedApi {
    status_url: Option<String>,
    create_error: Option<(u16, String)>,
    polls: Mutex<VecDeque<Result<StatusPoll, ApiError>>>,
    fail_cancel: bool,
    create_calls: AtomicUsize,
    query_calls: AtomicUsize,
    cancel_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            status_url: None,
            create_error: None,
            polls: Mutex::new(VecDeque::new()),
            fail_cancel: false,
            create_calls: AtomicUsize::new(0),
            query_calls: AtomicUsize::new(0),
            cancel_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_status_url(mut self, url: &str) -> Self {
        self.status_url = Some(url.to_string());
        self
    }

    pub fn failing_create(mut self, status: u16, body: &str) -> Self {
        self.create_error = Some((status, body.to_string()));
        self
    }

    pub fn with_poll(self, http_status: u16, status: &str) -> Self {
        self.polls.lock().unwrap().push_back(Ok(StatusPoll {
            http_status,
            status: status.to_string(),
        }));
        self
    }

    pub fn with_polls(mut self, http_status: u16, status: &str, count: usize) -> Self {
        for _ in 0..count {
            self = self.with_poll(http_status, status);
        }
        self
    }

    pub fn with_poll_failure(self, status: u16, body: &str) -> Self {
        self.polls.lock().unwrap().push_back(Err(ApiError::Response {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn failing_cancel(mut self) -> Self {
        self.fail_cancel = true;
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    pub fn cancel_calls(&self) -> usize {
        self.cancel_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PagesApi for ScriptedApi {
    async fn create_deployment(
        &self,
        _request: &CreateDeploymentRequest,
    ) -> Result<DeploymentCreated, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        if let Some((status, body)) = &self.create_error {
            return Err(ApiError::Response {
                status: *status,
                body: body.clone(),
            });
        }

        Ok(DeploymentCreated {
            status_url: self.status_url.clone(),
            page_url: None,
        })
    }

    async fn query_status(&self, _id: &DeploymentId) -> Result<StatusPoll, ApiError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        self.polls
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected status query past end of script")
    }

    async fn cancel_deployment(&self, _id: &DeploymentId) -> Result<(), ApiError> {
        self.cancel_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_cancel {
            return Err(ApiError::Response {
                status: 500,
                body: "cancel failed".to_string(),
            });
        }

        Ok(())
    }
}

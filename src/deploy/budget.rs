// ABOUTME: Error budget and adaptive backoff accounting for the polling loop.
// ABOUTME: Pure state transitions, independent of any timer.

use std::time::Duration;

use super::status::DeploymentStatus;

/// Backoff ceiling in milliseconds. Growth stops once the delay reaches it,
/// pinning the delay above 15 seconds and below 30 seconds.
pub const MAX_BACKOFF_MS: u64 = 16_383;

/// Next backoff delay after an error: doubling plus one, pinned at the
/// ceiling. From zero this yields 1, 3, 7, 15, ... 16_383.
pub fn next_backoff(delay_ms: u64) -> u64 {
    if delay_ms < MAX_BACKOFF_MS {
        (delay_ms << 1) | 1
    } else {
        delay_ms
    }
}

/// Running error count and backoff delay for one polling loop.
#[derive(Debug, Clone, Default)]
pub struct ErrorBudget {
    error_count: u32,
    backoff_ms: u64,
}

impl ErrorBudget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one status query. A non-200 HTTP status or a recoverable
    /// classified status counts as an error and grows the backoff; a clean
    /// response resets the backoff to zero. The error count never decreases.
    pub fn observe(&mut self, http_status: u16, status: &DeploymentStatus) {
        if http_status != 200 || status.is_recoverable() {
            self.error_count += 1;
            self.backoff_ms = next_backoff(self.backoff_ms);
        } else {
            self.backoff_ms = 0;
        }
    }

    /// Current backoff delay, added to the baseline reporting interval.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    pub fn is_exhausted(&self, max_error_count: u32) -> bool {
        self.error_count >= max_error_count
    }
}

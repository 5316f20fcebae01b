//! Per-request deadlines threaded explicitly through every layer.
//!
//! A [`RequestDeadline`] is created once when a request enters the pipeline
//! and handed by reference to services and repositories. Repositories bound
//! each storage call with [`RequestDeadline::run`].

use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, timeout_at};

/// Timeout applied when no explicit deadline was configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Raised when a bounded operation does not finish before its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("request deadline exceeded")]
pub struct DeadlineExceeded;

/// Absolute point in time by which a request must finish.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use trackme::domain::RequestDeadline;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let deadline = RequestDeadline::after(Duration::from_secs(1));
/// let value = deadline.run(async { 42 }).await.expect("finishes in time");
/// assert_eq!(value, 42);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestDeadline {
    expires_at: Instant,
}

impl RequestDeadline {
    /// Start a deadline that expires `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self {
            expires_at: Instant::now() + timeout,
        }
    }

    /// Time left before expiry; zero once expired.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    /// Whether the deadline has already passed.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Drive `fut` to completion unless the deadline passes first.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, DeadlineExceeded>
    where
        F: Future,
    {
        timeout_at(self.expires_at, fut)
            .await
            .map_err(|_| DeadlineExceeded)
    }
}

impl Default for RequestDeadline {
    fn default() -> Self {
        Self::after(DEFAULT_REQUEST_TIMEOUT)
    }
}

//! Driving port for reading users.
//!
//! HTTP handlers depend on this trait rather than on the service type, so
//! handler tests can substitute any implementation.

use async_trait::async_trait;

use crate::domain::{Error, RequestDeadline, User, UserId};

/// Read-side user use-cases.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch one user. Fails with `NotFound` when absent.
    async fn get_user_by_id(&self, deadline: &RequestDeadline, id: &UserId)
    -> Result<User, Error>;

    /// Fetch every user. Any repository fault surfaces as `NotFound`.
    async fn get_all_users(&self, deadline: &RequestDeadline) -> Result<Vec<User>, Error>;
}

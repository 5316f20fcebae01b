//! Driving port for creating, replacing, and deleting users.

use async_trait::async_trait;

use crate::domain::{Error, RequestDeadline, User, UserFields, UserId};

/// Write-side user use-cases.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist `user`, writing any assigned identifier back into it.
    async fn create_user(&self, deadline: &RequestDeadline, user: &mut User) -> Result<(), Error>;

    /// Replace every updatable field of the user identified by `id`.
    async fn update_user(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
        fields: UserFields,
    ) -> Result<User, Error>;

    /// Delete the user identified by `id`. Fails with `NotFound` when absent.
    async fn delete_user_by_id(&self, deadline: &RequestDeadline, id: &UserId)
    -> Result<(), Error>;
}

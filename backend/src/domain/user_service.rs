//! User domain service.
//!
//! Implements the [`UsersQuery`] and [`UsersCommand`] driving ports on top
//! of a [`UserRepository`], translating persistence faults into the domain
//! [`Error`] taxonomy so inbound adapters never see storage details.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, RequestDeadline, User, UserFields, UserId};

const USER_NOT_FOUND: &str = "user not found";
const USERS_NOT_FOUND: &str = "users not found";

/// User service implementing the driving ports.
pub struct UserService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a new service over `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::NotFound => Error::not_found(USER_NOT_FOUND),
        UserPersistenceError::Storage { message } => Error::internal(message),
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn get_user_by_id(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
    ) -> Result<User, Error> {
        self.repo
            .get_user_by_id(deadline, id)
            .await
            .map_err(map_persistence_error)
    }

    /// Any failure while listing is reported as `NotFound`, so a storage
    /// outage is indistinguishable from "no users" to callers. The
    /// underlying fault is logged.
    async fn get_all_users(&self, deadline: &RequestDeadline) -> Result<Vec<User>, Error> {
        self.repo.get_all_users(deadline).await.map_err(|error| {
            warn!(%error, "listing users failed; reporting as not found");
            Error::not_found(USERS_NOT_FOUND)
        })
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + ?Sized,
{
    // TODO: validate username and email once account credentials exist.
    async fn create_user(&self, deadline: &RequestDeadline, user: &mut User) -> Result<(), Error> {
        self.repo
            .create_user(deadline, user)
            .await
            .map_err(map_persistence_error)
    }

    async fn update_user(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
        fields: UserFields,
    ) -> Result<User, Error> {
        self.repo
            .update_user(deadline, id, &fields)
            .await
            .map_err(map_persistence_error)
    }

    async fn delete_user_by_id(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
    ) -> Result<(), Error> {
        self.repo
            .delete_user_by_id(deadline, id)
            .await
            .map_err(map_persistence_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;

//! MongoDB-backed `UserRepository` implementation.
//!
//! This adapter implements the domain's `UserRepository` port over the
//! `users` collection. Every driver call, cursor draining included, is
//! bounded by the caller's [`RequestDeadline`].

use std::future::IntoFuture;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, bson::doc};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{RequestDeadline, User, UserFields, UserId};

use super::MongoConnection;
use super::models::{USERS_COLLECTION, UserDocument, id_filter, replace_fields_update};
use super::mongo_error_mapping::{map_deadline_error, map_mongo_error};

/// MongoDB implementation of the `UserRepository` port.
#[derive(Clone, Debug)]
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a repository over the users collection of `connection`.
    pub fn new(connection: &MongoConnection) -> Self {
        Self {
            users: connection.database().collection(USERS_COLLECTION),
        }
    }
}

/// Drive `operation` under `deadline`, flattening both failure sources.
async fn bounded<T, F>(
    deadline: &RequestDeadline,
    operation: &'static str,
    fut: F,
) -> Result<T, UserPersistenceError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match deadline.run(fut.into_future()).await {
        Ok(result) => result.map_err(|error| map_mongo_error(operation, error)),
        Err(elapsed) => Err(map_deadline_error(operation, elapsed)),
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn get_user_by_id(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
    ) -> Result<User, UserPersistenceError> {
        let document = bounded(deadline, "find_one", self.users.find_one(id_filter(id))).await?;
        document
            .map(User::from)
            .ok_or_else(UserPersistenceError::not_found)
    }

    async fn get_all_users(
        &self,
        deadline: &RequestDeadline,
    ) -> Result<Vec<User>, UserPersistenceError> {
        let documents: Vec<UserDocument> = bounded(deadline, "find", async {
            let cursor = self.users.find(doc! {}).await?;
            cursor.try_collect::<Vec<_>>().await
        })
        .await?;
        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn create_user(
        &self,
        deadline: &RequestDeadline,
        user: &mut User,
    ) -> Result<(), UserPersistenceError> {
        if user.id.is_nil() {
            user.id = UserId::random();
        }
        let document = UserDocument::from(&*user);
        bounded(deadline, "insert_one", self.users.insert_one(&document)).await?;
        Ok(())
    }

    async fn update_user(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
        fields: &UserFields,
    ) -> Result<User, UserPersistenceError> {
        let updated = bounded(
            deadline,
            "find_one_and_update",
            self.users
                .find_one_and_update(id_filter(id), replace_fields_update(fields))
                .return_document(ReturnDocument::After),
        )
        .await?;
        updated
            .map(User::from)
            .ok_or_else(UserPersistenceError::not_found)
    }

    async fn delete_user_by_id(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
    ) -> Result<(), UserPersistenceError> {
        let result = bounded(deadline, "delete_one", self.users.delete_one(id_filter(id))).await?;
        if result.deleted_count == 0 {
            return Err(UserPersistenceError::not_found());
        }
        Ok(())
    }
}

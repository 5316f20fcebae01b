//! Driven port for user persistence and its error type.
//!
//! Adapters translate their driver's faults into [`UserPersistenceError`]:
//! an absent document is always `NotFound`, whatever the driver calls it;
//! everything else, deadline expiry included, is `Storage`.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{RequestDeadline, User, UserFields, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// No document matched the requested identifier.
        NotFound => "user document not found",
        /// Any other driver or decoding fault.
        Storage { message: String } => "user repository storage failure: {message}",
    }
}

/// Persistence operations over the users collection.
///
/// Every method is bounded by the caller's [`RequestDeadline`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the user whose identifier matches `id`.
    async fn get_user_by_id(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
    ) -> Result<User, UserPersistenceError>;

    /// Fetch every stored user in storage order. An empty collection yields
    /// an empty vector.
    async fn get_all_users(
        &self,
        deadline: &RequestDeadline,
    ) -> Result<Vec<User>, UserPersistenceError>;

    /// Persist `user`, first assigning a fresh identifier when `user.id` is
    /// nil. The assigned identifier is written back into `user`.
    async fn create_user(
        &self,
        deadline: &RequestDeadline,
        user: &mut User,
    ) -> Result<(), UserPersistenceError>;

    /// Atomically overwrite the six updatable fields of the user matching
    /// `id` and return the record as it is after the update.
    async fn update_user(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
        fields: &UserFields,
    ) -> Result<User, UserPersistenceError>;

    /// Delete exactly one user matching `id`; `NotFound` when none matched.
    async fn delete_user_by_id(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
    ) -> Result<(), UserPersistenceError>;
}

/// In-process user store for tests and local experiments.
///
/// Preserves insertion order and honours deadlines by refusing to operate
/// once the deadline has passed.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().collect()),
        }
    }

    fn guard(
        &self,
        deadline: &RequestDeadline,
    ) -> Result<std::sync::MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        if deadline.is_expired() {
            return Err(UserPersistenceError::storage("request deadline exceeded"));
        }
        self.users
            .lock()
            .map_err(|_| UserPersistenceError::storage("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_user_by_id(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
    ) -> Result<User, UserPersistenceError> {
        self.guard(deadline)?
            .iter()
            .find(|user| user.id == *id)
            .cloned()
            .ok_or_else(UserPersistenceError::not_found)
    }

    async fn get_all_users(
        &self,
        deadline: &RequestDeadline,
    ) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.guard(deadline)?.clone())
    }

    async fn create_user(
        &self,
        deadline: &RequestDeadline,
        user: &mut User,
    ) -> Result<(), UserPersistenceError> {
        let mut users = self.guard(deadline)?;
        if user.id.is_nil() {
            user.id = UserId::random();
        }
        if users.iter().any(|existing| existing.id == user.id) {
            return Err(UserPersistenceError::storage(format!(
                "duplicate key: {}",
                user.id
            )));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update_user(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
        fields: &UserFields,
    ) -> Result<User, UserPersistenceError> {
        let mut users = self.guard(deadline)?;
        let user = users
            .iter_mut()
            .find(|user| user.id == *id)
            .ok_or_else(UserPersistenceError::not_found)?;
        user.replace_fields(fields.clone());
        Ok(user.clone())
    }

    async fn delete_user_by_id(
        &self,
        deadline: &RequestDeadline,
        id: &UserId,
    ) -> Result<(), UserPersistenceError> {
        let mut users = self.guard(deadline)?;
        let position = users
            .iter()
            .position(|user| user.id == *id)
            .ok_or_else(UserPersistenceError::not_found)?;
        users.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::time::Duration;

    #[fixture]
    fn deadline() -> RequestDeadline {
        RequestDeadline::after(Duration::from_secs(5))
    }

    fn alice() -> User {
        User::new(
            UserId::nil(),
            UserFields {
                username: "alice".into(),
                email: "a@x.com".into(),
                net_worth: 100.5,
                accounts: vec!["checking".into()],
                credit_score: 700,
                budget: vec!["rent".into()],
            },
        )
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_id_and_get_returns_equal_record(deadline: RequestDeadline) {
        let repo = InMemoryUserRepository::new();
        let mut user = alice();

        repo.create_user(&deadline, &mut user)
            .await
            .expect("create succeeds");

        assert!(!user.id.is_nil());
        let stored = repo
            .get_user_by_id(&deadline, &user.id)
            .await
            .expect("user exists");
        assert_eq!(stored, user);
    }

    #[rstest]
    #[tokio::test]
    async fn create_keeps_caller_supplied_id(deadline: RequestDeadline) {
        let repo = InMemoryUserRepository::new();
        let id = UserId::random();
        let mut user = User { id, ..alice() };

        repo.create_user(&deadline, &mut user)
            .await
            .expect("create succeeds");
        assert_eq!(user.id, id);
    }

    #[rstest]
    #[tokio::test]
    async fn get_all_on_empty_store_is_empty(deadline: RequestDeadline) {
        let repo = InMemoryUserRepository::new();
        let users = repo.get_all_users(&deadline).await.expect("list succeeds");
        assert!(users.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_all_fields(deadline: RequestDeadline) {
        let repo = InMemoryUserRepository::new();
        let mut user = alice();
        repo.create_user(&deadline, &mut user)
            .await
            .expect("create succeeds");

        let updated = repo
            .update_user(
                &deadline,
                &user.id,
                &UserFields {
                    username: "alice2".into(),
                    net_worth: 5.0,
                    ..UserFields::default()
                },
            )
            .await
            .expect("update succeeds");

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.username, "alice2");
        assert_eq!(updated.email, "");
        assert!(updated.budget.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_twice_reports_not_found_the_second_time(deadline: RequestDeadline) {
        let repo = InMemoryUserRepository::new();
        let mut user = alice();
        repo.create_user(&deadline, &mut user)
            .await
            .expect("create succeeds");

        repo.delete_user_by_id(&deadline, &user.id)
            .await
            .expect("first delete succeeds");
        let second = repo.delete_user_by_id(&deadline, &user.id).await;
        assert_eq!(second, Err(UserPersistenceError::NotFound));
    }

    #[rstest]
    #[tokio::test]
    async fn expired_deadline_is_a_storage_fault() {
        let repo = InMemoryUserRepository::new();
        let expired = RequestDeadline::after(Duration::ZERO);
        let result = repo.get_all_users(&expired).await;
        assert!(matches!(result, Err(UserPersistenceError::Storage { .. })));
    }
}

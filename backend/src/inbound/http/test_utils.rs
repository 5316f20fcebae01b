//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{InMemoryUserRepository, UserRepository};
use crate::domain::{User, UserFields, UserId};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users_scope;

/// Build an app serving the user scope over `repo`.
pub fn test_app<R>(
    repo: Arc<R>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: UserRepository + 'static,
{
    App::new()
        .app_data(web::Data::new(HttpState::for_repository(repo)))
        .service(users_scope())
}

/// A stored user with the canonical sample fields.
pub fn alice() -> User {
    User::new(
        UserId::random(),
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

/// An in-memory repository seeded with `users`.
pub fn seeded(users: impl IntoIterator<Item = User>) -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::with_users(users))
}

/// An empty in-memory repository.
pub fn empty_store() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::new())
}

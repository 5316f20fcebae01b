//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserService;
use crate::domain::ports::{UserRepository, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users_query: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users_query: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users_query,
            users_command,
        }
    }

    /// Construct state backed by a [`UserService`] over `repo`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use trackme::domain::ports::InMemoryUserRepository;
    /// use trackme::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::for_repository(Arc::new(InMemoryUserRepository::new()));
    /// let _query = state.users_query.clone();
    /// ```
    pub fn for_repository<R>(repo: Arc<R>) -> Self
    where
        R: UserRepository + ?Sized + 'static,
    {
        let service = Arc::new(UserService::new(repo));
        Self::new(service.clone(), service)
    }
}

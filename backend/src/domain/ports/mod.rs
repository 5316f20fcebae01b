//! Domain ports for the hexagonal boundary.
//!
//! - Driven: [`UserRepository`], implemented by persistence adapters.
//! - Driving: [`UsersQuery`] and [`UsersCommand`], consumed by inbound
//!   adapters and implemented by [`crate::domain::UserService`].

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{InMemoryUserRepository, UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;

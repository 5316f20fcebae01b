//! HTTP inbound adapter exposing REST endpoints.
//!
//! ```text
//! GET    /                     plain-text greeting
//! GET    /api/products/        list users
//! POST   /api/products/        create a user
//! GET    /api/products/{id}    fetch a user
//! PUT    /api/products/{id}    replace a user's fields
//! DELETE /api/products/{id}    delete a user
//! ```

use actix_web::{Scope, web};

pub mod deadline;
pub mod error;
pub mod greeting;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

/// Path prefix under which the user resource is mounted.
pub const USERS_SCOPE: &str = "/api/products";

/// Scope serving the user resource, including its JSON body configuration.
///
/// The collection answers both with and without a trailing slash.
///
/// Expects [`state::HttpState`] to be registered as application data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use trackme::domain::ports::InMemoryUserRepository;
/// use trackme::inbound::http::state::HttpState;
/// use trackme::inbound::http::users_scope;
///
/// let state = HttpState::for_repository(Arc::new(InMemoryUserRepository::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .service(users_scope());
/// ```
pub fn users_scope() -> Scope {
    web::scope(USERS_SCOPE)
        .app_data(users::json_config())
        .service(
            web::resource(["", "/"])
                .route(web::get().to(users::get_all_users))
                .route(web::post().to(users::create_user)),
        )
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
}

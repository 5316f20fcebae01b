//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

#[cfg(debug_assertions)]
use trackme::doc::ApiDoc;
use trackme::domain::ports::{InMemoryUserRepository, UserRepository};
use trackme::inbound::http::greeting::greeting;
use trackme::inbound::http::health::{HealthState, live, ready};
use trackme::inbound::http::state::HttpState;
use trackme::inbound::http::users_scope;
use trackme::{RequestTimeout, Trace};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    request_timeout: Duration,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        request_timeout,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(RequestTimeout::new(request_timeout))
        .wrap(Trace)
        .service(greeting)
        .service(users_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

fn user_repository(config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &config.user_repository {
        Some(repository) => repository.clone(),
        None => {
            warn!("no user repository configured; users are kept in memory");
            Arc::new(InMemoryUserRepository::new())
        }
    }
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener. Actix
/// stops accepting connections on SIGINT/SIGTERM and lets in-flight requests
/// finish before the future resolves.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::for_repository(user_repository(&config)));
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
        request_timeout: config.request_timeout,
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(config.bind_addr)?
        .run();

    info!(
        bind_addr = %config.bind_addr,
        request_timeout = ?config.request_timeout,
        "server listening"
    );
    health_state.mark_ready();
    Ok(server)
}

//! Backend entry-point: loads settings, verifies the document store, and
//! serves the REST API until a shutdown signal arrives.

mod server;

use std::env;
use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use trackme::config::{DatabaseSettings, ServerSettings};
use trackme::inbound::http::health::HealthState;
use trackme::outbound::persistence::{MongoConfig, MongoConnection, MongoUserRepository};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database = DatabaseSettings::load_from_iter(env::args_os().take(1))
        .map_err(|err| eyre!("failed to load database settings: {err}"))?;
    let settings = ServerSettings::load_from_iter(env::args_os().take(1))
        .map_err(|err| eyre!("failed to load server settings: {err}"))?;

    let mongo = MongoConfig::new(database.url()?, database.database_name());
    let connection = MongoConnection::connect(&mongo)
        .await
        .wrap_err("failed to create database client")?;
    connection
        .ping()
        .await
        .wrap_err("database deployment is unreachable")?;

    let bind_addr = settings
        .bind_addr()
        .wrap_err("TRACKME_BIND_ADDR is not a socket address")?;
    let config = ServerConfig::new(bind_addr)
        .with_request_timeout(settings.request_timeout())
        .with_user_repository(Arc::new(MongoUserRepository::new(&connection)));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    server.await.wrap_err("server terminated abnormally")?;

    info!("shutting down");
    health_state.mark_unhealthy();
    connection.shutdown().await;
    Ok(())
}

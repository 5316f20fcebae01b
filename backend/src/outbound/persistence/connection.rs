//! Process-wide MongoDB client handle.
//!
//! The driver maintains its own connection pool, so a single
//! [`MongoConnection`] is created at startup and cloned into every adapter
//! that needs it.
//!
//! # Design
//!
//! - Connects with the stable Server API v1.
//! - [`MongoConnection::ping`] verifies reachability before the server binds.
//! - All driver errors are mapped to [`ConnectionError`] variants.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};
use tracing::info;

/// Errors raised while establishing or verifying the database connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// The connection string could not be parsed or the client not built.
    #[error("failed to configure database client: {message}")]
    Configure { message: String },

    /// The deployment did not answer the ping command.
    #[error("failed to ping database deployment: {message}")]
    Ping { message: String },
}

impl ConnectionError {
    /// Create a configuration error with the given message.
    pub fn configure(message: impl Into<String>) -> Self {
        Self::Configure {
            message: message.into(),
        }
    }

    /// Create a ping error with the given message.
    pub fn ping(message: impl Into<String>) -> Self {
        Self::Ping {
            message: message.into(),
        }
    }
}

/// Connection string and database name for the document store.
///
/// # Example
///
/// ```
/// use trackme::outbound::persistence::MongoConfig;
///
/// let config = MongoConfig::new("mongodb://localhost:27017", "trackme");
/// assert_eq!(config.database_name(), "trackme");
/// ```
#[derive(Debug, Clone)]
pub struct MongoConfig {
    uri: String,
    database_name: String,
}

impl MongoConfig {
    /// Create a configuration for `uri`, selecting `database_name`.
    pub fn new(uri: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database_name: database_name.into(),
        }
    }

    /// Get the connection string.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Get the database name.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}

/// Shared client plus the selected database.
#[derive(Clone, Debug)]
pub struct MongoConnection {
    client: Client,
    database: Database,
}

impl MongoConnection {
    /// Build a client for `config`.
    ///
    /// The driver connects lazily; call [`Self::ping`] to verify the
    /// deployment is reachable.
    pub async fn connect(config: &MongoConfig) -> Result<Self, ConnectionError> {
        let mut options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| ConnectionError::configure(err.to_string()))?;
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options)
            .map_err(|err| ConnectionError::configure(err.to_string()))?;
        let database = client.database(config.database_name());
        Ok(Self { client, database })
    }

    /// Send `{ping: 1}` to the selected database.
    pub async fn ping(&self) -> Result<(), ConnectionError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| ConnectionError::ping(err.to_string()))?;
        info!(database = self.database.name(), "pinged deployment");
        Ok(())
    }

    /// The selected database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Close every pooled connection. In-flight operations complete first.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("database client shut down");
    }
}

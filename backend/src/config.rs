//! Process settings loaded via OrthoConfig.
//!
//! Values come from the environment (after `.env` has been applied) and the
//! command line. Database settings use the `MONGO` prefix; server settings
//! use `TRACKME`.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::DEFAULT_REQUEST_TIMEOUT;

const DEFAULT_DATABASE_NAME: &str = "trackme";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Raised when a required setting is absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required setting {name}")]
pub struct MissingSettingError {
    name: &'static str,
}

impl MissingSettingError {
    /// Environment variable that was expected.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Document store connection settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MONGO")]
pub struct DatabaseSettings {
    /// Connection string (`MONGO_URL`). Required.
    pub url: Option<String>,
    /// Database name (`MONGO_DB`).
    pub db: Option<String>,
}

impl DatabaseSettings {
    /// Return the connection string, failing when it was not provided.
    pub fn url(&self) -> Result<&str, MissingSettingError> {
        self.url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(MissingSettingError { name: "MONGO_URL" })
    }

    /// Return the database name, falling back to the default.
    pub fn database_name(&self) -> &str {
        self.db
            .as_deref()
            .filter(|db| !db.is_empty())
            .unwrap_or(DEFAULT_DATABASE_NAME)
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRACKME")]
pub struct ServerSettings {
    /// Listen address (`TRACKME_BIND_ADDR`).
    pub bind_addr: Option<String>,
    /// Per-request deadline in milliseconds (`TRACKME_REQUEST_TIMEOUT_MS`).
    pub request_timeout_ms: Option<u64>,
}

impl ServerSettings {
    /// Return the parsed listen address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Return the per-request deadline, falling back to the default.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_database() -> DatabaseSettings {
        DatabaseSettings::load_from_iter([OsString::from("trackme")]).expect("config should load")
    }

    fn load_server() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("trackme")]).expect("config should load")
    }

    #[rstest]
    fn missing_connection_string_is_reported() {
        let _guard = lock_env([("MONGO_URL", None::<String>), ("MONGO_DB", None::<String>)]);

        let settings = load_database();
        let error = settings.url().expect_err("url is required");
        assert_eq!(error.name(), "MONGO_URL");
        assert_eq!(settings.database_name(), DEFAULT_DATABASE_NAME);
    }

    #[rstest]
    fn database_environment_overrides_are_respected() {
        let _guard = lock_env([
            ("MONGO_URL", Some("mongodb://db:27017".to_owned())),
            ("MONGO_DB", Some("ledger".to_owned())),
        ]);

        let settings = load_database();
        assert_eq!(settings.url(), Ok("mongodb://db:27017"));
        assert_eq!(settings.database_name(), "ledger");
    }

    #[rstest]
    fn server_defaults_are_used_when_missing() {
        let _guard = lock_env([
            ("TRACKME_BIND_ADDR", None::<String>),
            ("TRACKME_REQUEST_TIMEOUT_MS", None::<String>),
        ]);

        let settings = load_server();
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([0, 0, 0, 0], 3000)))
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }

    #[rstest]
    fn server_environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TRACKME_BIND_ADDR", Some("127.0.0.1:8080".to_owned())),
            ("TRACKME_REQUEST_TIMEOUT_MS", Some("250".to_owned())),
        ]);

        let settings = load_server();
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([127, 0, 0, 1], 8080)))
        );
        assert_eq!(settings.request_timeout(), Duration::from_millis(250));
    }
}

//! Static server configuration
//!
//! Values are layered as: built-in defaults, then an optional `config.toml`
//! (or the file named by `SCOPED_DATA_CONFIG`), then environment variables
//! prefixed with `SCOPED_DATA__` (e.g. `SCOPED_DATA__SERVER__PORT=8080`).
//! A `.env` file is loaded first if present.

use anyhow::Context;
use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};

use crate::{Error, Result};

const ENV_PREFIX: &str = "SCOPED_DATA";
const CONFIG_PATH_VAR: &str = "SCOPED_DATA_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const FILE_ROTATIONS: &[&str] = &["daily", "hourly", "minutely", "never"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins. Empty means no CORS headers are emitted.
    pub cors_origins: Vec<String>,
    pub max_request_body_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: Vec::new(),
            max_request_body_size: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// One of `daily`, `hourly`, `minutely`, `never`.
    pub file_rotation: String,
    pub service_name: String,
    pub deployment_environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "scoped-data-server".to_string(),
            file_rotation: "daily".to_string(),
            service_name: "scoped-data-server".to_string(),
            deployment_environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `.env`, the optional config file and the environment.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let (file, required) = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => (path, true),
            Err(_) => (DEFAULT_CONFIG_FILE.to_string(), false),
        };

        ::config::Config::builder()
            .add_source(::config::File::with_name(&file).required(required))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration sources ({file})"))?
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::Validation("server.host must not be empty".to_string()));
        }
        if self.server.max_request_body_size == 0 {
            return Err(Error::Validation(
                "server.max_request_body_size must be greater than zero".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::Validation(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }
        if !FILE_ROTATIONS.contains(&self.logging.file_rotation.as_str()) {
            return Err(Error::Validation(format!(
                "logging.file_rotation must be one of {}, got '{}'",
                FILE_ROTATIONS.join(", "),
                self.logging.file_rotation
            )));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let target = format!("{}:{}", self.server.host, self.server.port);
        target
            .to_socket_addrs()
            .with_context(|| format!("Failed to resolve {target}"))?
            .next()
            .with_context(|| format!("No address found for {target}"))
    }
}

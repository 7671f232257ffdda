//! services/client/src/config.rs
//!
//! Defines the client's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: Level,
    pub credential_store_path: PathBuf,
    pub reply_delay: Duration,
    pub google_client_id: Option<String>,
    pub home_page: String,
    pub login_page: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests can avoid the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Backend ---
        let api_base_url = lookup("API_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue(
                "API_BASE_URL".to_string(),
                format!("'{}' is not an http(s) URL", api_base_url),
            ));
        }

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Local Storage ---
        let credential_store_path = match lookup("CREDENTIAL_STORE_PATH") {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .map(|dir| dir.join("athletic_spirit").join("credentials.json"))
                .ok_or_else(|| ConfigError::MissingVar("CREDENTIAL_STORE_PATH".to_string()))?,
        };

        // --- Widget Settings ---
        let reply_delay_ms = match lookup("REPLY_DELAY_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue("REPLY_DELAY_MS".to_string(), e.to_string())
            })?,
            None => 500,
        };

        let google_client_id = lookup("GOOGLE_CLIENT_ID").filter(|id| !id.is_empty());
        let home_page = lookup("HOME_PAGE").unwrap_or_else(|| "newcode.html".to_string());
        let login_page = lookup("LOGIN_PAGE").unwrap_or_else(|| "login.html".to_string());

        Ok(Self {
            api_base_url,
            log_level,
            credential_store_path,
            reply_delay: Duration::from_millis(reply_delay_ms),
            google_client_id,
            home_page,
            login_page,
        })
    }
}

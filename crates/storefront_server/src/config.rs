//! Server configuration.
//!
//! Resolution order, highest first:
//! 1. Explicit overrides (command-line flags, applied by the caller)
//! 2. `STOREFRONT_*` environment variables
//! 3. Built-in development defaults

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_BIND: &str = "STOREFRONT_BIND";
pub const ENV_DB_PATH: &str = "STOREFRONT_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "STOREFRONT_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "STOREFRONT_LOG_DIR";

const DEFAULT_BIND: &str = "127.0.0.1:8000";
const DEFAULT_DB_PATH: &str = "./data.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub db_path: PathBuf,
    pub log_level: String,
    /// `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBind { value: String, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBind { value, reason } => {
                write!(f, "invalid bind address `{value}`: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_text = read(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_text
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidBind {
                value: bind_text.clone(),
                reason: err.to_string(),
            })?;

        Ok(Self {
            bind,
            db_path: read(ENV_DB_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
            log_level: read(ENV_LOG_LEVEL)
                .unwrap_or_else(|| storefront_core::default_log_level().to_string()),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
        })
    }
}

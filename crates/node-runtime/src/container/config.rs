//! # Node Configuration
//!
//! Unified configuration for the gateway and the block store.
//!
//! ## Sources (later wins)
//!
//! 1. Built-in defaults (`0.0.0.0:8080`, `blockchain.db`)
//! 2. JSON file named by `LEDGER_CONFIG`
//! 3. `LEDGER_HTTP_HOST`, `LEDGER_HTTP_PORT`, `LEDGER_DB_PATH`
//!
//! Malformed environment values are logged and ignored.

use api_gateway::GatewayConfig;
use block_ledger::domain::value_objects::DEFAULT_DB_PATH;
use block_ledger::StoreLocation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const ENV_CONFIG_FILE: &str = "LEDGER_CONFIG";
pub const ENV_HTTP_HOST: &str = "LEDGER_HTTP_HOST";
pub const ENV_HTTP_PORT: &str = "LEDGER_HTTP_PORT";
pub const ENV_DB_PATH: &str = "LEDGER_DB_PATH";

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// API Gateway configuration.
    pub gateway: GatewayConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

impl NodeConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the environment.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_CONFIG_FILE) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        config.apply_overrides(&lookup);
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HTTP_HOST) {
            match host.parse() {
                Ok(h) => self.gateway.http.host = h,
                Err(_) => warn!("{} is not an IP address: {}", ENV_HTTP_HOST, host),
            }
        }
        if let Some(port) = lookup(ENV_HTTP_PORT) {
            match port.parse() {
                Ok(p) => self.gateway.http.port = p,
                Err(_) => warn!("{} is not a port number: {}", ENV_HTTP_PORT, port),
            }
        }
        if let Some(path) = lookup(ENV_DB_PATH) {
            self.storage.db_path = path;
        }
    }

    /// Validate configuration before any resource is opened.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;
        if self.storage.db_path.is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }
        Ok(())
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path, or `:memory:` for an ephemeral store.
    pub db_path: String,
}

impl StorageConfig {
    pub fn location(&self) -> StoreLocation {
        match self.db_path.parse() {
            Ok(location) => location,
            Err(never) => match never {},
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Gateway(#[from] api_gateway::ConfigError),

    #[error("storage db_path cannot be empty")]
    EmptyDbPath,

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

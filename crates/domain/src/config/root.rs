use super::logging::LOG_LEVELS;
use super::{CacheConfig, ConfigError, LoggingConfig, ServerConfig, WhoisConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration, read from TOML with every section optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub whois: WhoisConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub log_level: Option<String>,
    pub cache_enabled: Option<bool>,
    pub query_timeout_ms: Option<u64>,
    pub tld_data: Option<String>,
}

impl Config {
    /// Loads `config_path` (defaults when `None`) and applies `overrides`.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(enabled) = overrides.cache_enabled {
            self.cache.enabled = enabled;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.whois.query_timeout_ms = timeout;
        }
        if let Some(path) = overrides.tld_data {
            self.whois.tld_data = Some(path);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.whois.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "whois.query_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.whois.fetch_ceiling_ms < self.whois.query_timeout_ms {
            return Err(ConfigError::Validation(format!(
                "whois.fetch_ceiling_ms ({}) must not be lower than whois.query_timeout_ms ({})",
                self.whois.fetch_ceiling_ms, self.whois.query_timeout_ms
            )));
        }
        if self.cache.enabled {
            if self.cache.ttl_secs == 0 {
                return Err(ConfigError::Validation(
                    "cache.ttl_secs must be greater than 0".to_string(),
                ));
            }
            if self.cache.max_cost_bytes == 0 {
                return Err(ConfigError::Validation(
                    "cache.max_cost_bytes must be greater than 0".to_string(),
                ));
            }
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.logging.level
            )));
        }
        Ok(())
    }
}

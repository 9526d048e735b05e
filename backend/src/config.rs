//! Service configuration.
//!
//! Settings come from an optional TOML file, then environment variables
//! override individual values.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use chrono_tz::Tz;

use crate::models::Locale;
use crate::services::synchronizer::{GeneratorSettings, DEFAULT_MAX_SPAN_DAYS};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "PERIOD_SYNC_CONFIG";
/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "period-sync.toml";

/// Configuration errors. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// IANA timezone used when a request names none
    pub default_timezone: String,
    /// Locale tag used when a request names none
    pub default_locale: String,
    /// Longest accepted range, in days
    pub max_span_days: i64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            default_timezone: "UTC".to_string(),
            default_locale: Locale::English.tag().to_string(),
            max_span_days: DEFAULT_MAX_SPAN_DAYS,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file. Missing keys take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve configuration for the server.
    ///
    /// Reads the file named by `PERIOD_SYNC_CONFIG`, else `period-sync.toml`
    /// if present, else defaults; then applies environment overrides:
    ///
    /// - `HOST`, `PORT`
    /// - `PERIOD_SYNC_TIMEZONE`, `PERIOD_SYNC_LOCALE`
    /// - `PERIOD_SYNC_MAX_SPAN_DAYS`
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            Err(_) => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from environment variables that are set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::invalid("PORT", format!("'{}' is not a port number", port)))?;
        }
        if let Ok(timezone) = env::var("PERIOD_SYNC_TIMEZONE") {
            self.default_timezone = timezone;
        }
        if let Ok(locale) = env::var("PERIOD_SYNC_LOCALE") {
            self.default_locale = locale;
        }
        if let Ok(days) = env::var("PERIOD_SYNC_MAX_SPAN_DAYS") {
            self.max_span_days = days.parse().map_err(|_| {
                ConfigError::invalid("PERIOD_SYNC_MAX_SPAN_DAYS", format!("'{}' is not a number", days))
            })?;
        }
        Ok(())
    }

    /// Check every value without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator_settings()?;
        self.bind_addr()?;
        Ok(())
    }

    /// Generator fallbacks and limits.
    pub fn generator_settings(&self) -> Result<GeneratorSettings, ConfigError> {
        let default_timezone = self.default_timezone.parse::<Tz>().map_err(|_| {
            ConfigError::invalid(
                "default_timezone",
                format!("unknown timezone '{}'", self.default_timezone),
            )
        })?;
        let default_locale = self
            .default_locale
            .parse::<Locale>()
            .map_err(|e| ConfigError::invalid("default_locale", e.to_string()))?;
        if self.max_span_days < 1 {
            return Err(ConfigError::invalid("max_span_days", "must be at least 1"));
        }

        Ok(GeneratorSettings {
            default_timezone,
            default_locale,
            max_span_days: self.max_span_days,
        })
    }

    /// Socket address to listen on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::invalid("host", format!("'{}' is not an IP address", self.host)))
    }
}

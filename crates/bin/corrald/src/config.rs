//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `corral.toml` in the working directory. Every field has a
//! default, so the file is optional and an empty one reproduces the stock
//! fixture: REST on `localhost:3002`, assets from `.` on `localhost:3003`.
//! Environment variables take precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// REST fixture listener.
    pub api: ApiConfig,
    /// Static asset listener.
    pub assets: AssetsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// REST fixture listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Address to bind to (e.g. `localhost`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Static asset listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Address to bind to.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Directory whose files are served.
    pub root: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `corral.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("corral.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("CORRAL_HOST") {
            self.api.host.clone_from(&val);
            self.assets.host = val;
        }
        if let Some(port) = var("CORRAL_API_PORT").and_then(|val| val.parse().ok()) {
            self.api.port = port;
        }
        if let Some(port) = var("CORRAL_ASSETS_PORT").and_then(|val| val.parse().ok()) {
            self.assets.port = port;
        }
        if let Some(val) = var("CORRAL_ASSETS_ROOT") {
            self.assets.root = PathBuf::from(val);
        }
        if let Some(val) = var("CORRAL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.port == 0 || self.assets.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.api.host == self.assets.host && self.api.port == self.assets.port {
            return Err(ConfigError::Validation(format!(
                "api and assets cannot both listen on {}",
                self.api_addr()
            )));
        }
        Ok(())
    }

    /// Return the `host:port` address of the REST fixture.
    #[must_use]
    pub fn api_addr(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }

    /// Return the `host:port` address of the asset server.
    #[must_use]
    pub fn assets_addr(&self) -> String {
        format!("{}:{}", self.assets.host, self.assets.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3002,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3003,
            root: PathBuf::from("."),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "corrald=info,corral=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

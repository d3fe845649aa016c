//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `camdash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use camdash_domain::endpoint::ApiEndpoints;
use camdash_domain::error::ValidationError;
use camdash_domain::settings::{
    CameraSource, DEFAULT_REFRESH_INTERVAL_MS, DEFAULT_SETTLE_DELAY_MS, DashboardSettings,
};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Recorder backend settings.
    pub backend: BackendConfig,
    /// Browser dashboard settings.
    pub dashboard: DashboardConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Where the recorder backend lives and how to reach it.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Absolute backend origin. Unset means the backend shares our origin.
    pub url: Option<String>,
    /// Forward backend endpoints through this server (ignored without `url`).
    pub proxy: bool,
    /// Connect timeout, and total timeout for non-streaming proxied requests.
    pub timeout_secs: u64,
}

/// Settings forwarded to the browser dashboard, plus where its bundle lives.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub refresh_interval_ms: u64,
    pub settle_delay_ms: u64,
    pub camera_source: CameraSource,
    /// Directory holding the built dashboard (`index.html`, WASM, CSS).
    pub assets_dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `camdash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("camdash.toml")?;
        config.apply_env_overrides();
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

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CAMDASH_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("CAMDASH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("CAMDASH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("CAMDASH_BACKEND_URL") {
            self.backend.url = Some(val).filter(|url| !url.trim().is_empty());
        }
        if let Ok(val) = std::env::var("CAMDASH_PROXY") {
            if let Ok(proxy) = val.parse() {
                self.backend.proxy = proxy;
            }
        }
        if let Ok(val) = std::env::var("CAMDASH_ASSETS_DIR") {
            self.dashboard.assets_dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("CAMDASH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "backend timeout must be non-zero".to_string(),
            ));
        }
        if let Some(url) = &self.backend.url {
            if ApiEndpoints::new(url)?.is_same_origin() {
                return Err(ValidationError::InvalidBaseUrl(url.clone()).into());
            }
        }
        self.client_settings().validate()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Backend origin to proxy to, when proxying is active.
    #[must_use]
    pub fn upstream_url(&self) -> Option<&str> {
        self.backend
            .url
            .as_deref()
            .filter(|_| self.backend.proxy)
    }

    #[must_use]
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }

    /// Settings handed to the browser.
    ///
    /// When proxying, the dashboard talks to this server (same origin);
    /// otherwise it talks to the backend URL directly.
    #[must_use]
    pub fn client_settings(&self) -> DashboardSettings {
        let api_base_url = match (&self.backend.url, self.backend.proxy) {
            (Some(url), false) => url.clone(),
            _ => String::new(),
        };
        DashboardSettings {
            api_base_url,
            refresh_interval_ms: self.dashboard.refresh_interval_ms,
            settle_delay_ms: self.dashboard.settle_delay_ms,
            camera_source: self.dashboard.camera_source,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: None,
            proxy: true,
            timeout_secs: 10,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            camera_source: CameraSource::default(),
            assets_dir: PathBuf::from("dist"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "camdashd=info,camdash=info,tower_http=debug".to_string(),
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
    /// Dashboard settings rejected by the domain.
    #[error("invalid dashboard settings")]
    Settings(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

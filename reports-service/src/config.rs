//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Conventional variables: `PORT`, `DATABASE_URL`
//! 2. Environment variables (prefix: `REPORTS_`, nesting with `__`)
//! 3. Current working directory: ./config.toml
//! 4. XDG config directory: ~/.config/reports-service/config.toml
//! 5. System directory: /etc/reports-service/config.toml
//! 6. Default values
//!
//! ```toml
//! [service]
//! port = 3001
//! banner = "Community Reports API is running!"
//!
//! [store]
//! backend = "surrealdb"
//! url = "ws://localhost:8000"
//! namespace = "community"
//! database = "reports"
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

const APP_NAME: &str = "reports-service";
const ENV_PREFIX: &str = "REPORTS_";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,

    /// Report store configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    #[serde(default = "default_name")]
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Message returned by `GET /api`
    #[serde(default = "default_banner")]
    pub banner: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            port: default_port(),
            log_level: default_log_level(),
            timeout_secs: default_timeout(),
            banner: default_banner(),
        }
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// CORS configuration ("permissive" or "restrictive")
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            cors_mode: default_cors_mode(),
        }
    }
}

/// Which [`ReportStore`](crate::repository::ReportStore) the binary runs with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// SurrealDB over any supported protocol
    #[default]
    SurrealDb,
    /// Process-local store; data is lost on exit
    Memory,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurrealDb => write!(f, "surrealdb"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Report store configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store implementation
    #[serde(default)]
    pub backend: StoreBackend,

    /// Connection URL (ws://, wss://, http://, https://, mem://)
    #[serde(default = "default_store_url")]
    pub url: String,

    /// SurrealDB namespace
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// SurrealDB database
    #[serde(default = "default_database")]
    pub database: String,

    /// Root username; authentication is skipped unless both are set
    #[serde(default)]
    pub username: Option<String>,

    /// Root password
    #[serde(default)]
    pub password: Option<String>,

    /// Maximum retry attempts for establishing the connection
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retry attempts in seconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: default_store_url(),
            namespace: default_namespace(),
            database: default_database(),
            username: None,
            password: None,
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay(),
        }
    }
}

// Keeps the password out of logs
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("backend", &self.backend)
            .field("url", &crate::store::sanitize_url(&self.url))
            .field("namespace", &self.namespace)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("max_retries", &self.max_retries)
            .field("retry_delay_secs", &self.retry_delay_secs)
            .finish()
    }
}

// Default value functions
fn default_name() -> String {
    APP_NAME.to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_banner() -> String {
    "Community Reports API is running!".to_string()
}

fn default_body_limit_mb() -> usize {
    1
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

fn default_store_url() -> String {
    "mem://".to_string()
}

fn default_namespace() -> String {
    "community".to_string()
}

fn default_database() -> String {
    "reports".to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    1
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Files that do not exist are skipped. Environment variables override
    /// all file-based configs.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so later files override earlier ones
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        let config = with_env(figment).extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// This bypasses the search path and loads directly from the given file.
    /// Environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()));

        let config = with_env(figment).extract()?;
        Ok(config)
    }

    /// Config file paths in priority order (highest first)
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME);
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths.push(PathBuf::from("/etc").join(APP_NAME).join("config.toml"));
        paths
    }
}

fn with_env(figment: Figment) -> Figment {
    figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Env::raw().only(&["PORT"]).map(|_| "service.port".into()))
        .merge(Env::raw().only(&["DATABASE_URL"]).map(|_| "store.url".into()))
}

//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::research::{
    Country, ResearchClientConfig, DEFAULT_DB_PATH, DEFAULT_PAGES, DEFAULT_PAGE_SIZE,
    DEFAULT_RESEARCH_URL, DEFAULT_TABLE,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub research: ResearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Research API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchConfig {
    #[serde(default = "default_research_url")]
    pub url: String,

    #[serde(default = "default_db_path")]
    pub db_path: String,

    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_pages")]
    pub pages: u32,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub default_country: Country,
}

fn default_research_url() -> String {
    DEFAULT_RESEARCH_URL.to_string()
}

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_pages() -> u32 {
    DEFAULT_PAGES
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            url: default_research_url(),
            db_path: default_db_path(),
            table: default_table(),
            page_size: default_page_size(),
            pages: default_pages(),
            request_timeout_secs: None,
            default_country: Country::default(),
        }
    }
}

impl ResearchConfig {
    /// Settings for the HTTP client
    pub fn client_config(&self) -> ResearchClientConfig {
        ResearchClientConfig {
            url: self.url.clone(),
            db_path: self.db_path.clone(),
            table: self.table.clone(),
            page_size: self.page_size,
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether log lines should be emitted as JSON
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// Runs before logging is set up, so nothing is logged here; the
    /// returned [`LoadedConfig`] carries the chosen file and any files
    /// that failed to load for the caller to report.
    pub fn load_default() -> LoadedConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("credit-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/credit-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file of `paths` that parses, falling back
    /// to defaults with environment overrides
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut errors = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        path: Some(path.clone()),
                        errors,
                    }
                }
                Err(e) => errors.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            path: None,
            errors,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup (the environment in production)
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CREDIT_DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CREDIT_DASHBOARD_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }

        if let Some(url) = lookup("CREDIT_DASHBOARD_RESEARCH_URL") {
            self.research.url = url;
        }
        if let Some(pages) = lookup("CREDIT_DASHBOARD_PAGES").and_then(|p| p.parse().ok()) {
            self.research.pages = pages;
        }

        if let Some(level) = lookup("CREDIT_DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CREDIT_DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config came from; `None` when running on defaults
    pub path: Option<PathBuf>,
    /// Files that exist but could not be read or parsed
    pub errors: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Log where the config came from and every file that was skipped
    pub fn report(&self) {
        for e in &self.errors {
            tracing::warn!("Skipping config file: {}", e);
        }
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Credit Dashboard Configuration
#
# Environment variables override these settings:
# - CREDIT_DASHBOARD_HOST
# - CREDIT_DASHBOARD_PORT
# - CREDIT_DASHBOARD_RESEARCH_URL
# - CREDIT_DASHBOARD_PAGES
# - CREDIT_DASHBOARD_LOG_LEVEL
# - CREDIT_DASHBOARD_LOG_FORMAT

[server]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8501

[research]
# Research API process_json endpoint
url = "{url}"

# Database and table queried for country reports
db_path = "{db_path}"
table = "{table}"

# Records per page, and pages fetched per page load
page_size = {page_size}
pages = {pages}

# Request timeout in seconds (default: none, wait for the API)
# request_timeout_secs = 60

# Country shown when none is selected: Israel, Mexico, Qatar, Saudi Arabia
default_country = "Israel"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        url = DEFAULT_RESEARCH_URL,
        db_path = DEFAULT_DB_PATH,
        table = DEFAULT_TABLE,
        page_size = DEFAULT_PAGE_SIZE,
        pages = DEFAULT_PAGES,
    )
}

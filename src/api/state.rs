//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::research::{Country, ReportSource, DEFAULT_PAGES};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Where country reports come from
    pub source: Arc<dyn ReportSource>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(source: Arc<dyn ReportSource>, config: ApiConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Pages fetched per page load
    pub pages: u32,
    /// Country shown when the request names none
    pub default_country: Country,
    /// Research endpoint, reported by the health check
    pub research_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8501,
            pages: DEFAULT_PAGES,
            default_country: Country::default(),
            research_url: crate::research::DEFAULT_RESEARCH_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Server settings from the loaded configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            pages: config.research.pages,
            default_country: config.research.default_country,
            research_url: config.research.url.clone(),
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

//! # Credit Dashboard
//!
//! Sovereign credit research dashboard. Fetches a country's report from the
//! credit-research API and renders it next to six economic-indicator charts.
//!
//! ## Modules
//!
//! - [`research`]: Query payloads, the research API client and paged fetching
//! - [`dashboard`]: Report text, bar charts, data tables and page layout
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use credit_dashboard::dashboard::render_dashboard;
//! use credit_dashboard::research::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ResearchClient::new(ResearchClientConfig::default())?;
//!
//!     // Pages 1 and 2 of Israel's report
//!     let payload = client.query_for(Country::Israel);
//!     let outcome = collect_pages(&client, &payload, DEFAULT_PAGES).await;
//!
//!     let page = render_dashboard(Country::Israel, &outcome, chrono::Utc::now());
//!     println!("{}", page.html);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod research;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoadedConfig, LoggingConfig, ResearchConfig, ServerConfig};

pub use dashboard::{render_dashboard, DashboardPage, PageStatus};

pub use research::{
    collect_pages, Country, FetchOutcome, PageFailure, QueryPayload, ReportRecord, ReportSource,
    ResearchClient, ResearchClientConfig, ResearchError,
};

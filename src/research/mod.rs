//! Credit Research Source
//!
//! Fetches country reports from the credit-research API.
//!
//! ## Architecture
//!
//! - **Query**: builds the payload for a country selection
//! - **Client**: posts one page of the query to the research endpoint
//! - **Fetch**: walks pages sequentially and concatenates the records
//!
//! A page that fails is reported and skipped; the remaining pages still
//! contribute their records.

mod client;
mod country;
mod fetch;
mod query;
mod record;

pub use client::{ResearchClient, ResearchClientConfig, DEFAULT_RESEARCH_URL};
pub use country::{Country, UnknownCountry};
pub use fetch::{collect_pages, FetchOutcome, PageFailure, DEFAULT_PAGES};
pub use query::{QueryPayload, ResearchRequest, DEFAULT_DB_PATH, DEFAULT_PAGE_SIZE, DEFAULT_TABLE};
pub use record::ReportRecord;

use async_trait::async_trait;
use thiserror::Error;

/// Anything that can return one page of report records
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Database path and table the source queries
    fn database(&self) -> (&str, &str);

    /// Records requested per page
    fn page_size(&self) -> u32;

    /// Fetch a single page of the query
    async fn fetch_page(
        &self,
        payload: &QueryPayload,
        page: u32,
    ) -> ResearchResult<Vec<ReportRecord>>;

    /// First-page query for a country, addressed at this source's table
    fn query_for(&self, country: Country) -> QueryPayload {
        let (db_path, table) = self.database();
        QueryPayload::for_country(country)
            .database(db_path, table)
            .page_size(self.page_size())
    }
}

/// Errors that can occur when talking to the research API
#[derive(Error, Debug)]
pub enum ResearchError {
    #[error("Research API returned status {status} for page {page}")]
    Status { page: u32, status: u16 },

    #[error("Research API unavailable: {0}")]
    Unavailable(String),

    #[error("Request timed out for page {page}")]
    Timeout { page: u32 },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response body for page {page}: {message}")]
    Decode { page: u32, message: String },

    #[error("Failed to encode query: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type for research operations
pub type ResearchResult<T> = Result<T, ResearchError>;

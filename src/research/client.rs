//! Research API Client
//!
//! HTTP client for the credit-research `process_json` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::query::{QueryPayload, DEFAULT_DB_PATH, DEFAULT_PAGE_SIZE, DEFAULT_TABLE};
use super::record::ReportRecord;
use super::{ReportSource, ResearchError, ResearchResult};

/// Endpoint queried when none is configured
pub const DEFAULT_RESEARCH_URL: &str =
    "https://my-combined-app-vpljqiia2a-uc.a.run.app/process_json";

/// Configuration for the research client
#[derive(Debug, Clone)]
pub struct ResearchClientConfig {
    /// Full URL of the `process_json` endpoint
    pub url: String,
    /// Database file named in every query
    pub db_path: String,
    /// Table named in every query
    pub table: String,
    /// Records per page
    pub page_size: u32,
    /// Request timeout in seconds; `None` waits for the API as long as it takes
    pub request_timeout_secs: Option<u64>,
}

impl Default for ResearchClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RESEARCH_URL.to_string(),
            db_path: DEFAULT_DB_PATH.to_string(),
            table: DEFAULT_TABLE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: None,
        }
    }
}

/// Research API client
pub struct ResearchClient {
    client: Client,
    config: ResearchClientConfig,
}

impl ResearchClient {
    /// Create a new research client with the given configuration
    pub fn new(config: ResearchClientConfig) -> ResearchResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ReportSource for ResearchClient {
    fn database(&self) -> (&str, &str) {
        (&self.config.db_path, &self.config.table)
    }

    fn page_size(&self) -> u32 {
        self.config.page_size
    }

    async fn fetch_page(
        &self,
        payload: &QueryPayload,
        page: u32,
    ) -> ResearchResult<Vec<ReportRecord>> {
        let body = payload.with_page(page).to_request()?;
        tracing::debug!(page, sample_key = %body.sample_key, "Posting research query");

        let response = self
            .client
            .post(&self.config.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ResearchError::Timeout { page }
                } else if e.is_connect() {
                    ResearchError::Unavailable(e.to_string())
                } else {
                    ResearchError::Request(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResearchError::Status {
                page,
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<ReportRecord>>()
            .await
            .map_err(|e| ResearchError::Decode {
                page,
                message: e.to_string(),
            })
    }
}

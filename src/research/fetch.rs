//! Paged fetching
//!
//! Walks pages `1..=pages` one after another and concatenates the records.

use serde::Serialize;

use super::query::QueryPayload;
use super::record::ReportRecord;
use super::ReportSource;

/// Pages fetched per page load
pub const DEFAULT_PAGES: u32 = 2;

/// A page that could not be retrieved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFailure {
    pub page: u32,
    /// Message shown to the user
    pub message: String,
    /// Underlying cause, for logs and the JSON view
    pub cause: String,
}

/// Records gathered across all pages, plus the pages that failed
#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchOutcome {
    pub records: Vec<ReportRecord>,
    pub failures: Vec<PageFailure>,
}

impl FetchOutcome {
    /// Record the dashboard renders from
    pub fn first(&self) -> Option<&ReportRecord> {
        self.records.first()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Fetch `pages` pages of `payload` sequentially.
///
/// A failing page contributes no records and adds a [`PageFailure`];
/// it never stops the remaining pages from being fetched.
pub async fn collect_pages<S>(source: &S, payload: &QueryPayload, pages: u32) -> FetchOutcome
where
    S: ReportSource + ?Sized,
{
    let mut outcome = FetchOutcome::default();

    for page in 1..=pages {
        match source.fetch_page(payload, page).await {
            Ok(chunk) => {
                tracing::debug!(page, records = chunk.len(), "Fetched research page");
                outcome.records.extend(chunk);
            }
            Err(e) => {
                tracing::warn!(page, error = %e, "Failed to fetch research page");
                outcome.failures.push(PageFailure {
                    page,
                    message: format!(
                        "Failed to retrieve data from the process_json endpoint for page {}",
                        page
                    ),
                    cause: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        country = payload.country().unwrap_or("-"),
        records = outcome.records.len(),
        failed_pages = outcome.failures.len(),
        "Research fetch complete"
    );

    outcome
}

//! Research API query payloads
//!
//! The research endpoint takes a JSON object with a single `sample_key`
//! field whose value is itself a serialized query:
//!
//! ```json
//! {"sample_key": "{\"db_path\":\"credit_research.db\",\"table\":\"FullReport\",\"filters\":{\"Country\":\"Israel\"},\"fields\":\"*\",\"page\":1,\"page_size\":10}"}
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::country::Country;

/// Database file queried when none is configured
pub const DEFAULT_DB_PATH: &str = "credit_research.db";

/// Table holding the full country reports
pub const DEFAULT_TABLE: &str = "FullReport";

/// Records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Filter key the research table uses for the country column
const COUNTRY_FILTER: &str = "Country";

/// Query sent (serialized) inside every research request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPayload {
    pub db_path: String,
    pub table: String,
    pub filters: BTreeMap<String, String>,
    pub fields: String,
    pub page: u32,
    pub page_size: u32,
}

/// Outer request body posted to the research endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchRequest {
    pub sample_key: String,
}

impl QueryPayload {
    /// Query for the first page of a country's full report
    pub fn for_country(country: Country) -> Self {
        let mut filters = BTreeMap::new();
        filters.insert(COUNTRY_FILTER.to_string(), country.as_str().to_string());

        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            table: DEFAULT_TABLE.to_string(),
            filters,
            fields: "*".to_string(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Point the query at a different database and table
    pub fn database(mut self, db_path: impl Into<String>, table: impl Into<String>) -> Self {
        self.db_path = db_path.into();
        self.table = table.into();
        self
    }

    /// Set the page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Copy of this query targeting `page`
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Country this query filters on, if any
    pub fn country(&self) -> Option<&str> {
        self.filters.get(COUNTRY_FILTER).map(String::as_str)
    }

    /// Serialize the query into the string carried by `sample_key`
    pub fn to_sample_key(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Build the outer request body
    pub fn to_request(&self) -> Result<ResearchRequest, serde_json::Error> {
        Ok(ResearchRequest {
            sample_key: self.to_sample_key()?,
        })
    }
}

impl ResearchRequest {
    /// Parse the embedded query back out of the request body
    pub fn payload(&self) -> Result<QueryPayload, serde_json::Error> {
        serde_json::from_str(&self.sample_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches_every_country() {
        for country in Country::ALL {
            let request = QueryPayload::for_country(country).to_request().unwrap();
            let embedded: serde_json::Value = serde_json::from_str(&request.sample_key).unwrap();

            assert_eq!(embedded["filters"]["Country"], country.as_str());
            assert_eq!(embedded["filters"].as_object().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_defaults() {
        let payload = QueryPayload::for_country(Country::Mexico);
        assert_eq!(payload.db_path, "credit_research.db");
        assert_eq!(payload.table, "FullReport");
        assert_eq!(payload.fields, "*");
        assert_eq!(payload.page, 1);
        assert_eq!(payload.page_size, 10);
        assert_eq!(payload.country(), Some("Mexico"));
    }

    #[test]
    fn test_with_page_only_changes_page() {
        let first = QueryPayload::for_country(Country::Qatar).page_size(25);
        let second = first.with_page(2);

        assert_eq!(second.page, 2);
        assert_eq!(second.page_size, 25);
        assert_eq!(second.filters, first.filters);
        assert_eq!(first.page, 1);
    }

    #[test]
    fn test_request_round_trips_payload() {
        let payload = QueryPayload::for_country(Country::SaudiArabia)
            .database("other.db", "Summary")
            .with_page(2);
        let request = payload.to_request().unwrap();

        assert_eq!(request.payload().unwrap(), payload);
    }
}

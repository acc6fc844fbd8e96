//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::research::{Country, PageFailure, ReportRecord};

// ============================================
// DASHBOARD DTOs
// ============================================

/// Country selection query parameters (`?country=Saudi Arabia`)
#[derive(Debug, Default, Deserialize)]
pub struct CountryParams {
    /// Country display name; the configured default when absent
    #[serde(default)]
    pub country: Option<String>,
}

/// Fetched report for a country
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    /// Selected country
    pub country: Country,
    /// Status: "ok", "partial" (some pages failed) or "no_data"
    pub status: String,
    /// All records, concatenated in page order
    pub records: Vec<ReportRecord>,
    /// Pages that could not be retrieved
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<PageFailure>,
}

/// Selectable countries
#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<Country>,
    /// Country shown when none is selected
    pub default: Country,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Research endpoint the dashboard reads from
    pub research_url: String,
    /// Pages fetched per page load
    pub pages: u32,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Service version
    pub version: String,
}

//! Report Routes
//!
//! JSON views of the research data behind the dashboard.
//!
//! - GET /api/v1/report - Records and page failures for a country
//! - GET /api/v1/countries - Selectable countries

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::dashboard::{load_report, resolve_country};
use crate::api::dto::{CountriesResponse, CountryParams, ReportResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::research::Country;

/// GET /api/v1/report?country=<name>
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountryParams>,
) -> ApiResult<Json<ReportResponse>> {
    let country = resolve_country(&state, &params)?;
    let outcome = load_report(&state, country).await;

    let status = if outcome.is_empty() {
        "no_data"
    } else if outcome.failures.is_empty() {
        "ok"
    } else {
        "partial"
    };

    Ok(Json(ReportResponse {
        country,
        status: status.to_string(),
        records: outcome.records,
        failures: outcome.failures,
    }))
}

/// GET /api/v1/countries
pub async fn list_countries(State(state): State<Arc<AppState>>) -> Json<CountriesResponse> {
    Json(CountriesResponse {
        countries: Country::ALL.to_vec(),
        default: state.config.default_country,
    })
}

//! Dashboard Routes
//!
//! - GET / - The rendered dashboard page

use axum::{
    extract::{Query, State},
    response::Html,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::dto::CountryParams;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::dashboard::render_dashboard;
use crate::research::{collect_pages, Country, FetchOutcome};

/// GET /?country=<name>
///
/// Fetch the country's report pages and render the full dashboard.
pub async fn show_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CountryParams>,
) -> ApiResult<Html<String>> {
    let country = resolve_country(&state, &params)?;
    let outcome = load_report(&state, country).await;

    let page = render_dashboard(country, &outcome, Utc::now());
    tracing::info!(country = %country, status = ?page.status, "Rendered dashboard");

    Ok(Html(page.html))
}

/// Selected country, or the configured default when none is given
pub(crate) fn resolve_country(state: &AppState, params: &CountryParams) -> ApiResult<Country> {
    match params.country.as_deref() {
        None | Some("") => Ok(state.config.default_country),
        Some(name) => Ok(name.parse::<Country>()?),
    }
}

/// Fetch all configured pages for `country`
pub(crate) async fn load_report(state: &AppState, country: Country) -> FetchOutcome {
    let payload = state.source.query_for(country);
    collect_pages(state.source.as_ref(), &payload, state.config.pages).await
}

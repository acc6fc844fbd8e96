//! Dashboard Rendering
//!
//! Server-side HTML for the credit research dashboard.
//!
//! ## Layout
//!
//! - Header with the country dropdown
//! - One inline error per page that failed to load
//! - Left column (60%): the text report ([`report`])
//! - Right column (40%): a bar chart and data table per metric ([`charts`])
//!
//! If no records were fetched at all the page stops after the
//! "No data available to display" error.

pub mod charts;
pub mod html;
pub mod report;
pub mod theme;

pub use charts::{render_data_table, BarChart, Metric, MetricSeries, YEARS};
pub use report::{render_report, ReportBlock, REPORT_LAYOUT};

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::research::{Country, FetchOutcome, ReportRecord};
use html::escape;

/// Terminal message when no page returned any records
pub const NO_DATA_MESSAGE: &str = "No data available to display";

/// Heading of the chart column
pub const CHARTS_HEADING: &str = "Economic Data (2024 Onwards)";

/// Whether the page rendered the report or stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Complete,
    NoData,
}

/// A fully rendered dashboard document
#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub status: PageStatus,
    pub html: String,
}

/// Compose the dashboard for `country` from the fetched pages.
///
/// `rendered_at` is stamped into the footer; the output is otherwise a
/// pure function of the inputs.
pub fn render_dashboard(
    country: Country,
    outcome: &FetchOutcome,
    rendered_at: DateTime<Utc>,
) -> DashboardPage {
    let mut body = String::new();
    body.push_str(&render_selector(country));

    for failure in &outcome.failures {
        body.push_str(&render_error(&failure.message));
    }

    let status = match outcome.first() {
        Some(record) => {
            let _ = write!(
                body,
                "<div class=\"columns\">\n<div class=\"reportColumn\">\n{}</div>\n<div class=\"chartColumn\">\n{}</div>\n</div>\n",
                render_report(record),
                render_charts(record)
            );
            PageStatus::Complete
        }
        None => {
            body.push_str(&render_error(NO_DATA_MESSAGE));
            PageStatus::NoData
        }
    };

    DashboardPage {
        status,
        html: render_document(country, &body, rendered_at),
    }
}

/// Chart column body: heading, then a chart and table per metric
pub fn render_charts(record: &ReportRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<h2>{}</h2>", escape(CHARTS_HEADING));

    for series in MetricSeries::extract_all(record) {
        let chart = BarChart::new(&series);
        let _ = writeln!(out, "<div class=\"chart\">\n{}</div>", chart.to_svg());
        let _ = writeln!(out, "{}", render_data_table(&series));
    }

    out
}

fn render_selector(selected: Country) -> String {
    let mut out = String::from(
        "<form class=\"selector\" method=\"get\" action=\"/\">\n\
         <label for=\"country\">Select a Country:</label>\n\
         <select id=\"country\" name=\"country\" onchange=\"this.form.submit()\">\n",
    );

    for country in Country::ALL {
        let _ = writeln!(
            out,
            "<option value=\"{name}\"{selected}>{name}</option>",
            name = escape(country.as_str()),
            selected = if country == selected { " selected" } else { "" }
        );
    }

    out.push_str("</select>\n<noscript><button type=\"submit\">Show</button></noscript>\n</form>\n");
    out
}

fn render_error(message: &str) -> String {
    format!("<div class=\"error\" role=\"alert\">{}</div>\n", escape(message))
}

fn render_document(country: Country, body: &str, rendered_at: DateTime<Utc>) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{country} - Credit Research</title>\n<style>{css}</style>\n</head>\n\
         <body>\n<div class=\"stApp\">\n{body}<footer>Rendered {at}</footer>\n</div>\n</body>\n</html>\n",
        country = escape(country.as_str()),
        css = theme::STYLESHEET,
        body = body,
        at = rendered_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::research::PageFailure;
    use chrono::TimeZone;

    fn rendered_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    fn failure(page: u32) -> PageFailure {
        PageFailure {
            page,
            message: format!(
                "Failed to retrieve data from the process_json endpoint for page {}",
                page
            ),
            cause: "Research API returned status 500".to_string(),
        }
    }

    #[test]
    fn test_no_data_halts_rendering() {
        let page = render_dashboard(Country::Mexico, &FetchOutcome::default(), rendered_at());

        assert_eq!(page.status, PageStatus::NoData);
        assert!(page.html.contains(NO_DATA_MESSAGE));
        assert!(!page.html.contains("reportColumn\">"));
        assert!(!page.html.contains(CHARTS_HEADING));
        assert!(!page.html.contains("<svg"));
    }

    #[test]
    fn test_no_data_keeps_page_errors() {
        let outcome = FetchOutcome {
            records: Vec::new(),
            failures: vec![failure(1), failure(2)],
        };
        let page = render_dashboard(Country::Qatar, &outcome, rendered_at());

        assert_eq!(page.status, PageStatus::NoData);
        assert!(page.html.contains("for page 1"));
        assert!(page.html.contains("for page 2"));
        assert!(page.html.contains(NO_DATA_MESSAGE));
    }

    #[test]
    fn test_complete_page_has_both_columns() {
        let outcome = FetchOutcome {
            records: vec![
                ReportRecord::default().with("Country", "Israel"),
                ReportRecord::default().with("Country", "Ignored"),
            ],
            failures: vec![failure(2)],
        };
        let page = render_dashboard(Country::Israel, &outcome, rendered_at());

        assert_eq!(page.status, PageStatus::Complete);
        assert!(page.html.contains("<div class=\"reportColumn\">"));
        assert!(page.html.contains("<div class=\"chartColumn\">"));
        assert!(page.html.contains("Country: Israel"));
        assert!(!page.html.contains("Ignored"));
        assert!(page.html.contains("for page 2"));
        assert!(!page.html.contains(NO_DATA_MESSAGE));
        assert_eq!(page.html.matches("<svg").count(), 6);
        assert_eq!(page.html.matches("<table class='data-table'>").count(), 6);
    }

    #[test]
    fn test_selector_marks_current_country() {
        let page = render_dashboard(Country::SaudiArabia, &FetchOutcome::default(), rendered_at());

        assert!(page
            .html
            .contains("<option value=\"Saudi Arabia\" selected>Saudi Arabia</option>"));
        assert!(page.html.contains("<option value=\"Israel\">Israel</option>"));
        assert!(page.html.contains("background-color: #2f2f2f"));
    }

    #[test]
    fn test_footer_uses_given_timestamp() {
        let outcome = FetchOutcome {
            records: vec![ReportRecord::default().with("Country", "Mexico")],
            failures: Vec::new(),
        };
        let first = render_dashboard(Country::Mexico, &outcome, rendered_at());
        let second = render_dashboard(Country::Mexico, &outcome, rendered_at());

        assert!(first.html.contains("<footer>Rendered 2024-05-01 09:30:00 UTC</footer>"));
        assert_eq!(first.html, second.html);
    }
}

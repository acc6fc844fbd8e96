//! Report Renderer
//!
//! Lays out the text half of the dashboard from a single report record.
//! The layout is a static table of blocks; each block that reads a field
//! names the fallback shown when the field is absent.

use std::fmt::Write;

use super::html::escape;
use crate::research::ReportRecord;

/// One element of the report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportBlock {
    /// Page title (`<h1>`) read from a field
    Title {
        field: &'static str,
        fallback: &'static str,
    },
    /// Static section heading (`<h2>`)
    Heading(&'static str),
    /// Static sub-heading (`<h3>`)
    Subheading(&'static str),
    /// Paragraph of the form `Label: value`
    Labeled {
        label: &'static str,
        field: &'static str,
        fallback: &'static str,
    },
    /// Paragraph holding the field text
    Paragraph {
        field: &'static str,
        fallback: &'static str,
    },
}

impl ReportBlock {
    /// Field the block reads, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ReportBlock::Title { field, .. }
            | ReportBlock::Labeled { field, .. }
            | ReportBlock::Paragraph { field, .. } => Some(field),
            ReportBlock::Heading(_) | ReportBlock::Subheading(_) => None,
        }
    }

    /// Placeholder shown when the field is missing
    pub fn fallback(&self) -> Option<&'static str> {
        match self {
            ReportBlock::Title { fallback, .. }
            | ReportBlock::Labeled { fallback, .. }
            | ReportBlock::Paragraph { fallback, .. } => Some(fallback),
            ReportBlock::Heading(_) | ReportBlock::Subheading(_) => None,
        }
    }
}

const NOT_AVAILABLE: &str = "N/A";

/// The report, top to bottom
pub const REPORT_LAYOUT: &[ReportBlock] = &[
    ReportBlock::Title {
        field: "Title",
        fallback: "Credit Research Report",
    },
    ReportBlock::Heading("Country Information"),
    ReportBlock::Labeled {
        label: "Country",
        field: "Country",
        fallback: NOT_AVAILABLE,
    },
    ReportBlock::Labeled {
        label: "Ownership",
        field: "Ownership",
        fallback: NOT_AVAILABLE,
    },
    ReportBlock::Labeled {
        label: "NFA Rating",
        field: "NFARating",
        fallback: NOT_AVAILABLE,
    },
    ReportBlock::Labeled {
        label: "ESG Rating",
        field: "ESGRating",
        fallback: NOT_AVAILABLE,
    },
    ReportBlock::Heading("Overview"),
    ReportBlock::Paragraph {
        field: "Overview",
        fallback: "No overview available.",
    },
    ReportBlock::Heading("Politics"),
    ReportBlock::Paragraph {
        field: "PoliticalNews",
        fallback: "No political news available.",
    },
    ReportBlock::Heading("Strengths"),
    ReportBlock::Paragraph {
        field: "Strengths",
        fallback: "No strengths information available.",
    },
    ReportBlock::Heading("Weaknesses"),
    ReportBlock::Paragraph {
        field: "Weaknesses",
        fallback: "No weaknesses information available.",
    },
    ReportBlock::Heading("Opportunities"),
    ReportBlock::Paragraph {
        field: "Opportunities",
        fallback: "No opportunities information available.",
    },
    ReportBlock::Heading("Threats"),
    ReportBlock::Paragraph {
        field: "Threats",
        fallback: "No threats information available.",
    },
    ReportBlock::Heading("Recent News"),
    ReportBlock::Paragraph {
        field: "RecentNews",
        fallback: "No recent news available.",
    },
    ReportBlock::Heading("Ratings and Comments from Credit Rating Agencies"),
    ReportBlock::Subheading("Moody's:"),
    ReportBlock::Paragraph {
        field: "MoodysRating",
        fallback: NOT_AVAILABLE,
    },
    ReportBlock::Subheading("S&P Global Ratings:"),
    ReportBlock::Paragraph {
        field: "SPGlobalRating",
        fallback: NOT_AVAILABLE,
    },
    ReportBlock::Subheading("Fitch Ratings:"),
    ReportBlock::Paragraph {
        field: "FitchRating",
        fallback: NOT_AVAILABLE,
    },
    ReportBlock::Heading("Conclusion"),
    ReportBlock::Paragraph {
        field: "Conclusion",
        fallback: "No conclusion available.",
    },
];

/// Render the report column body for `record`
pub fn render_report(record: &ReportRecord) -> String {
    let mut out = String::new();

    for block in REPORT_LAYOUT {
        let value = |field: &str, fallback: &str| {
            escape(&record.text(field).unwrap_or_else(|| fallback.to_string()))
        };

        let _ = match *block {
            ReportBlock::Title { field, fallback } => {
                writeln!(out, r#"<h1 class="reportText">{}</h1>"#, value(field, fallback))
            }
            ReportBlock::Heading(text) => {
                writeln!(out, r#"<h2 class="reportText">{}</h2>"#, escape(text))
            }
            ReportBlock::Subheading(text) => {
                writeln!(out, r#"<h3 class="reportText">{}</h3>"#, escape(text))
            }
            ReportBlock::Labeled {
                label,
                field,
                fallback,
            } => writeln!(
                out,
                r#"<p class="reportText">{}: {}</p>"#,
                escape(label),
                value(field, fallback)
            ),
            ReportBlock::Paragraph { field, fallback } => {
                writeln!(out, r#"<p class="reportText">{}</p>"#, value(field, fallback))
            }
        };
    }

    out
}

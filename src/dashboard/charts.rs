//! Chart/Table Generator
//!
//! Turns the yearly economic fields of a report record into one bar chart
//! and one data table per metric. Values map 1:1 from record fields to bars
//! and cells; nothing is aggregated.

use std::fmt::Write;

use super::html::escape;
use super::theme::{palette_color, BACKGROUND, FOREGROUND};
use crate::research::ReportRecord;

/// Forecast years covered by every metric, in order
pub const YEARS: [u16; 6] = [2024, 2025, 2026, 2027, 2028, 2029];

/// Chart height in pixels
pub const CHART_HEIGHT: u32 = 300;

/// Chart width in pixels (the SVG scales to its column)
pub const CHART_WIDTH: u32 = 480;

const MARGIN_TOP: f64 = 44.0;
const MARGIN_BOTTOM: f64 = 32.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 12.0;
const BAR_FILL: f64 = 0.7;

/// Economic indicator charted on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    GdpGrowth,
    Inflation,
    Unemployment,
    Population,
    BudgetBalance,
    CurrentAccount,
}

impl Metric {
    /// All metrics, in display order
    pub const ALL: [Metric; 6] = [
        Metric::GdpGrowth,
        Metric::Inflation,
        Metric::Unemployment,
        Metric::Population,
        Metric::BudgetBalance,
        Metric::CurrentAccount,
    ];

    /// Chart title and table row label
    pub fn title(&self) -> &'static str {
        match self {
            Metric::GdpGrowth => "GDP Growth (%)",
            Metric::Inflation => "Inflation Rate (%)",
            Metric::Unemployment => "Unemployment Rate (%)",
            Metric::Population => "Population (millions)",
            Metric::BudgetBalance => "Government Budget Balance (% of GDP)",
            Metric::CurrentAccount => "Current Account Balance (% of GDP)",
        }
    }

    /// Record field prefix; year `n` (1-based) lives in `<prefix>Year<n>`
    pub fn field_prefix(&self) -> &'static str {
        match self {
            Metric::GdpGrowth => "GDPGrowthRate",
            Metric::Inflation => "Inflation",
            Metric::Unemployment => "UnemploymentRate",
            Metric::Population => "Population",
            Metric::BudgetBalance => "GovernmentFinances",
            Metric::CurrentAccount => "CurrentAccountBalance",
        }
    }

    /// Record field holding the value for year index `index` (0-based)
    pub fn field_name(&self, index: usize) -> String {
        format!("{}Year{}", self.field_prefix(), index + 1)
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        Metric::ALL.iter().position(|m| m == self).unwrap_or(0)
    }
}

/// Six yearly values of one metric
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub metric: Metric,
    pub values: [f64; 6],
}

impl MetricSeries {
    /// Read the series from a record. Missing or non-numeric years are 0.
    pub fn extract(record: &ReportRecord, metric: Metric) -> Self {
        let mut values = [0.0; 6];
        for (index, value) in values.iter_mut().enumerate() {
            *value = record
                .number(&metric.field_name(index))
                .filter(|v| v.is_finite())
                .unwrap_or(0.0);
        }
        Self { metric, values }
    }

    /// Every metric's series, in display order
    pub fn extract_all(record: &ReportRecord) -> Vec<Self> {
        Metric::ALL
            .iter()
            .map(|metric| Self::extract(record, *metric))
            .collect()
    }

    /// `(year, value)` pairs in year order
    pub fn points(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        YEARS.iter().copied().zip(self.values.iter().copied())
    }
}

/// Bar chart of one metric series
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub color: &'static str,
    pub height: u32,
    x: Vec<u16>,
    y: Vec<f64>,
}

impl BarChart {
    pub fn new(series: &MetricSeries) -> Self {
        Self {
            title: series.metric.title().to_string(),
            color: palette_color(series.metric.index()),
            height: CHART_HEIGHT,
            x: YEARS.to_vec(),
            y: series.values.to_vec(),
        }
    }

    pub fn x_values(&self) -> &[u16] {
        &self.x
    }

    pub fn y_values(&self) -> &[f64] {
        &self.y
    }

    /// Render as a standalone SVG element on the dark background
    pub fn to_svg(&self) -> String {
        let width = CHART_WIDTH as f64;
        let height = self.height as f64;
        let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

        // The axis always includes zero so bars grow from a common baseline.
        let low = self.y.iter().copied().fold(0.0_f64, f64::min);
        let mut high = self.y.iter().copied().fold(0.0_f64, f64::max);
        if high - low <= f64::EPSILON {
            high = low + 1.0;
        }
        let scale = plot_height / (high - low);
        let to_y = |v: f64| MARGIN_TOP + (high - v) * scale;
        let baseline = to_y(0.0);
        let slot = plot_width / self.x.len().max(1) as f64;
        let bar_width = slot * BAR_FILL;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}' role='img' aria-label='{title}'>",
            w = CHART_WIDTH,
            h = self.height,
            title = escape(&self.title)
        );
        let _ = writeln!(
            svg,
            "  <rect width='{}' height='{}' fill='{}'/>",
            CHART_WIDTH, self.height, BACKGROUND
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.0}' y='26' fill='{}' font-family='sans-serif' font-size='16'>{}</text>",
            MARGIN_LEFT,
            FOREGROUND,
            escape(&self.title)
        );

        for value in [high, low] {
            let _ = writeln!(
                svg,
                "  <text x='{:.1}' y='{:.1}' fill='{}' font-family='sans-serif' font-size='11' text-anchor='end'>{:.2}</text>",
                MARGIN_LEFT - 6.0,
                to_y(value) + 4.0,
                FOREGROUND,
                value
            );
        }
        let _ = writeln!(
            svg,
            "  <line x1='{:.1}' y1='{:.1}' x2='{:.1}' y2='{:.1}' stroke='{}' stroke-opacity='0.4'/>",
            MARGIN_LEFT,
            baseline,
            width - MARGIN_RIGHT,
            baseline,
            FOREGROUND
        );

        for (index, (year, value)) in self.x.iter().zip(self.y.iter()).enumerate() {
            let x = MARGIN_LEFT + index as f64 * slot + (slot - bar_width) / 2.0;
            let top = to_y(*value).min(baseline);
            let bar_height = (to_y(*value) - baseline).abs();
            let _ = writeln!(
                svg,
                "  <rect x='{:.1}' y='{:.1}' width='{:.1}' height='{:.1}' fill='{}' stroke-width='0'><title>{}: {:.2}</title></rect>",
                x, top, bar_width, bar_height, self.color, year, value
            );
            let _ = writeln!(
                svg,
                "  <text x='{:.1}' y='{:.1}' fill='{}' font-family='sans-serif' font-size='11' text-anchor='middle'>{}</text>",
                x + bar_width / 2.0,
                height - MARGIN_BOTTOM + 18.0,
                FOREGROUND,
                year
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Render the series as a one-row table with two-decimal cells
pub fn render_data_table(series: &MetricSeries) -> String {
    let mut table = String::from("<table class='data-table'>");

    table.push_str("<tr><th>Year</th>");
    for year in YEARS {
        let _ = write!(table, "<th>{}</th>", year);
    }
    table.push_str("</tr>");

    let _ = write!(table, "<tr><td>{}</td>", escape(series.metric.title()));
    for value in series.values {
        let _ = write!(table, "<td>{:.2}</td>", value);
    }
    table.push_str("</tr></table>");

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn israel_record() -> ReportRecord {
        let growth = [2.0, 3.1, 3.4, 3.2, 3.0, 2.9];
        growth
            .iter()
            .enumerate()
            .fold(
                ReportRecord::default()
                    .with("Country", "Israel")
                    .with("NFARating", "BB+"),
                |record, (i, v)| record.with(format!("GDPGrowthRateYear{}", i + 1), *v),
            )
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Metric::GdpGrowth.field_name(0), "GDPGrowthRateYear1");
        assert_eq!(Metric::CurrentAccount.field_name(5), "CurrentAccountBalanceYear6");
        assert_eq!(Metric::Inflation.field_name(2), "InflationYear3");
    }

    #[test]
    fn test_chart_y_values_follow_year_order() {
        let series = MetricSeries::extract(&israel_record(), Metric::GdpGrowth);
        let chart = BarChart::new(&series);

        assert_eq!(chart.x_values(), &[2024, 2025, 2026, 2027, 2028, 2029]);
        assert_eq!(chart.y_values(), &[2.0, 3.1, 3.4, 3.2, 3.0, 2.9]);
        assert_eq!(chart.title, "GDP Growth (%)");
        assert_eq!(chart.height, 300);
    }

    #[test]
    fn test_missing_years_default_to_zero() {
        let record = ReportRecord::default()
            .with("InflationYear1", 4.5)
            .with("InflationYear3", "3.25")
            .with("InflationYear4", "unknown")
            .with("InflationYear6", serde_json::Value::Null);

        let series = MetricSeries::extract(&record, Metric::Inflation);

        assert_eq!(series.values, [4.5, 0.0, 3.25, 0.0, 0.0, 0.0]);
        assert_eq!(series.points().count(), 6);
    }

    #[test]
    fn test_extract_all_keeps_display_order() {
        let all = MetricSeries::extract_all(&ReportRecord::default());

        assert_eq!(all.len(), 6);
        for (series, metric) in all.iter().zip(Metric::ALL) {
            assert_eq!(series.metric, metric);
            assert_eq!(series.values, [0.0; 6]);
        }
    }

    #[test]
    fn test_colors_follow_palette() {
        let colors: Vec<_> = MetricSeries::extract_all(&ReportRecord::default())
            .iter()
            .map(|s| BarChart::new(s).color)
            .collect();

        assert_eq!(
            colors,
            vec!["#FFA500", "#007FFF", "#DC143C", "#32CD32", "#FFD700", "#4B0082"]
        );
    }

    #[test]
    fn test_data_table() {
        let series = MetricSeries::extract(&israel_record(), Metric::GdpGrowth);
        let table = render_data_table(&series);

        assert_eq!(
            table,
            "<table class='data-table'>\
             <tr><th>Year</th><th>2024</th><th>2025</th><th>2026</th><th>2027</th><th>2028</th><th>2029</th></tr>\
             <tr><td>GDP Growth (%)</td><td>2.00</td><td>3.10</td><td>3.40</td><td>3.20</td><td>3.00</td><td>2.90</td></tr>\
             </table>"
        );
    }

    #[test]
    fn test_svg_draws_one_bar_per_year() {
        let series = MetricSeries::extract(&israel_record(), Metric::GdpGrowth);
        let svg = BarChart::new(&series).to_svg();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("fill='#2f2f2f'"));
        assert_eq!(svg.matches("fill='#FFA500'").count(), 6);
        assert!(svg.contains("<title>2026: 3.40</title>"));
    }

    #[test]
    fn test_svg_negative_values_hang_below_baseline() {
        let record = ReportRecord::default()
            .with("GovernmentFinancesYear1", -4.0)
            .with("GovernmentFinancesYear2", 2.0);
        let series = MetricSeries::extract(&record, Metric::BudgetBalance);
        let svg = BarChart::new(&series).to_svg();

        assert!(svg.contains("<title>2024: -4.00</title>"));
        assert!(svg.contains(">-4.00</text>"));
        assert!(svg.contains(">2.00</text>"));
    }

    #[test]
    fn test_svg_all_zero_series() {
        let series = MetricSeries::extract(&ReportRecord::default(), Metric::Population);
        let svg = BarChart::new(&series).to_svg();

        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }
}

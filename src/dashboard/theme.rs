//! Dark theme
//!
//! Page stylesheet and the chart colors.

/// Page and chart background
pub const BACKGROUND: &str = "#2f2f2f";

/// Text color on the dark background
pub const FOREGROUND: &str = "#ffffff";

/// Bar colors, assigned to metrics in display order
pub const PALETTE: [&str; 6] = [
    "#FFA500", // Orange
    "#007FFF", // Azure
    "#DC143C", // Crimson
    "#32CD32", // Lime green
    "#FFD700", // Gold
    "#4B0082", // Indigo
];

/// Color for the metric at `index`, wrapping around the palette
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub const STYLESHEET: &str = r#"
body {
    margin: 0;
    background-color: #2f2f2f;
    color: #ffffff;
    font-family: "Source Sans Pro", system-ui, -apple-system, sans-serif;
}
.stApp {
    background-color: #2f2f2f;
    color: #ffffff;
    max-width: 2000px;
    margin: auto;
    padding-left: 2rem;
    padding-right: 2rem;
}
.selector {
    padding: 1rem 0;
}
.selector select {
    background-color: #1f1f1f;
    color: #ffffff;
    border: 1px solid #555;
    padding: 4px 8px;
}
.columns {
    display: flex;
    gap: 2rem;
    align-items: flex-start;
}
.reportColumn {
    width: 60% !important;
}
.chartColumn {
    width: 40% !important;
}
.chart svg {
    width: 100%;
    height: auto;
}
.data-table {
    width: 100%;
    border-collapse: collapse;
    font-size: 12px;
    margin-top: 10px;
    margin-bottom: 30px;
}
.data-table th, .data-table td {
    border: 1px solid #ddd;
    padding: 4px;
    text-align: center;
}
.data-table th {
    background-color: #1f1f1f;
    color: white;
}
.data-table td {
    color: black;
    background-color: white;
}
.reportText {
    word-wrap: break-word;
    white-space: normal;
}
.error {
    background-color: rgba(255, 43, 43, 0.09);
    color: #ff6c6c;
    border-radius: 0.5rem;
    padding: 0.75rem 1rem;
    margin: 0.5rem 0;
}
footer {
    color: #9a9a9a;
    font-size: 11px;
    padding: 1rem 0;
}
"#;

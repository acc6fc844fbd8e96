//! Markup helpers shared by the page, report and chart renderers.

/// Escape text for use in HTML/SVG element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("S&P <b>'x'</b>"), "S&amp;P &lt;b&gt;&#39;x&#39;&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }
}

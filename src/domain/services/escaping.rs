//! HTML escaping for rendered fragments
//!
//! Record fields are untrusted text; every value written into markup goes
//! through [`escape_html`], both in element content and in quoted attributes.

/// Escape a string for HTML text or a double-quoted attribute value.
///
/// Escapes: ampersand, angle brackets, double and single quotes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// src/core/html.rs
use std::fmt::Display;

/// Escape the five HTML-significant characters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value if there is one. Absent stays absent.
pub fn esc<T: Display>(value: Option<T>) -> Option<String> {
    value.map(|v| escape(&v.to_string()))
}

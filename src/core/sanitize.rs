// src/core/sanitize.rs

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Comparison key for labels: trimmed and lowercased.
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A usable animal name: non-empty after trimming, letters and spaces only.
/// Returns the whitespace-normalized name.
pub fn animal_name(s: &str) -> Option<String> {
    let name = normalize_ws(s);
    if name.is_empty() { return None; }
    if name.chars().all(|ch| ch.is_alphabetic() || ch == ' ') {
        Some(name)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_ignores_case_and_padding() {
        assert_eq!(fold("  Scales "), "scales");
        assert_eq!(fold("FUR"), fold("fur"));
    }

    #[test]
    fn animal_name_rules() {
        assert_eq!(animal_name("  Red   fox "), Some(s!("Red fox")));
        assert_eq!(animal_name("Émeu"), Some(s!("Émeu")));
        assert_eq!(animal_name(""), None);
        assert_eq!(animal_name("   "), None);
        assert_eq!(animal_name("fox1"), None);
        assert_eq!(animal_name("fox-hound"), None);
    }
}

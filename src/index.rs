// src/index.rs
//! Grouping records by one characteristic for the filter menu.
//!
//! Values are compared trimmed and case-insensitively; the first spelling seen
//! is the one displayed. Records without a value land in the `Unknown` bucket,
//! so named buckets and `Unknown` together cover every record exactly once.
use std::collections::HashSet;
use std::fmt;

use crate::config::consts::UNKNOWN_LABEL;
use crate::core::sanitize::fold;
use crate::record::AnimalRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    Named(String),
    Unknown,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Named(v) => f.write_str(v),
            Label::Unknown => f.write_str(UNKNOWN_LABEL),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AttributeIndex {
    key: String,
    labels: Vec<String>,
    unknown: Vec<usize>,
}

impl AttributeIndex {
    /// One pass over `animals`.
    pub fn build(animals: &[AnimalRecord], key: &str) -> Self {
        let mut seen = HashSet::new();
        let mut labels = Vec::new();
        let mut unknown = Vec::new();

        for (i, animal) in animals.iter().enumerate() {
            match animal.group_value(key) {
                Some(value) => {
                    if seen.insert(fold(&value)) {
                        labels.push(value);
                    }
                }
                None => unknown.push(i),
            }
        }

        log::debug!(
            "indexed {} records by '{key}': {} values, {} without a value",
            animals.len(), labels.len(), unknown.len()
        );
        Self { key: s!(key), labels, unknown }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Distinct values in first-seen order and casing.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn has_unknown(&self) -> bool {
        !self.unknown.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.unknown.is_empty()
    }

    /// Everything a user may pick, `Unknown` last and only when it has members.
    pub fn choices(&self) -> Vec<Label> {
        let mut out: Vec<Label> = self.labels.iter().cloned().map(Label::Named).collect();
        if self.has_unknown() {
            out.push(Label::Unknown);
        }
        out
    }

    /// Map user input to a listed label, ignoring case and padding.
    pub fn resolve(&self, input: &str) -> Option<Label> {
        let wanted = fold(input);
        if wanted.is_empty() { return None; }
        if let Some(hit) = self.labels.iter().find(|l| fold(l) == wanted) {
            return Some(Label::Named(hit.clone()));
        }
        if self.has_unknown() && wanted == fold(UNKNOWN_LABEL) {
            return Some(Label::Unknown);
        }
        None
    }

    /// Records in `animals` matching `label`, in source order. `animals` must
    /// be the slice this index was built from.
    pub fn select<'a>(&self, animals: &'a [AnimalRecord], label: &Label) -> Vec<&'a AnimalRecord> {
        match label {
            Label::Named(value) => filter_by_value(animals, &self.key, value),
            Label::Unknown => self.unknown.iter().filter_map(|&i| animals.get(i)).collect(),
        }
    }
}

/// Records whose trimmed `key` value equals `value`, ignoring case.
pub fn filter_by_value<'a>(animals: &'a [AnimalRecord], key: &str, value: &str) -> Vec<&'a AnimalRecord> {
    let wanted = fold(value);
    animals
        .iter()
        .filter(|a| a.group_value(key).is_some_and(|v| fold(&v) == wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skin(name: &str, skin: &str) -> AnimalRecord {
        AnimalRecord::named(name).with("skin_type", skin)
    }

    #[test]
    fn resolve_is_case_insensitive_and_keeps_display_casing() {
        let data = vec![skin("Gecko", "Scales"), AnimalRecord::named("Blob")];
        let idx = AttributeIndex::build(&data, "skin_type");
        assert_eq!(idx.resolve("  sCaLeS "), Some(Label::Named(s!("Scales"))));
        assert_eq!(idx.resolve("unknown"), Some(Label::Unknown));
        assert_eq!(idx.resolve("fur"), None);
        assert_eq!(idx.resolve(""), None);
    }

    #[test]
    fn unknown_not_offered_without_members() {
        let data = vec![skin("Gecko", "Scales")];
        let idx = AttributeIndex::build(&data, "skin_type");
        assert_eq!(idx.choices(), vec![Label::Named(s!("Scales"))]);
        assert_eq!(idx.resolve("Unknown"), None);
    }

    #[test]
    fn empty_dataset() {
        let idx = AttributeIndex::build(&[], "skin_type");
        assert!(idx.is_empty());
        assert!(idx.choices().is_empty());
    }
}

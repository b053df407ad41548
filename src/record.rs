// src/record.rs
//! Animal records as they arrive from either source.
//!
//! The JSON is loosely shaped: any field may be missing or `null`, and
//! characteristic values are usually strings but not always. Everything is
//! kept optional here so the renderer can decide what to show.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnimalRecord {
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_locations")]
    pub locations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub characteristics: BTreeMap<String, Option<Scalar>>,
}

/// A leaf JSON value. `null` never reaches this type; it becomes `None` in the
/// surrounding `Option`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Other(serde_json::Value),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Other(v) => write!(f, "{v}"),
        }
    }
}

impl Scalar {
    /// Empty strings carry no information and are treated like missing values.
    pub fn is_blank(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl AnimalRecord {
    /// Name, unless missing or empty.
    pub fn name(&self) -> Option<&Scalar> {
        self.name.as_ref().filter(|n| !n.is_blank())
    }

    /// Characteristic value, unless missing, `null`, or empty.
    pub fn characteristic(&self, key: &str) -> Option<&Scalar> {
        self.characteristics
            .get(key)
            .and_then(Option::as_ref)
            .filter(|v| !v.is_blank())
    }

    /// First characteristic among `keys` that has a value.
    pub fn first_characteristic(&self, keys: &[&str]) -> Option<&Scalar> {
        keys.iter().find_map(|k| self.characteristic(k))
    }

    /// Grouping value trimmed for comparison and display; `None` when it is
    /// missing or only whitespace.
    pub fn group_value(&self, key: &str) -> Option<String> {
        let value = self.characteristic(key)?.to_string();
        let value = value.trim();
        if value.is_empty() { None } else { Some(value.to_string()) }
    }

    /// Only the first listed location is ever shown.
    pub fn first_location(&self) -> Option<&str> {
        self.locations.iter().map(String::as_str).find(|l| !l.is_empty())
    }
}

/// Builder used by tests and benches to assemble records without JSON.
impl AnimalRecord {
    pub fn named(name: &str) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.characteristics.insert(s!(key), Some(value.into()));
        self
    }

    pub fn located(mut self, location: &str) -> Self {
        self.locations.push(s!(location));
        self
    }
}

/// `locations` as the API and datasets actually send it: a list, a single
/// value, or `null`. `null` and empty entries are dropped.
fn lenient_locations<'de, D>(de: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Locations {
        Many(Vec<Option<Scalar>>),
        One(Scalar),
    }

    let entries = match Option::<Locations>::deserialize(de)? {
        None => Vec::new(),
        Some(Locations::Many(list)) => list.into_iter().flatten().collect(),
        Some(Locations::One(single)) => vec![single],
    };
    Ok(entries
        .into_iter()
        .filter(|l| !l.is_blank())
        .map(|l| l.to_string())
        .collect())
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

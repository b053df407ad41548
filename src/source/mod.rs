// src/source/mod.rs
//! Where records come from.
//!
//! Both sources answer the same question, "which animals are there?", and the
//! runner does not care which one it talks to. They differ in how failure
//! looks: a broken local file is a broken install and comes back as `Err`,
//! while a remote hiccup is an expected outcome and comes back as
//! `Fetched::NoData`.
use crate::error::Result;
use crate::record::AnimalRecord;

pub mod local;
pub mod remote;

pub use local::JsonFileSource;
pub use remote::ApiSource;

/// Outcome of asking a source for records.
#[derive(Clone, Debug, PartialEq)]
pub enum Fetched {
    /// The source answered. May be empty: "no such animal".
    Records(Vec<AnimalRecord>),
    /// The source could not answer: network, status, or body problems.
    NoData,
}

impl Fetched {
    pub fn into_records(self) -> Option<Vec<AnimalRecord>> {
        match self {
            Fetched::Records(r) => Some(r),
            Fetched::NoData => None,
        }
    }
}

pub trait AnimalSource {
    /// Short human-readable origin, for logs.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<Fetched>;
}

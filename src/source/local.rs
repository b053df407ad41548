// src/source/local.rs
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::file::read_text;
use crate::record::AnimalRecord;
use super::{AnimalSource, Fetched};

/// JSON array of records on disk. Loaded once at startup; any problem with
/// the file is fatal.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<AnimalRecord>> {
        let text = read_text(&self.path)?;
        let records: Vec<AnimalRecord> = serde_json::from_str(&text)
            .map_err(|source| Error::Json { path: self.path.clone(), source })?;
        log::info!("loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

impl AnimalSource for JsonFileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn fetch(&self) -> Result<Fetched> {
        self.load().map(Fetched::Records)
    }
}

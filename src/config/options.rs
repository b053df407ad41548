// src/config/options.rs
use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

/// Everything a run needs, built once and passed down. Nothing reads the
/// environment after `SourceOptions::load_api_key` returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source_kind: SourceKind,
    pub source: SourceOptions,
    pub page: PageOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source_kind: SourceKind::Local,
            source: SourceOptions::default(),
            page: PageOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Filter the local JSON dataset by an attribute.
    Local,
    /// Query the remote API by animal name.
    Remote,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub data_path: PathBuf,
    pub api_url: String,
    api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            api_url: s!(API_URL),
            api_key: None,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SourceOptions {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// `API_KEY` from the process environment, else from the nearest `.env`
    /// (working directory or a parent). The process environment is not
    /// modified.
    pub fn load_api_key(&mut self) {
        let key = env::var(API_KEY_ENV).ok().or_else(|| {
            let iter = dotenvy::dotenv_iter().ok()?;
            let key = dotenv_value(iter, API_KEY_ENV);
            if key.is_some() {
                log::debug!("read {API_KEY_ENV} from .env");
            }
            key
        });
        self.set_api_key(key);
    }

    /// Like `load_api_key`, but only the given dotenv file is consulted.
    pub fn load_api_key_from(&mut self, dotenv: &Path) {
        let key = dotenvy::from_path_iter(dotenv)
            .ok()
            .and_then(|iter| dotenv_value(iter, API_KEY_ENV));
        if key.is_some() {
            log::debug!("read {} from {}", API_KEY_ENV, dotenv.display());
        }
        self.set_api_key(key);
    }

    /// Blank keys count as missing.
    pub fn set_api_key(&mut self, key: Option<String>) {
        self.api_key = key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub template_path: PathBuf,
    pub out_path: PathBuf,
    /// Characteristic used to build the filter menu.
    pub group_key: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(TEMPLATE_FILE),
            out_path: PathBuf::from(OUTPUT_FILE),
            group_key: s!(GROUP_KEY),
        }
    }
}

fn dotenv_value<R: Read>(iter: dotenvy::Iter<R>, key: &str) -> Option<String> {
    iter.filter_map(|item| match item {
        Ok(pair) => Some(pair),
        Err(e) => {
            log::warn!("skipping unreadable .env line: {e}");
            None
        }
    })
    .find(|(k, _)| k == key)
    .map(|(_, v)| v)
}

impl PageOptions {
    /// Caption for the subheading, e.g. `skin_type` → "Skin type".
    pub fn group_caption(&self) -> String {
        let words = self.group_key.replace('_', " ");
        let mut chars = words.trim().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => s!(),
        }
    }
}

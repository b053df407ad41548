// src/source/remote.rs
use reqwest::blocking::Client;

use crate::config::consts::API_KEY_HEADER;
use crate::config::options::SourceOptions;
use crate::error::{Error, Result};
use crate::record::AnimalRecord;
use super::{AnimalSource, Fetched};

/// One GET against the animals API for a single name.
pub struct ApiSource {
    client: Client,
    url: String,
    api_key: Option<String>,
    name: String,
}

impl ApiSource {
    pub fn new(opts: &SourceOptions, name: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .build()
            .map_err(Error::HttpClient)?;
        if opts.api_key().is_none() {
            log::warn!("no API key configured; the request will likely be rejected");
        }
        Ok(Self {
            client,
            url: opts.api_url.clone(),
            api_key: opts.api_key().map(str::to_string),
            name: s!(name),
        })
    }

    /// Every failure past client construction collapses into `None`.
    fn request(&self) -> Option<Vec<AnimalRecord>> {
        let mut req = self.client.get(&self.url).query(&[("name", self.name.as_str())]);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let res = match req.send() {
            Ok(res) => res,
            Err(e) => {
                log::warn!("request for '{}' failed: {e}", self.name);
                return None;
            }
        };
        let status = res.status();
        if !status.is_success() {
            log::warn!("request for '{}' returned {status}", self.name);
            return None;
        }
        match res.json::<Vec<AnimalRecord>>() {
            Ok(records) => Some(records),
            Err(e) => {
                log::warn!("response for '{}' was not a list of animals: {e}", self.name);
                None
            }
        }
    }
}

impl AnimalSource for ApiSource {
    fn describe(&self) -> String {
        format!("{}?name={}", self.url, self.name)
    }

    fn fetch(&self) -> Result<Fetched> {
        let fetched = match self.request() {
            Some(records) => {
                log::info!("API returned {} records for '{}'", records.len(), self.name);
                Fetched::Records(records)
            }
            None => Fetched::NoData,
        };
        Ok(fetched)
    }
}

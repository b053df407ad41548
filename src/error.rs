// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that end a run. Bad user input at a prompt and remote fetch
/// failures never surface here; they are handled where they happen.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("{0}")]
    InvalidArgs(String),

    #[error("'{0}' is not one of the listed values")]
    InvalidChoice(String),

    #[error("'{0}' is not a valid animal name (letters and spaces only)")]
    InvalidName(String),

    #[error("console input failed: {0}")]
    Prompt(#[source] io::Error),
}

impl Error {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io { action, path: path.into(), source }
    }
}

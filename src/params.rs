// src/params.rs
use crate::config::options::AppOptions;

/// Parsed command line: options for the run plus frontend-only switches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    pub opts: AppOptions,
    pub answer: Option<String>,  // --skin / --name value; None → ask on the console
    pub verbose: bool,           // info-level logging
    pub help: bool,              // print usage then exit
}

impl Params {
    pub fn new(opts: AppOptions) -> Self {
        Self { opts, answer: None, verbose: false, help: false }
    }
}

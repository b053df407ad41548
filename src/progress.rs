// src/progress.rs
use std::io::{self, Write};

/// Status lines meant for the person running the tool (not the log).
/// Frontends decide where they go; the CLI prints them to stdout.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end of a run, successful or not.
    fn finish(&mut self) {}
}

/// Prints each line to stdout.
pub struct StdoutProgress;
impl Progress for StdoutProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn finish(&mut self) {
        let _ = io::stdout().flush();
    }
}

/// Keeps every line; handy for tests and for callers that want a transcript.
#[derive(Default)]
pub struct Transcript {
    pub lines: Vec<String>,
    pub finished: bool,
}

impl Progress for Transcript {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod index;
pub mod logging;
pub mod page;
pub mod params;
pub mod progress;
pub mod prompt;
pub mod record;
pub mod render;
pub mod runner;
pub mod source;

pub use error::{Error, Result};

//! AI-Radio CLI - headless driver for the playback engine
pub mod bridge;
pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};

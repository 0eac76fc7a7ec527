//! CLI layer for vocab-rs.
//!
//! Provides the command-line interface using clap, with commands
//! for initializing the store, ingesting articles and querying words.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};

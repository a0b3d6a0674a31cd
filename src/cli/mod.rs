//! CLI layer for confstash.
//!
//! Maps a verb to its handler, parses each verb's flags with clap, and runs
//! the handler against a config store.

pub mod commands;
pub mod output;
pub mod parser;
pub mod registry;

pub use output::OutputFormat;
pub use registry::{COMMANDS, CommandSpec, dispatch, usage};

//! # confstash
//!
//! Store named configuration-file snapshots in a local `SQLite` database and
//! restore them by name.
//!
//! Each snapshot records a user-chosen name, the program it belongs to, the
//! original file's base name and its bytes. Bytes are kept as base64 text so
//! any file content survives the round trip unchanged.
//!
//! ## Commands
//!
//! - `add-config -f <PATH> -n <NAME> -p <PROGRAM>` stores a file
//! - `get-config -n <NAME> [-d <DIR>]` prints a stored file or writes it
//!   into a directory under its original name
//! - `list` prints every stored name

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;
pub mod storage;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use app::App;
pub use config::Settings;
pub use crate::core::ConfigRecord;
pub use storage::{ConfigStore, SqliteStore};

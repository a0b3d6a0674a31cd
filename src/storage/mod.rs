//! Storage layer for confstash.
//!
//! Provides persistent storage for config records using `SQLite`.

pub mod schema;
pub mod sqlite;
pub mod traits;

pub use schema::{CURRENT_SCHEMA_VERSION, SCHEMA_SQL, ensure_schema};
pub use sqlite::SqliteStore;
pub use traits::ConfigStore;

/// Default database file name inside the config directory.
pub const DEFAULT_DB_NAME: &str = "confstash.db";

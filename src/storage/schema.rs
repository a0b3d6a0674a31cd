//! Database schema definitions.
//!
//! Contains the DDL for the config table and the idempotent setup step run
//! on every startup.

use crate::error::{Result, StorageError};
use rusqlite::{Connection, OptionalExtension, params};

/// Current schema version.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Name of the config table.
pub const CONFIG_TABLE: &str = "config_defaults";

/// SQL schema for database setup. Every statement is `IF NOT EXISTS`.
pub const SCHEMA_SQL: &str = r"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_info (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

-- Config snapshots; content is base64 text
CREATE TABLE IF NOT EXISTS config_defaults (
    name TEXT NOT NULL,
    file_name TEXT NOT NULL,
    program TEXT NOT NULL,
    content TEXT NOT NULL
);

-- Names are lookup keys; duplicates are rejected
CREATE UNIQUE INDEX IF NOT EXISTS idx_config_defaults_name ON config_defaults(name);
";

/// SQL to check if a table exists; bind the table name.
pub const CHECK_SCHEMA_SQL: &str = r"
SELECT COUNT(*) FROM sqlite_master
WHERE type='table' AND name=?;
";

/// SQL to get schema version.
pub const GET_VERSION_SQL: &str = r"
SELECT value FROM schema_info WHERE key = 'version';
";

/// SQL to set schema version.
pub const SET_VERSION_SQL: &str = r"
INSERT OR REPLACE INTO schema_info (key, value) VALUES ('version', ?);
";

/// Creates the config table and its index if absent, then stamps the version.
///
/// Safe to call any number of times on the same database.
///
/// # Errors
///
/// Returns [`StorageError::Schema`] if any statement cannot be applied.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| StorageError::Schema(e.to_string()))?;
    conn.execute(SET_VERSION_SQL, params![CURRENT_SCHEMA_VERSION.to_string()])
        .map_err(|e| StorageError::Schema(e.to_string()))?;
    tracing::debug!(version = CURRENT_SCHEMA_VERSION, "schema ensured");
    Ok(())
}

/// Returns true if the config table exists.
///
/// # Errors
///
/// Returns an error if `sqlite_master` cannot be queried.
pub fn is_initialized(conn: &Connection) -> Result<bool> {
    let count: i64 = conn
        .query_row(CHECK_SCHEMA_SQL, params![CONFIG_TABLE], |row| row.get(0))
        .map_err(StorageError::from)?;
    Ok(count > 0)
}

/// Reads the stamped schema version, if any.
///
/// # Errors
///
/// Returns an error if the version table exists but cannot be read.
pub fn schema_version(conn: &Connection) -> Result<Option<u32>> {
    let version: Option<String> = conn
        .query_row(GET_VERSION_SQL, [], |row| row.get(0))
        .optional()
        .map_err(StorageError::from)?;

    Ok(version.and_then(|v| v.parse().ok()))
}

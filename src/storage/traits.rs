//! Storage trait definition.
//!
//! Defines the interface the command handlers use, so they can run against
//! any backend that holds config records.

use crate::core::ConfigRecord;
use crate::error::Result;

/// Trait for persistent config stores.
///
/// Records are written once and only ever read afterwards; nothing in this
/// interface updates or deletes.
pub trait ConfigStore {
    /// Creates the schema if absent.
    ///
    /// Should be idempotent - safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the schema cannot be applied.
    fn ensure_schema(&mut self) -> Result<()>;

    /// Checks if the schema exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the check cannot be performed.
    fn is_initialized(&self) -> Result<bool>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if a required field is empty, a
    /// duplicate-name error if the name is taken, and a database error if
    /// the write fails.
    fn insert(&mut self, record: &ConfigRecord) -> Result<()>;

    /// Retrieves a record by name with its content decoded.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no record has this name, and a codec
    /// error if the stored content is corrupt.
    fn get_by_name(&self, name: &str) -> Result<ConfigRecord>;

    /// Lists stored names in insertion order.
    ///
    /// An empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn list_names(&self) -> Result<Vec<String>>;

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails.
    fn count(&self) -> Result<usize>;
}

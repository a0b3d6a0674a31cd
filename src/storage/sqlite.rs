//! `SQLite` storage implementation.
//!
//! Content bytes pass through the codec on the way in and out, so the
//! `content` column only ever holds base64 text.

// SQLite stores all integers as i64. Counts are never negative.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::core::{ConfigRecord, codec};
use crate::error::{CommandError, Result, StorageError};
use crate::storage::schema;
use crate::storage::traits::ConfigStore;
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};
use std::path::{Path, PathBuf};

/// SQLite-backed config store.
///
/// Owns the single connection used for the lifetime of a command. The
/// connection is released when the store is closed or dropped.
///
/// # Examples
///
/// ```no_run
/// use confstash::storage::{ConfigStore, SqliteStore};
///
/// let mut store = SqliteStore::open("confstash.db").unwrap();
/// store.ensure_schema().unwrap();
/// ```
pub struct SqliteStore {
    /// `SQLite` connection.
    conn: Connection,
    /// Path to the database file (None for in-memory).
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Opens or creates a `SQLite` database at the given path.
    ///
    /// Creates the parent directory if it does not exist. The schema is not
    /// touched; call [`ConfigStore::ensure_schema`] before other operations.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Database(e.to_string()))?;
        }

        let conn = Connection::open(&path).map_err(StorageError::from)?;
        tracing::debug!(path = %path.display(), "opened database");

        Ok(Self {
            conn,
            path: Some(path),
        })
    }

    /// Creates an in-memory `SQLite` database.
    ///
    /// Useful for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        Ok(Self { conn, path: None })
    }

    /// Returns the database path (None for in-memory).
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the stamped schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<Option<u32>> {
        schema::schema_version(&self.conn)
    }

    /// Closes the connection, reporting any error from `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection could not be closed
    /// cleanly. The connection is released either way.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| StorageError::from(e))?;
        tracing::debug!("closed database");
        Ok(())
    }
}

impl ConfigStore for SqliteStore {
    fn ensure_schema(&mut self) -> Result<()> {
        schema::ensure_schema(&self.conn)
    }

    fn is_initialized(&self) -> Result<bool> {
        schema::is_initialized(&self.conn)
    }

    fn insert(&mut self, record: &ConfigRecord) -> Result<()> {
        if let Some(field) = record.missing_field() {
            return Err(CommandError::InvalidArgument(format!("{field} must not be empty")).into());
        }

        let content = codec::encode(&record.content);

        self.conn
            .execute(
                r"
            INSERT INTO config_defaults (name, file_name, program, content)
            VALUES (?, ?, ?, ?)
        ",
                params![record.name, record.file_name, record.program, content],
            )
            .map_err(|e| {
                if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
                    StorageError::DuplicateName {
                        name: record.name.clone(),
                    }
                } else {
                    StorageError::from(e)
                }
            })?;

        tracing::info!(
            name = %record.name,
            program = %record.program,
            size = record.size(),
            "stored config"
        );
        Ok(())
    }

    fn get_by_name(&self, name: &str) -> Result<ConfigRecord> {
        let row = self
            .conn
            .query_row(
                r"
            SELECT name, program, file_name, content
            FROM config_defaults WHERE name = ?
            ORDER BY rowid LIMIT 1
        ",
                params![name],
                |row| {
                    Ok((
                        ConfigRecord::new(
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                            Vec::new(),
                        ),
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()
            .map_err(StorageError::from)?;

        let Some((mut record, encoded)) = row else {
            return Err(StorageError::ConfigNotFound {
                name: name.to_string(),
            }
            .into());
        };

        record.content = codec::decode(&encoded)?;
        Ok(record)
    }

    fn list_names(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM config_defaults ORDER BY rowid")
            .map_err(StorageError::from)?;

        let names = stmt
            .query_map([], |row| row.get(0))
            .map_err(StorageError::from)?
            .collect::<std::result::Result<Vec<String>, _>>()
            .map_err(StorageError::from)?;

        Ok(names)
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM config_defaults", [], |row| row.get(0))
            .map_err(StorageError::from)?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, Error};

    fn setup() -> SqliteStore {
        let mut store = SqliteStore::in_memory().unwrap();
        store.ensure_schema().unwrap();
        store
    }

    #[test]
    fn test_ensure_schema() {
        let mut store = SqliteStore::in_memory().unwrap();
        assert!(!store.is_initialized().unwrap());
        assert!(store.ensure_schema().is_ok());
        assert!(store.is_initialized().unwrap());
        assert_eq!(store.schema_version().unwrap(), Some(1));
    }

    #[test]
    fn test_ensure_schema_idempotent() {
        let mut store = setup();
        store
            .insert(&ConfigRecord::new("a", "p", "f", b"x".to_vec()))
            .unwrap();
        assert!(store.ensure_schema().is_ok());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_insert_then_get() {
        let mut store = setup();
        let bytes = vec![0x00, 0x9f, b'h', b'i', 0xff];
        store
            .insert(&ConfigRecord::new("n1", "p1", "f.txt", bytes.clone()))
            .unwrap();

        let loaded = store.get_by_name("n1").unwrap();
        assert_eq!(loaded.name, "n1");
        assert_eq!(loaded.program, "p1");
        assert_eq!(loaded.file_name, "f.txt");
        assert_eq!(loaded.content, bytes);
    }

    #[test]
    fn test_content_stored_as_base64() {
        let mut store = setup();
        store
            .insert(&ConfigRecord::new("n1", "p1", "f.txt", b"hello".to_vec()))
            .unwrap();

        let raw: String = store
            .conn
            .query_row("SELECT content FROM config_defaults", [], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, "aGVsbG8=");
    }

    #[test]
    fn test_get_missing() {
        let store = setup();
        let err = store.get_by_name("does-not-exist").unwrap_err();
        assert!(matches!(
            err,
            Error::Storage(StorageError::ConfigNotFound { ref name }) if name == "does-not-exist"
        ));
    }

    #[test]
    fn test_get_corrupt_content() {
        let store = setup();
        store
            .conn
            .execute(
                "INSERT INTO config_defaults VALUES ('bad', 'f', 'p', '%%%')",
                [],
            )
            .unwrap();

        let err = store.get_by_name("bad").unwrap_err();
        assert!(matches!(err, Error::Codec(CodecError::Decode(_))));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut store = setup();
        store
            .insert(&ConfigRecord::new("dup", "p1", "a", b"first".to_vec()))
            .unwrap();

        let err = store
            .insert(&ConfigRecord::new("dup", "p2", "b", b"second".to_vec()))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Storage(StorageError::DuplicateName { .. })
        ));

        let loaded = store.get_by_name("dup").unwrap();
        assert_eq!(loaded.content, b"first");
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_insert_rejects_empty_fields() {
        let mut store = setup();
        let err = store
            .insert(&ConfigRecord::new("", "p", "f", Vec::new()))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Command(CommandError::InvalidArgument(_))
        ));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_list_empty() {
        let store = setup();
        assert!(store.list_names().unwrap().is_empty());
    }

    #[test]
    fn test_list_insertion_order() {
        let mut store = setup();
        for name in ["c", "a", "b"] {
            store
                .insert(&ConfigRecord::new(name, "p", "f", Vec::new()))
                .unwrap();
        }

        assert_eq!(store.list_names().unwrap(), vec!["c", "a", "b"]);
        // Each call re-queries.
        assert_eq!(store.list_names().unwrap().len(), 3);
    }

    #[test]
    fn test_open_creates_parent_and_close() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/state.db");

        let mut store = SqliteStore::open(&path).unwrap();
        store.ensure_schema().unwrap();
        assert_eq!(store.path(), Some(path.as_path()));
        store.close().unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_records_persist_across_connections() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("state.db");

        let mut store = SqliteStore::open(&path).unwrap();
        store.ensure_schema().unwrap();
        store
            .insert(&ConfigRecord::new("kept", "p", "f", b"data".to_vec()))
            .unwrap();
        store.close().unwrap();

        let mut store = SqliteStore::open(&path).unwrap();
        store.ensure_schema().unwrap();
        assert_eq!(store.get_by_name("kept").unwrap().content, b"data");
    }
}

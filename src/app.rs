//! Application context.
//!
//! [`App`] owns the config directory and the store for one process run.
//! Opening it prepares the directory and schema; closing it consumes the
//! value, so no command can run before setup or after teardown.

use crate::cli::registry;
use crate::config::Settings;
use crate::error::Result;
use crate::io::ensure_dir;
use crate::storage::{ConfigStore, SqliteStore};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

/// An initialized application context.
pub struct App<S: ConfigStore = SqliteStore> {
    config_dir: PathBuf,
    store: S,
}

impl App<SqliteStore> {
    /// Creates the config directory if needed, opens the database in it and
    /// ensures the schema.
    ///
    /// # Errors
    ///
    /// Returns a directory error, a database error if the file cannot be
    /// opened, or a schema error.
    pub fn open(settings: &Settings) -> Result<Self> {
        ensure_dir(settings.config_dir())?;
        let store = SqliteStore::open(settings.db_path())?;
        Self::with_store(settings.config_dir(), store)
    }

    /// Closes the database connection.
    ///
    /// # Errors
    ///
    /// Returns a database error if `SQLite` reports a failure on close.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}

impl<S: ConfigStore> App<S> {
    /// Builds a context over an existing store, ensuring its schema.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the store cannot be initialized.
    pub fn with_store(config_dir: impl Into<PathBuf>, mut store: S) -> Result<Self> {
        store.ensure_schema()?;
        Ok(Self {
            config_dir: config_dir.into(),
            store,
        })
    }

    /// Runs one command. `args` excludes the program name.
    ///
    /// # Errors
    ///
    /// Returns the command's error; unknown verbs are not errors.
    pub fn run(&mut self, args: &[OsString], out: &mut dyn Write) -> Result<()> {
        registry::dispatch(&mut self.store, args, out)
    }

    /// Returns the config directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

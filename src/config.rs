//! Runtime settings.
//!
//! Resolves where the database lives and how verbose logging is. Values come
//! from the environment, falling back to a per-user directory.

use crate::error::{Error, Result};
use crate::storage::DEFAULT_DB_NAME;
use std::path::{Path, PathBuf};

/// Directory under the home directory used when no override is set.
pub const DEFAULT_CONFIG_DIR: &str = ".confstash";

/// Environment variable overriding the config directory.
pub const HOME_ENV: &str = "CONFSTASH_HOME";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "CONFSTASH_LOG";

/// Log filter used when [`LOG_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the database.
    pub config_dir: PathBuf,
}

impl Settings {
    /// Builds settings rooted at an explicit directory.
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Resolves settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no override is set and the home
    /// directory cannot be determined.
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::var_os(HOME_ENV).map(PathBuf::from), dirs::home_dir())
    }

    fn resolve(override_dir: Option<PathBuf>, home: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
            return Ok(Self::with_config_dir(dir));
        }

        home.map(|h| Self::with_config_dir(h.join(DEFAULT_CONFIG_DIR)))
            .ok_or_else(|| Error::Config {
                message: format!("cannot determine home directory; set {HOME_ENV}"),
            })
    }

    /// Returns the config directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the database file path.
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.config_dir.join(DEFAULT_DB_NAME)
    }
}

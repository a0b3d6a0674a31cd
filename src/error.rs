//! Error types for confstash operations.
//!
//! This module provides the error hierarchy using `thiserror` for storage,
//! codec, file I/O and command-line validation failures.

use std::fmt;
use thiserror::Error;

/// Result type alias for confstash operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Storage-related errors (database operations).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored content could not be decoded.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

impl Error {
    /// Returns true for errors the user can fix by correcting their input.
    ///
    /// Everything else is treated as an internal failure by the binary.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Command(_)
                | Self::Io(IoError::FileNotFound { .. })
                | Self::Storage(
                    StorageError::ConfigNotFound { .. } | StorageError::DuplicateName { .. }
                )
        )
    }
}

/// Storage-specific errors for database operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(String),

    /// Schema could not be created.
    #[error("schema error: {0}")]
    Schema(String),

    /// No config stored under the given name.
    #[error("config not found: {name}")]
    ConfigNotFound {
        /// Name that was looked up.
        name: String,
    },

    /// A config with the given name already exists.
    #[error("config already exists: {name}")]
    DuplicateName {
        /// Name that collided.
        name: String,
    },

    /// A stored file name has no final path component to restore to.
    #[error("config {name} has an unusable stored file name: {file_name}")]
    InvalidFileName {
        /// Config name.
        name: String,
        /// Stored file name.
        file_name: String,
    },
}

/// Errors from the content codec.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Stored text is not a well-formed encoding.
    #[error("invalid encoded content: {0}")]
    Decode(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// The reader of standard output went away.
    #[error("output stream closed")]
    BrokenPipe,

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// A required command-line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// `-f`, the file to store.
    InputFile,
    /// `-p`, the owning program.
    ProgramName,
    /// `-n`, the config name.
    ConfigName,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InputFile => "input file (-f)",
            Self::ProgramName => "program name (-p)",
            Self::ConfigName => "config name (-n)",
        };
        f.write_str(s)
    }
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Missing required argument.
    #[error("missing {0}")]
    MissingArgument(Argument),

    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            return Self::Io(IoError::BrokenPipe);
        }
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(StorageError::Database(err.to_string()))
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<base64::DecodeError> for CodecError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}

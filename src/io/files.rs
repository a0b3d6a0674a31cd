//! Whole-file reading and writing for config snapshots.
//!
//! Config files are small, so content is read into memory in one pass and
//! written back the same way.

use crate::error::{IoError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// Resolves `path` against the current directory without touching the
/// filesystem.
///
/// # Errors
///
/// Returns an error if the path is empty or the current directory cannot
/// be determined.
pub fn absolute<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path_ref = path.as_ref();
    std::path::absolute(path_ref).map_err(|e| {
        IoError::ReadFailed {
            path: path_ref.to_string_lossy().to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Reads a file's bytes.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if nothing exists at `path`, and
/// [`IoError::ReadFailed`] for any other failure (including `path` being a
/// directory).
pub fn read_file_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    let mut file = File::open(path_ref).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path_str.clone(),
            }
        } else {
            IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            }
        }
    })?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| IoError::ReadFailed {
            path: path_str,
            reason: e.to_string(),
        })?;

    Ok(buffer)
}

/// Writes bytes to a file, creating it or truncating existing content.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns [`IoError::WriteFailed`] if the file cannot be created or written.
pub fn write_file_bytes<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path_ref = path.as_ref();
    let fail = |e: std::io::Error| IoError::WriteFailed {
        path: path_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    };

    let mut file = File::create(path_ref).map_err(fail)?;
    file.write_all(content).map_err(fail)?;
    file.flush().map_err(fail)?;

    Ok(())
}

/// Creates a directory and its parents if missing.
///
/// On Unix the directory is requested with mode `0o777`, reduced by the
/// process umask.
///
/// # Errors
///
/// Returns [`IoError::DirectoryFailed`] if creation fails.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path_ref = path.as_ref();
    if path_ref.is_dir() {
        return Ok(());
    }

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }

    builder
        .create(path_ref)
        .map_err(|e| IoError::DirectoryFailed {
            path: path_ref.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;

    tracing::debug!(path = %path_ref.display(), "created directory");
    Ok(())
}

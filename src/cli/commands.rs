//! CLI command implementations.
//!
//! Each verb has a typed handler taking the store and its validated input,
//! plus a `run_*` adapter with the registry's signature that parses raw
//! arguments first.

use crate::cli::output::{OutputFormat, format_names};
use crate::cli::parser::{
    AddConfig, AddConfigArgs, GetConfig, GetConfigArgs, ListArgs, parse_args, usage_of,
};
use crate::core::ConfigRecord;
use crate::error::{CommandError, Result, StorageError};
use crate::io::{absolute, read_file_bytes, write_file_bytes};
use crate::storage::ConfigStore;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads `input.file` and stores it under `input.name`.
///
/// The record keeps only the file's base name, so it can be restored into
/// any directory.
///
/// # Errors
///
/// Returns a file-not-found error if the input does not exist, an
/// invalid-argument error if the path has no file name or the name is not
/// valid UTF-8, and any storage error from the insert. Nothing is written
/// on failure.
pub fn add_config(store: &mut dyn ConfigStore, input: &AddConfig) -> Result<()> {
    let path = absolute(&input.file)?;
    let file_name = path.file_name().ok_or_else(|| {
        CommandError::InvalidArgument(format!("not a file path: {}", input.file.display()))
    })?;
    let file_name = file_name.to_str().map(str::to_string).ok_or_else(|| {
        CommandError::InvalidArgument(format!(
            "file name is not valid UTF-8: {}",
            input.file.display()
        ))
    })?;

    let content = read_file_bytes(&path)?;
    let record = ConfigRecord::new(&input.name, &input.program, file_name, content);
    store.insert(&record)
}

/// Retrieves a config and writes it to `input.dir` or to `out`.
///
/// Returns the path written, or `None` when the content went to `out`.
///
/// # Errors
///
/// Returns a not-found error for an unknown name, a codec error for corrupt
/// stored content, an invalid-file-name error if the stored file name has no
/// final component, and a write error if the target file cannot be written.
pub fn get_config(
    store: &dyn ConfigStore,
    input: &GetConfig,
    out: &mut dyn Write,
) -> Result<Option<PathBuf>> {
    let record = store.get_by_name(&input.name)?;

    let Some(dir) = &input.dir else {
        out.write_all(&record.content)?;
        out.flush()?;
        return Ok(None);
    };

    // Only the final component is used, so the write stays inside `dir`.
    let file_name = Path::new(&record.file_name).file_name().ok_or_else(|| {
        StorageError::InvalidFileName {
            name: record.name.clone(),
            file_name: record.file_name.clone(),
        }
    })?;
    let target = absolute(dir)?.join(file_name);
    write_file_bytes(&target, &record.content)?;
    tracing::info!(name = %record.name, path = %target.display(), "restored config");
    Ok(Some(target))
}

/// Writes every stored name in store order.
///
/// # Errors
///
/// Returns an error if the store cannot be read or `out` cannot be written.
pub fn list_configs(store: &dyn ConfigStore, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let names = store.list_names()?;
    if names.is_empty() {
        tracing::debug!("no configs stored");
    }
    out.write_all(format_names(&names, format).as_bytes())?;
    Ok(())
}

// ==================== Registry adapters ====================

/// Parses and runs `add-config`.
///
/// # Errors
///
/// Returns argument errors from parsing and validation, then any error from
/// [`add_config`].
pub fn run_add_config(
    store: &mut dyn ConfigStore,
    args: &[OsString],
    out: &mut dyn Write,
) -> Result<()> {
    let Some(args) = parse_args::<AddConfigArgs>("add-config", args)? else {
        return write_usage(&usage_of::<AddConfigArgs>(), out);
    };
    add_config(store, &args.validate()?)
}

/// Parses and runs `get-config`.
///
/// # Errors
///
/// Returns argument errors from parsing and validation, then any error from
/// [`get_config`].
pub fn run_get_config(
    store: &mut dyn ConfigStore,
    args: &[OsString],
    out: &mut dyn Write,
) -> Result<()> {
    let Some(args) = parse_args::<GetConfigArgs>("get-config", args)? else {
        return write_usage(&usage_of::<GetConfigArgs>(), out);
    };
    get_config(store, &args.validate()?, out).map(|_| ())
}

/// Parses and runs `list`.
///
/// # Errors
///
/// Returns argument errors from parsing, then any error from
/// [`list_configs`].
pub fn run_list(store: &mut dyn ConfigStore, args: &[OsString], out: &mut dyn Write) -> Result<()> {
    let Some(args) = parse_args::<ListArgs>("list", args)? else {
        return write_usage(&usage_of::<ListArgs>(), out);
    };
    list_configs(store, args.format, out)
}

fn write_usage(usage: &str, out: &mut dyn Write) -> Result<()> {
    out.write_all(usage.as_bytes())?;
    Ok(())
}

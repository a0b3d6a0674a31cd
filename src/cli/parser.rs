//! Per-command argument parsing.
//!
//! Each verb owns a clap derive struct. Flags the verb needs are declared
//! optional at the clap level and checked afterwards, so a missing flag maps
//! to the specific [`CommandError::MissingArgument`] rather than a generic
//! clap error.

use crate::cli::output::OutputFormat;
use crate::error::{Argument, CommandError, Result};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Store a config file under a name.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "add-config")]
pub struct AddConfigArgs {
    /// Config file to add to the database.
    #[arg(short = 'f', value_name = "PATH")]
    pub file: Option<OsString>,

    /// User-defined name for the config.
    #[arg(short = 'n', value_name = "NAME")]
    pub name: Option<String>,

    /// Name of the program the config is associated with.
    #[arg(short = 'p', value_name = "PROGRAM")]
    pub program: Option<String>,
}

/// Retrieve a stored config by name.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "get-config")]
pub struct GetConfigArgs {
    /// Name of the config to retrieve.
    #[arg(short = 'n', value_name = "NAME")]
    pub name: Option<String>,

    /// Directory to write the retrieved config into (stdout if omitted).
    #[arg(short = 'd', value_name = "DIR")]
    pub dir: Option<OsString>,
}

/// List the names of all stored configs.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "list")]
pub struct ListArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Validated input for `add-config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddConfig {
    /// File to read.
    pub file: PathBuf,
    /// Lookup name.
    pub name: String,
    /// Owning program.
    pub program: String,
}

/// Validated input for `get-config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetConfig {
    /// Lookup name.
    pub name: String,
    /// Target directory, or `None` for stdout.
    pub dir: Option<PathBuf>,
}

impl AddConfigArgs {
    /// Checks required flags in the order file, program, name.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MissingArgument`] naming the first absent or
    /// empty flag.
    pub fn validate(self) -> Result<AddConfig> {
        let file = self
            .file
            .filter(|f| !f.is_empty())
            .map(PathBuf::from)
            .ok_or(CommandError::MissingArgument(Argument::InputFile))?;
        let program = required(self.program, Argument::ProgramName)?;
        let name = required(self.name, Argument::ConfigName)?;
        Ok(AddConfig {
            file,
            name,
            program,
        })
    }
}

impl GetConfigArgs {
    /// Checks that a config name was given.
    ///
    /// An empty `-d` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MissingArgument`] if `-n` is absent or empty.
    pub fn validate(self) -> Result<GetConfig> {
        let name = required(self.name, Argument::ConfigName)?;
        let dir = self.dir.filter(|d| !d.is_empty()).map(PathBuf::from);
        Ok(GetConfig { name, dir })
    }
}

fn required(value: Option<String>, argument: Argument) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CommandError::MissingArgument(argument).into())
}

/// Parses the arguments that follow `verb`.
///
/// Returns `Ok(None)` when `-h`/`--help` was requested; the caller prints
/// usage instead of running the command.
///
/// # Errors
///
/// Returns [`CommandError::InvalidArgument`] with clap's message for unknown
/// flags, missing flag values, and unexpected positionals.
pub fn parse_args<T: Parser>(verb: &str, args: &[OsString]) -> Result<Option<T>> {
    let argv = std::iter::once(OsString::from(verb)).chain(args.iter().cloned());
    match T::try_parse_from(argv) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) if e.kind() == clap::error::ErrorKind::DisplayHelp => Ok(None),
        Err(e) => Err(CommandError::InvalidArgument(e.to_string().trim_end().to_string()).into()),
    }
}

/// Renders the usage text for a verb's argument struct.
#[must_use]
pub fn usage_of<T: CommandFactory>() -> String {
    T::command().render_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_commands_debug_assert() {
        AddConfigArgs::command().debug_assert();
        GetConfigArgs::command().debug_assert();
        ListArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_add_config() {
        let args: AddConfigArgs = parse_args("add-config", &os(&["-f", "a.conf", "-n", "n1", "-p", "p1"]))
            .unwrap()
            .unwrap();
        let input = args.validate().unwrap();
        assert_eq!(input.file, PathBuf::from("a.conf"));
        assert_eq!(input.name, "n1");
        assert_eq!(input.program, "p1");
    }

    #[test]
    fn test_add_config_check_order() {
        let err = AddConfigArgs::default().validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Command(CommandError::MissingArgument(Argument::InputFile))
        ));

        let args = AddConfigArgs {
            file: Some(OsString::from("a")),
            ..Default::default()
        };
        let err = args.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Command(CommandError::MissingArgument(Argument::ProgramName))
        ));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let args: AddConfigArgs = parse_args("add-config", &os(&["-f", "", "-n", "n", "-p", "p"]))
            .unwrap()
            .unwrap();
        let err = args.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Command(CommandError::MissingArgument(Argument::InputFile))
        ));
    }

    #[test]
    fn test_parse_get_config_optional_dir() {
        let args: GetConfigArgs = parse_args("get-config", &os(&["-n", "cfg1"])).unwrap().unwrap();
        let input = args.validate().unwrap();
        assert_eq!(input.name, "cfg1");
        assert!(input.dir.is_none());

        let args: GetConfigArgs = parse_args("get-config", &os(&["-n", "cfg1", "-d", "/tmp/out"]))
            .unwrap()
            .unwrap();
        assert_eq!(args.validate().unwrap().dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_help_returns_none() {
        let parsed = parse_args::<GetConfigArgs>("get-config", &os(&["-h"])).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse_args::<ListArgs>("list", &os(&["--bogus"])).unwrap_err();
        assert!(matches!(err, Error::Command(CommandError::InvalidArgument(_))));
    }

    #[test]
    fn test_list_format() {
        let args: ListArgs = parse_args("list", &os(&[])).unwrap().unwrap();
        assert_eq!(args.format, OutputFormat::Text);

        let args: ListArgs = parse_args("list", &os(&["--format", "json"])).unwrap().unwrap();
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_usage_mentions_flags() {
        let usage = usage_of::<AddConfigArgs>();
        assert!(usage.contains("add-config"));
        assert!(usage.contains("-f <PATH>"));
        assert!(usage.contains("-n <NAME>"));
        assert!(usage.contains("-p <PROGRAM>"));
    }
}

//! Verb registry and dispatch.
//!
//! The registry is a fixed table kept in lexicographic verb order, so usage
//! output is deterministic without sorting at print time.

use crate::cli::commands::{run_add_config, run_get_config, run_list};
use crate::cli::parser::{AddConfigArgs, GetConfigArgs, ListArgs, usage_of};
use crate::error::Result;
use crate::storage::ConfigStore;
use std::ffi::OsString;
use std::io::Write;

/// Signature shared by every command handler.
pub type Handler = fn(&mut dyn ConfigStore, &[OsString], &mut dyn Write) -> Result<()>;

/// A registered verb.
pub struct CommandSpec {
    /// Verb matched exactly (case-sensitive) against the first argument.
    pub verb: &'static str,
    /// Renders this verb's usage text.
    pub usage: fn() -> String,
    /// Runs the verb with the arguments that follow it.
    pub run: Handler,
}

/// All verbs, sorted by `verb`.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        verb: "add-config",
        usage: usage_of::<AddConfigArgs>,
        run: run_add_config,
    },
    CommandSpec {
        verb: "get-config",
        usage: usage_of::<GetConfigArgs>,
        run: run_get_config,
    },
    CommandSpec {
        verb: "list",
        usage: usage_of::<ListArgs>,
        run: run_list,
    },
];

/// Looks up a verb.
#[must_use]
pub fn find(verb: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.verb == verb)
}

/// Renders the full usage summary: a banner, then every verb's usage in
/// registry order separated by blank lines.
#[must_use]
pub fn usage() -> String {
    let mut output = format!("Usage: {} <COMMAND> [OPTIONS]\n", env!("CARGO_PKG_NAME"));
    for command in COMMANDS {
        output.push('\n');
        output.push_str(&(command.usage)());
    }
    output
}

/// Dispatches `args` (without the program name) to the matching verb.
///
/// No arguments, or a verb that is not registered, prints the usage summary
/// to `out` and succeeds.
///
/// # Errors
///
/// Returns whatever error the selected handler returns.
pub fn dispatch(store: &mut dyn ConfigStore, args: &[OsString], out: &mut dyn Write) -> Result<()> {
    let Some((verb, rest)) = args.split_first() else {
        out.write_all(usage().as_bytes())?;
        return Ok(());
    };

    match verb.to_str().and_then(find) {
        Some(command) => {
            tracing::debug!(verb = command.verb, "dispatching");
            (command.run)(store, rest, out)
        }
        None => {
            tracing::debug!(verb = %verb.to_string_lossy(), "unknown verb");
            out.write_all(usage().as_bytes())?;
            Ok(())
        }
    }
}

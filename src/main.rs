//! Binary entry point for confstash.

#![allow(clippy::print_stderr)]

use confstash::error::IoError;
use confstash::{App, Error, Result, Settings, logging};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    match run(&args) {
        Ok(()) | Err(Error::Io(IoError::BrokenPipe)) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            tracing::debug!(user_error = e.is_user_error(), "command failed");
            if e.is_user_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run(args: &[OsString]) -> Result<()> {
    let settings = Settings::from_env()?;
    let mut app = App::open(&settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = app
        .run(args, &mut out)
        .and_then(|()| out.flush().map_err(Error::from));

    // The command's error wins over a close error.
    let closed = app.close();
    result.and(closed)
}

//! myapp library crate
//!
//! This crate holds everything the `myapp` binary does. `src/main.rs` only
//! calls `myapp_lib::run()`. Modules:
//!
//! - `msg`: messaging helper.
//! - `util`: the banner printer.
//! - `foolib`: the `ham`, `spam` and `eggs` processors.
//!
//! Public API
//!
//! - `run()`: CLI entrypoint used by the binary.
//! - `validate()`: the argument-count check.
//! - `process_args()`: the per-argument loop, writing to any sink.

pub mod foolib;
pub mod msg;
pub mod util;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::foolib::{Processor, default_processors};
use crate::msg::msg;
use crate::util::print_banner;

/// Message printed at the start of every argument's block.
pub const MESSAGE: &str = "Here is a little message...\n";

/// Text of the usage error, shown above clap's `Usage:` line.
pub const USAGE_MESSAGE: &str = "at least one argument is required";

/// Command-line surface: one or more positional values and no flags.
///
/// Only used to render usage. Arguments are never parsed through it, so
/// `--`, `-h` or `--version` reach the processors like any other value.
#[derive(Parser, Debug)]
#[command(
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Values to run through ham, spam and eggs
    #[arg(value_name = "ARGS", required = true, num_args = 1..)]
    pub args: Vec<String>,
}

/// Check that `argv` (program name first) has at least two entries.
///
/// On failure returns a clap usage error; `exit()` on it prints
/// `error: at least one argument is required` and the `Usage:` line to stderr
/// and terminates with status 2.
pub fn validate<S: AsRef<str>>(argv: &[S]) -> std::result::Result<(), clap::Error> {
    if argv.len() < 2 {
        return Err(Cli::command().error(ErrorKind::MissingRequiredArgument, USAGE_MESSAGE));
    }
    Ok(())
}

/// Run every entry of `argv`, index 0 included, through the fixed sequence:
/// message, banner, each processor in order, banner.
///
/// No argument-count check happens here; see [`validate`]. The first error
/// from a processor or from `out` stops the loop and is returned with the
/// failing step and argument attached.
pub fn process_args<S: AsRef<str>>(
    argv: &[S],
    out: &mut dyn Write,
    processors: &mut [Box<dyn Processor>],
) -> Result<()> {
    for arg in argv {
        let arg = arg.as_ref();

        msg(out, MESSAGE).context("writing message")?;
        print_banner(out).context("writing banner")?;
        for p in processors.iter_mut() {
            p.process(arg, out)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("{} failed on {:?}", p.name(), arg))?;
        }
        print_banner(out).context("writing banner")?;
    }

    Ok(())
}

/// Diagnostic line `run` prints to stderr for a propagated error.
pub fn error_line(e: &anyhow::Error) -> String {
    format!("error: {:#}", e)
}

/// Run the myapp CLI.
///
/// Reads the process arguments (non-UTF-8 bytes are replaced lossily),
/// validates them, then processes every argument against locked stdout with
/// the default processors.
///
/// Exit status:
/// - 0 once every argument has been processed.
/// - 2 with a usage message when no user argument is given.
/// - 1 when a processor or stdout reports an error (printed as `error: ...`).
///
/// ```no_run
/// myapp_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let argv: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    if let Err(e) = validate(&argv) {
        e.exit();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut processors = default_processors();

    if let Err(e) = process_args(&argv, &mut out, &mut processors) {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}

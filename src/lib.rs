//! Core library entry for the `diagnose` CLI.
//!
//! A submission flows through four pieces: [`form`] turns raw text into a
//! feature vector, [`predict`] runs the task's model from the
//! [`registry`], and [`present`] maps the outcome to a label.
//! [`submission::submit`] chains them.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod form;
pub mod ports;
pub mod predict;
pub mod present;
pub mod registry;
pub mod submission;
pub mod task;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print to stdout and succeed.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::task::Task;

/// Top-level CLI parser for `diagnose`.
#[derive(Debug, Parser)]
#[command(name = "diagnose", version, about = "Disease risk prediction from clinical measurements")]
pub struct Cli {
    /// Directory holding the serialized models.
    #[arg(long, global = true, value_name = "DIR")]
    pub models_dir: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the available prediction tasks.
    Tasks,
    /// Show a task's input form.
    Fields {
        /// Task whose form to show.
        task: Task,
    },
    /// Run one prediction from command-line values.
    Predict {
        /// Task to predict.
        task: Task,
        /// Field values in form order; missing trailing fields default to 0.
        #[arg(num_args = 0.., allow_negative_numbers = true)]
        values: Vec<String>,
        /// Set one field by key or name, e.g. `--set glucose=120`.
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        sets: Vec<(String, String)>,
        /// Print the verdict as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Fill in a task's form interactively.
    Form {
        /// Task to open; prompts with a menu when omitted.
        task: Option<Task>,
    },
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
    if key.trim().is_empty() {
        return Err(format!("missing field name in {s:?}"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

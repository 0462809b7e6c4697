//! Command dispatch and handlers.

pub mod fields;
pub mod form;
pub mod predict;
pub mod tasks;

use std::io;

use crate::cli::{Cli, Command};
use crate::config::Sources;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// `tasks` and `fields` need no models. `predict` and `form` load all three
/// models first and refuse to run if any fails to load.
///
/// # Errors
///
/// Returns an error string if startup or the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let sources = Sources::from_env(cli.models_dir.clone());
    dispatch_with_context(&cli.command, &ctx, &sources)
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    sources: &Sources,
) -> Result<(), String> {
    let stdout = io::stdout();
    match command {
        Command::Tasks => tasks::run(&mut stdout.lock()),
        Command::Fields { task } => fields::run(*task, &mut stdout.lock()),
        Command::Predict { task, values, sets, json } => {
            let registry = ctx.start(sources)?;
            let request = predict::Request { task: *task, values, sets, json: *json };
            predict::run(&registry, &request, &mut stdout.lock())
        }
        Command::Form { task } => {
            let registry = ctx.start(sources)?;
            form::run(&registry, *task, io::stdin().lock(), stdout.lock())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::MemFs;
    use crate::task::Task;

    #[test]
    fn listing_commands_need_no_models() {
        let ctx = ServiceContext::with_fs(Box::new(MemFs::default()));
        let sources = Sources::default();
        assert!(dispatch_with_context(&Command::Tasks, &ctx, &sources).is_ok());
        assert!(
            dispatch_with_context(&Command::Fields { task: Task::Parkinsons }, &ctx, &sources)
                .is_ok()
        );
    }

    #[test]
    fn predict_refuses_to_run_without_models() {
        let ctx = ServiceContext::with_fs(Box::new(MemFs::default()));
        let sources = Sources { flag: Some("/nowhere".into()), ..Sources::default() };
        let command = Command::Predict {
            task: Task::Diabetes,
            values: Vec::new(),
            sets: Vec::new(),
            json: false,
        };
        let err = dispatch_with_context(&command, &ctx, &sources).unwrap_err();
        assert!(err.contains("not found"));
    }
}

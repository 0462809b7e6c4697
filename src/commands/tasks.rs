//! `diagnose tasks` command.

use std::io::Write;

use crate::form::prompt::MENU_TITLE;
use crate::task::Task;

/// Execute the `tasks` command.
///
/// Lists every task with its key, field count and menu label.
///
/// # Errors
///
/// Returns an error string if writing to `out` fails.
pub fn run(out: &mut impl Write) -> Result<(), String> {
    let key_width = Task::ALL.iter().map(|t| cli_name(*t).len()).max().unwrap_or(4).max(4);

    writeln!(out, "{MENU_TITLE}\n").map_err(|e| format!("write error: {e}"))?;
    writeln!(out, "{:<key_width$}  {:>6}  TITLE", "TASK", "FIELDS")
        .map_err(|e| format!("write error: {e}"))?;
    for task in Task::ALL {
        writeln!(
            out,
            "{:<key_width$}  {:>6}  {}",
            cli_name(task),
            task.field_count(),
            task.menu_label()
        )
        .map_err(|e| format!("write error: {e}"))?;
    }
    Ok(())
}

/// Name accepted for `task` on the command line.
fn cli_name(task: Task) -> String {
    task.key().replace('_', "-")
}

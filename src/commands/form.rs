//! `diagnose form` command.

use std::io::{BufRead, Write};

use log::debug;

use crate::form::prompt::FormLoop;
use crate::registry::ModelRegistry;
use crate::task::Task;

/// Execute the `form` command over the given input and output.
///
/// # Errors
///
/// Returns an error string if terminal I/O fails.
pub fn run<R: BufRead, W: Write>(
    registry: &ModelRegistry,
    task: Option<Task>,
    reader: R,
    writer: W,
) -> Result<(), String> {
    let submissions = FormLoop::new(reader, writer).run(registry, task)?;
    debug!("form closed after {submissions} submission(s)");
    Ok(())
}

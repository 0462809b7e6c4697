//! `diagnose predict` command.

use std::io::Write;

use crate::form::RawForm;
use crate::registry::ModelRegistry;
use crate::submission::submit;
use crate::task::Task;

/// Arguments of one `predict` invocation.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    /// Task to predict.
    pub task: Task,
    /// Positional values in field order.
    pub values: &'a [String],
    /// `KEY=VALUE` assignments, applied after positional values.
    pub sets: &'a [(String, String)],
    /// Emit JSON instead of text.
    pub json: bool,
}

/// Execute the `predict` command.
///
/// Builds the form from positional values and `--set` assignments, runs a
/// single submission, and prints the verdict.
///
/// # Errors
///
/// Returns an error string if a value does not parse, a field name is
/// unknown, the model rejects the input, or output fails.
pub fn run(registry: &ModelRegistry, request: &Request<'_>, out: &mut impl Write) -> Result<(), String> {
    let form = build_form(request).map_err(|e| format!("invalid input: {e}"))?;
    let verdict = submit(registry, &form).map_err(|e| e.to_string())?;

    let rendered = if request.json {
        serde_json::to_string(&verdict).map_err(|e| format!("Failed to serialize verdict: {e}"))?
    } else {
        verdict.to_string()
    };
    writeln!(out, "{rendered}").map_err(|e| format!("write error: {e}"))
}

fn build_form(request: &Request<'_>) -> Result<RawForm, crate::error::ParseError> {
    let mut form = RawForm::new(request.task);
    form.fill(request.values.iter().cloned())?;
    for (key, value) in request.sets {
        form.set(key, value.clone())?;
    }
    Ok(form)
}

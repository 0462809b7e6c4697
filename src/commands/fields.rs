//! `diagnose fields` command.

use std::io::Write;

use crate::form::{layout_rows, DEFAULT_RAW};
use crate::task::Task;

/// Execute the `fields` command.
///
/// Prints the task's form as it is laid out: rows of three, each field with
/// its position, key and default.
///
/// # Errors
///
/// Returns an error string if writing to `out` fails.
pub fn run(task: Task, out: &mut impl Write) -> Result<(), String> {
    let w = |e: std::io::Error| format!("write error: {e}");

    writeln!(out, "{}", task.title()).map_err(w)?;
    writeln!(out, "{}", task.intro()).map_err(w)?;
    let key_width = task.fields().iter().map(|f| f.key.len()).max().unwrap_or(3);

    for (row, fields) in layout_rows(task.fields()).into_iter().enumerate() {
        writeln!(out, "\nRow {}", row + 1).map_err(w)?;
        for field in fields {
            writeln!(
                out,
                "  {:>2}. {:<key_width$}  {}  [{DEFAULT_RAW}]",
                field.position + 1,
                field.key,
                field.name
            )
            .map_err(w)?;
        }
    }
    writeln!(out, "\nSubmit: {}", task.submit_label()).map_err(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(task: Task) -> String {
        let mut out = Vec::new();
        run(task, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn diabetes_layout() {
        let text = render(Task::Diabetes);
        assert!(text.starts_with("Diabetes Prediction\n"));
        assert_eq!(text.matches("\nRow ").count(), 3);
        assert!(text.contains(" 8. age"));
        assert!(text.contains("Submit: Predict Diabetes"));
    }

    #[test]
    fn fields_appear_in_order() {
        let text = render(Task::HeartDisease);
        let positions: Vec<_> = Task::HeartDisease
            .fields()
            .iter()
            .map(|f| text.find(f.name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

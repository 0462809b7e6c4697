//! Interactive form loop for `diagnose form`.
//!
//! Shows the task menu (unless a task was given), prompts each field row by
//! row, submits, prints the verdict or the error, and offers another round.
//! End of input at any prompt ends the loop without submitting.

use std::io::{BufRead, Write};

use crate::form::{layout_rows, RawForm, DEFAULT_RAW};
use crate::registry::ModelRegistry;
use crate::submission::submit;
use crate::task::Task;

/// Heading of the task menu.
pub const MENU_TITLE: &str = "Disease Prediction System";

/// State for the interactive form loop.
pub struct FormLoop<R: BufRead, W: Write> {
    /// Reader for user input.
    reader: R,
    /// Writer for prompts and results.
    writer: W,
}

impl<R: BufRead, W: Write> FormLoop<R, W> {
    /// Creates a loop over the given input and output.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs submissions until the user declines another or input ends.
    ///
    /// With `fixed` set, every round uses that task; otherwise each round
    /// starts at the menu. Returns the number of submissions made,
    /// including ones that failed.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Parse and inference errors are shown and the loop continues.
    pub fn run(mut self, registry: &ModelRegistry, fixed: Option<Task>) -> Result<usize, String> {
        let mut submissions = 0;
        loop {
            let task = match fixed {
                Some(task) => task,
                None => match self.choose_task()? {
                    Some(task) => task,
                    None => break,
                },
            };

            let Some(form) = self.read_form(task)? else {
                break;
            };

            submissions += 1;
            self.say(&format!("\n{}", task.submit_label()))?;
            match submit(registry, &form) {
                Ok(verdict) => self.say(&verdict.to_string())?,
                Err(e) => self.say(&format!("Error: {e}"))?,
            }

            if !self.ask_again()? {
                break;
            }
        }
        Ok(submissions)
    }

    /// Prints the menu and reads a choice until it resolves or input ends.
    fn choose_task(&mut self) -> Result<Option<Task>, String> {
        self.say(&format!("\n{MENU_TITLE}"))?;
        for (i, task) in Task::ALL.iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, task.menu_label()))?;
        }
        loop {
            self.prompt("Select a task: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match Task::from_choice(&line) {
                Some(task) => return Ok(Some(task)),
                None => self.say(&format!("Unknown choice {:?}.", line.trim()))?,
            }
        }
    }

    /// Prompts every field of `task`; Enter keeps the default.
    fn read_form(&mut self, task: Task) -> Result<Option<RawForm>, String> {
        self.say(&format!("\n{}\n{}", task.title(), task.intro()))?;
        let mut form = RawForm::new(task);
        for (row, fields) in layout_rows(task.fields()).into_iter().enumerate() {
            for field in fields {
                self.prompt(&format!("[row {}] {} [{DEFAULT_RAW}]: ", row + 1, field.name))?;
                let Some(line) = self.read_line()? else {
                    return Ok(None);
                };
                let value = line.trim();
                if !value.is_empty() {
                    form.set_at(field.position, value).map_err(|e| e.to_string())?;
                }
            }
        }
        Ok(Some(form))
    }

    fn ask_again(&mut self) -> Result<bool, String> {
        self.prompt("\nAnother prediction? [y/N]: ")?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, String> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line).map_err(|e| format!("read error: {e}"))?;
        Ok((n > 0).then_some(line))
    }

    fn say(&mut self, text: &str) -> Result<(), String> {
        writeln!(self.writer, "{text}").map_err(|e| format!("write error: {e}"))
    }

    fn prompt(&mut self, text: &str) -> Result<(), String> {
        write!(self.writer, "{text}").map_err(|e| format!("write error: {e}"))?;
        self.writer.flush().map_err(|e| format!("flush error: {e}"))
    }
}

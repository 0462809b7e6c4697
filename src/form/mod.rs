//! Input collection: raw text values in, ordered feature vector out.
//!
//! A [`RawForm`] holds one text value per field of a task, starting at
//! `"0"` for every field. [`RawForm::collect`] parses all of them or none.

pub mod prompt;

use log::debug;

use crate::error::ParseError;
use crate::ports::model::FeatureVector;
use crate::task::{FieldSpec, Task};

/// Number of fields shown side by side.
pub const ROW_WIDTH: usize = 3;

/// Text an untouched field holds.
pub const DEFAULT_RAW: &str = "0";

/// Groups fields into display rows of [`ROW_WIDTH`], preserving order.
///
/// The last row holds the remainder when the count is not a multiple of
/// the row width.
#[must_use]
pub fn layout_rows(fields: &[FieldSpec]) -> Vec<&[FieldSpec]> {
    fields.chunks(ROW_WIDTH).collect()
}

/// Parses a single raw value for `field`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidNumber`] naming the field if the trimmed
/// text is not a floating-point literal.
pub fn parse_value(field: &FieldSpec, raw: &str) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber { field: field.name, raw: raw.to_string() })
}

/// Raw text inputs for one submission of a task's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawForm {
    task: Task,
    values: Vec<String>,
}

impl RawForm {
    /// Creates a form with every field at its default.
    #[must_use]
    pub fn new(task: Task) -> Self {
        Self { task, values: vec![DEFAULT_RAW.to_string(); task.field_count()] }
    }

    /// Task this form belongs to.
    #[must_use]
    pub fn task(&self) -> Task {
        self.task
    }

    /// Raw values in field order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Assigns the raw value of the field at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TooManyValues`] if `position` is past the end
    /// of the form.
    pub fn set_at(&mut self, position: usize, raw: impl Into<String>) -> Result<(), ParseError> {
        let expected = self.values.len();
        let slot = self
            .values
            .get_mut(position)
            .ok_or(ParseError::TooManyValues { expected, actual: position + 1 })?;
        *slot = raw.into();
        Ok(())
    }

    /// Assigns a field by key or by its displayed name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownField`] if no field matches.
    pub fn set(&mut self, key: &str, raw: impl Into<String>) -> Result<(), ParseError> {
        let field = find_field(self.task, key)
            .ok_or_else(|| ParseError::UnknownField { key: key.to_string() })?;
        self.set_at(field.position, raw)
    }

    /// Assigns values in field order, leaving trailing fields untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::TooManyValues`] if more values than fields are
    /// given; the form is left unchanged in that case.
    pub fn fill<I, S>(&mut self, raws: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raws: Vec<String> = raws.into_iter().map(Into::into).collect();
        if raws.len() > self.values.len() {
            return Err(ParseError::TooManyValues {
                expected: self.values.len(),
                actual: raws.len(),
            });
        }
        for (slot, raw) in self.values.iter_mut().zip(raws) {
            *slot = raw;
        }
        Ok(())
    }

    /// Parses every field into a feature vector.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] in field order; no vector is
    /// produced when any field fails.
    pub fn collect(&self) -> Result<FeatureVector, ParseError> {
        let values = self
            .task
            .fields()
            .iter()
            .zip(&self.values)
            .map(|(field, raw)| parse_value(field, raw))
            .collect::<Result<Vec<f64>, _>>()?;
        debug!("collected {} features for {}", values.len(), self.task);
        Ok(FeatureVector::new(values))
    }
}

/// Looks up a field of `task` by key or displayed name.
#[must_use]
pub fn find_field(task: Task, key: &str) -> Option<&'static FieldSpec> {
    let key = key.trim();
    task.fields()
        .iter()
        .find(|f| f.key.eq_ignore_ascii_case(key) || f.name.eq_ignore_ascii_case(key))
}

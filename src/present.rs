//! Result presenter: turns a raw outcome into a labelled verdict.

use std::fmt;

use serde::Serialize;

use crate::ports::model::Outcome;
use crate::task::Task;

/// How a verdict should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Positive finding.
    Alert,
    /// Negative finding.
    Success,
}

/// Label and severity for one prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Task the verdict belongs to.
    pub task: Task,
    /// Human-readable result.
    pub label: &'static str,
    /// Display severity.
    pub severity: Severity,
    /// Class code the model returned.
    pub outcome: Outcome,
}

/// `(positive, negative)` labels per task.
fn labels(task: Task) -> (&'static str, &'static str) {
    match task {
        Task::Diabetes => ("Diabetic", "Not Diabetic"),
        Task::HeartDisease => ("Has Heart Disease", "No Heart Disease"),
        Task::Parkinsons => ("Has Parkinson's", "No Parkinson's"),
    }
}

/// Maps `outcome` to the task's label and severity.
#[must_use]
pub fn present(task: Task, outcome: Outcome) -> Verdict {
    let (positive, negative) = labels(task);
    let (label, severity) = if outcome.is_positive() {
        (positive, Severity::Alert)
    } else {
        (negative, Severity::Success)
    };
    Verdict { task, label, severity, outcome }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.severity {
            Severity::Alert => "⚠️",
            Severity::Success => "✅",
        };
        write!(f, "Result: {} {marker}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(task: Task, outcome: i64) -> (&'static str, Severity) {
        let v = present(task, Outcome(outcome));
        (v.label, v.severity)
    }

    #[test]
    fn diabetes_labels() {
        assert_eq!(pair(Task::Diabetes, 1), ("Diabetic", Severity::Alert));
        assert_eq!(pair(Task::Diabetes, 0), ("Not Diabetic", Severity::Success));
    }

    #[test]
    fn heart_disease_labels() {
        assert_eq!(pair(Task::HeartDisease, 1), ("Has Heart Disease", Severity::Alert));
        assert_eq!(pair(Task::HeartDisease, 0), ("No Heart Disease", Severity::Success));
    }

    #[test]
    fn parkinsons_labels() {
        assert_eq!(pair(Task::Parkinsons, 1), ("Has Parkinson's", Severity::Alert));
        assert_eq!(pair(Task::Parkinsons, 0), ("No Parkinson's", Severity::Success));
    }

    #[test]
    fn any_non_zero_code_is_positive() {
        assert_eq!(pair(Task::Diabetes, 2).1, Severity::Alert);
    }

    #[test]
    fn display_and_json() {
        let v = present(Task::Diabetes, Outcome(1));
        assert_eq!(v.to_string(), "Result: Diabetic ⚠️");
        assert_eq!(present(Task::Parkinsons, Outcome(0)).to_string(), "Result: No Parkinson's ✅");

        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"task": "diabetes", "label": "Diabetic", "severity": "alert", "outcome": 1})
        );
    }
}

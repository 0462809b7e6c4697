//! Prediction tasks and their fixed form definitions.
//!
//! Every per-task constant (field list, artifact file, page copy) hangs off
//! an exhaustive match on [`Task`], so adding a task is a compile error until
//! each table has an entry for it.

mod fields;

use std::fmt;

use serde::Serialize;

pub use fields::FieldSpec;

/// One of the supported prediction domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    /// Diabetes risk from metabolic measurements.
    Diabetes,
    /// Heart disease risk from cardiac measurements.
    HeartDisease,
    /// Parkinson's disease risk from voice measurements.
    Parkinsons,
}

impl Task {
    /// All tasks in menu order.
    pub const ALL: [Task; 3] = [Task::Diabetes, Task::HeartDisease, Task::Parkinsons];

    /// Ordered input fields for this task.
    #[must_use]
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Task::Diabetes => &fields::DIABETES,
            Task::HeartDisease => &fields::HEART_DISEASE,
            Task::Parkinsons => &fields::PARKINSONS,
        }
    }

    /// Number of features the task's model expects.
    #[must_use]
    pub fn field_count(self) -> usize {
        self.fields().len()
    }

    /// Stable identifier used on the command line and in config files.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Task::Diabetes => "diabetes",
            Task::HeartDisease => "heart_disease",
            Task::Parkinsons => "parkinsons",
        }
    }

    /// Default file name of the serialized model inside the models directory.
    #[must_use]
    pub fn artifact_file(self) -> &'static str {
        match self {
            Task::Diabetes => "diabetes_model.json",
            Task::HeartDisease => "heart_disease_model.json",
            Task::Parkinsons => "parkinsons_model.json",
        }
    }

    /// Menu entry text.
    #[must_use]
    pub fn menu_label(self) -> &'static str {
        match self {
            Task::Diabetes => "Diabetes Prediction",
            Task::HeartDisease => "Heart Disease Prediction",
            Task::Parkinsons => "Parkinson's Prediction",
        }
    }

    /// Page heading shown above the form.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Task::Diabetes => "Diabetes Prediction",
            Task::HeartDisease => "Heart Disease Prediction",
            Task::Parkinsons => "Parkinson's Disease Prediction",
        }
    }

    /// One-line instruction shown under the heading.
    #[must_use]
    pub fn intro(self) -> &'static str {
        match self {
            Task::Diabetes => "Enter the following details to predict diabetes risk.",
            Task::HeartDisease => "Enter the following details to predict heart disease risk.",
            Task::Parkinsons => "Enter the following details to predict Parkinson's disease risk.",
        }
    }

    /// Caption of the submit action.
    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Task::Diabetes => "Predict Diabetes",
            Task::HeartDisease => "Predict Heart Disease",
            Task::Parkinsons => "Predict Parkinson's",
        }
    }

    /// Resolves a menu choice: a 1-based number, a task key, or a menu label.
    #[must_use]
    pub fn from_choice(input: &str) -> Option<Task> {
        let choice = input.trim();
        if let Ok(n) = choice.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Task::ALL.get(i).copied());
        }
        let normalized = choice.to_lowercase().replace('-', "_");
        Task::ALL.into_iter().find(|task| {
            task.key() == normalized || task.menu_label().eq_ignore_ascii_case(choice)
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

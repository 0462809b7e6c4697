//! Error types, one enum per concern.

use std::path::PathBuf;

use crate::task::Task;

/// A raw form value could not be turned into a feature.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("{field}: {raw:?} is not a number")]
    InvalidNumber { field: &'static str, raw: String },

    #[error("unknown field {key:?}")]
    UnknownField { key: String },

    #[error("too many values: form has {expected} fields, got {actual}")]
    TooManyValues { expected: usize, actual: usize },
}

/// The selected model could not produce an outcome for a submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("{task} model expects {expected} features, got {actual}")]
    DimensionMismatch { task: Task, expected: usize, actual: usize },

    #[error("{task} model rejected the input: {reason}")]
    Rejected { task: Task, reason: String },

    #[error("{task} model returned no prediction")]
    NoOutcome { task: Task },
}

/// A model artifact could not be loaded at startup.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("{task} model artifact not found at {}", .path.display())]
    Missing { task: Task, path: PathBuf },

    #[error("failed to read {task} model artifact {}: {reason}", .path.display())]
    Unreadable { task: Task, path: PathBuf, reason: String },

    #[error("{task} model artifact {} is corrupt: {reason}", .path.display())]
    Corrupt { task: Task, path: PathBuf, reason: String },

    #[error(
        "{task} model artifact {} takes {actual} features, form has {expected}",
        .path.display()
    )]
    FeatureCount { task: Task, path: PathBuf, expected: usize, actual: usize },
}

/// The configuration file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("failed to parse config {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("no models directory configured and the install directory is unknown")]
    NoModelsDir,
}

/// A single form submission failed; the process keeps serving.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),

    #[error("prediction failed: {0}")]
    Inference(#[from] InferenceError),
}

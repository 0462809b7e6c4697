//! Predictor: one feature vector in, one outcome out.

use log::debug;

use crate::error::InferenceError;
use crate::ports::model::{FeatureVector, Outcome};
use crate::registry::ModelRegistry;
use crate::task::Task;

/// Runs a single inference for `task`.
///
/// The vector is sent as a one-row batch to the task's handle and the first
/// outcome is returned. Nothing is cached or retried.
///
/// # Errors
///
/// Returns [`InferenceError::DimensionMismatch`] without calling the model
/// if the vector width differs from the task's field count,
/// [`InferenceError::Rejected`] if the model fails, and
/// [`InferenceError::NoOutcome`] if it returns an empty result.
pub fn predict(
    registry: &ModelRegistry,
    task: Task,
    features: &FeatureVector,
) -> Result<Outcome, InferenceError> {
    let expected = task.field_count();
    if features.len() != expected {
        return Err(InferenceError::DimensionMismatch { task, expected, actual: features.len() });
    }

    let handle = registry.handle(task);
    let outcomes = handle
        .predict(std::slice::from_ref(features))
        .map_err(|e| InferenceError::Rejected { task, reason: e.to_string() })?;
    let outcome = outcomes.first().copied().ok_or(InferenceError::NoOutcome { task })?;

    debug!("{task} model returned class {}", outcome.0);
    Ok(outcome)
}

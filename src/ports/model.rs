//! Model port: the inference boundary.

use serde::Serialize;

/// Ordered numeric inputs for one submission.
///
/// Position `i` holds the value of field `i` of the active task's form.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Wraps already-ordered values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the vector holds no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the values in order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Raw class code produced by a model.
///
/// Carries no meaning on its own; non-zero codes are truthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Outcome(pub i64);

impl Outcome {
    /// Returns `true` for any non-zero class code.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 != 0
    }
}

/// A loaded, read-only classifier.
///
/// Handles are shared by reference for the whole process lifetime and must
/// not change between calls: the same row always yields the same outcome.
pub trait ModelHandle: Send + Sync {
    /// Predicts one outcome per row of `batch`, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a row has the wrong width or cannot be scored.
    fn predict(
        &self,
        batch: &[FeatureVector],
    ) -> Result<Vec<Outcome>, Box<dyn std::error::Error + Send + Sync>>;

    /// Number of features each row must have.
    fn n_features(&self) -> usize;
}

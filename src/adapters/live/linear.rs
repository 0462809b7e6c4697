//! Linear classifiers deserialized from JSON model artifacts.
//!
//! An artifact looks like:
//!
//! ```json
//! {
//!   "kind": "logistic_regression",
//!   "coefficients": [0.12, 0.03, -0.01],
//!   "intercept": -5.9,
//!   "scaler": { "mean": [3.8, 120.9, 69.1], "scale": [3.4, 31.9, 19.3] },
//!   "classes": [0, 1]
//! }
//! ```
//!
//! Inputs are standardized with the optional scaler, scored as
//! `w·x + b`, and mapped to `classes[1]` when the score is strictly above
//! the threshold, `classes[0]` otherwise.

use serde::Deserialize;

use crate::ports::model::{FeatureVector, ModelHandle, Outcome};

/// How the linear score is turned into a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearKind {
    /// Sigmoid of the score compared against a probability threshold.
    LogisticRegression,
    /// Raw score compared against a margin threshold.
    LinearSvc,
}

impl LinearKind {
    fn default_threshold(self) -> f64 {
        match self {
            LinearKind::LogisticRegression => 0.5,
            LinearKind::LinearSvc => 0.0,
        }
    }
}

/// Per-feature standardization fitted alongside the model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StandardScaler {
    /// Feature means subtracted before scoring.
    pub mean: Vec<f64>,
    /// Feature scales divided out after centering.
    pub scale: Vec<f64>,
}

/// On-disk representation of a linear model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearArtifact {
    /// Decision rule.
    pub kind: LinearKind,
    /// One weight per feature, in form order.
    pub coefficients: Vec<f64>,
    /// Bias term.
    pub intercept: f64,
    /// Optional standardization applied to inputs first.
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    /// Decision threshold; defaults to 0.5 for logistic and 0.0 for SVC.
    #[serde(default)]
    pub threshold: Option<f64>,
    /// Class codes for the negative and positive decision.
    #[serde(default = "default_classes")]
    pub classes: [i64; 2],
}

fn default_classes() -> [i64; 2] {
    [0, 1]
}

/// A validated linear classifier ready to serve predictions.
#[derive(Debug, Clone)]
pub struct LinearModel {
    kind: LinearKind,
    coefficients: Vec<f64>,
    intercept: f64,
    scaler: Option<StandardScaler>,
    threshold: f64,
    classes: [i64; 2],
}

impl LinearModel {
    /// Parses and validates a JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the artifact is
    /// internally inconsistent.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let artifact: LinearArtifact =
            serde_json::from_str(json).map_err(|e| format!("invalid model JSON: {e}"))?;
        Self::from_artifact(artifact)
    }

    /// Validates an artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no coefficients, if any parameter is
    /// not finite, if the scaler width differs from the coefficient count,
    /// or if a scale entry is zero.
    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, String> {
        let n = artifact.coefficients.len();
        if n == 0 {
            return Err("model has no coefficients".to_string());
        }
        if !artifact.coefficients.iter().all(|w| w.is_finite()) || !artifact.intercept.is_finite() {
            return Err("model parameters must be finite".to_string());
        }
        if let Some(scaler) = &artifact.scaler {
            if scaler.mean.len() != n || scaler.scale.len() != n {
                return Err(format!(
                    "scaler has {} means and {} scales for {n} coefficients",
                    scaler.mean.len(),
                    scaler.scale.len()
                ));
            }
            if scaler.scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
                return Err("scaler scale entries must be finite and non-zero".to_string());
            }
        }
        let threshold = artifact.threshold.unwrap_or_else(|| artifact.kind.default_threshold());
        if !threshold.is_finite() {
            return Err("threshold must be finite".to_string());
        }

        Ok(Self {
            kind: artifact.kind,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
            scaler: artifact.scaler,
            threshold,
            classes: artifact.classes,
        })
    }

    /// Decision rule in use.
    #[must_use]
    pub fn kind(&self) -> LinearKind {
        self.kind
    }

    fn score(&self, row: &[f64]) -> f64 {
        let linear: f64 = match &self.scaler {
            Some(scaler) => row
                .iter()
                .zip(&self.coefficients)
                .zip(scaler.mean.iter().zip(&scaler.scale))
                .map(|((x, w), (mean, scale))| w * (x - mean) / scale)
                .sum(),
            None => row.iter().zip(&self.coefficients).map(|(x, w)| w * x).sum(),
        };
        let z = linear + self.intercept;
        match self.kind {
            LinearKind::LogisticRegression => 1.0 / (1.0 + (-z).exp()),
            LinearKind::LinearSvc => z,
        }
    }

    fn classify(&self, row: &FeatureVector) -> Result<Outcome, String> {
        let values = row.as_slice();
        if values.len() != self.coefficients.len() {
            return Err(format!(
                "expected {} features, got {}",
                self.coefficients.len(),
                values.len()
            ));
        }
        if let Some(i) = values.iter().position(|x| !x.is_finite()) {
            return Err(format!("feature {i} is not a finite number"));
        }
        let positive = self.score(values) > self.threshold;
        Ok(Outcome(self.classes[usize::from(positive)]))
    }
}

impl ModelHandle for LinearModel {
    fn predict(
        &self,
        batch: &[FeatureVector],
    ) -> Result<Vec<Outcome>, Box<dyn std::error::Error + Send + Sync>> {
        batch.iter().map(|row| self.classify(row).map_err(Into::into)).collect()
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}

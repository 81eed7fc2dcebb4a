//! Linear classifier artifact
//!
//! Binary decision function over TF-IDF features, trained externally and
//! loaded at startup. Class 1 marks the positive (phishing) class by the
//! trainer's convention.

use serde::{Deserialize, Serialize};

use crate::error::{PhishError, Result};

/// Binary linear classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// One weight per feature column.
    weights: Vec<f64>,
    /// Decision bias (intercept).
    bias: f64,
}

impl LinearClassifier {
    /// Create a classifier from trained weights and bias.
    pub fn new(weights: Vec<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Raw decision score for a feature vector.
    pub fn decision_score(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(PhishError::Inference(format!(
                "feature vector has {} dimensions, classifier expects {}",
                features.len(),
                self.weights.len()
            )));
        }

        let dot: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();

        Ok(dot + self.bias)
    }

    /// Predicted class: 1 for a positive decision score, 0 otherwise.
    pub fn predict(&self, features: &[f64]) -> Result<u8> {
        let score = self.decision_score(features)?;
        Ok(if score > 0.0 { 1 } else { 0 })
    }

    /// Number of feature columns the classifier expects.
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }
}

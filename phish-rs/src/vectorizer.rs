//! TF-IDF vectorizer artifact
//!
//! Inference-side counterpart of the vectorizer fitted by the external
//! training pipeline. Loaded from a serialized artifact, never refitted here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{PhishError, Result};

/// TF-IDF vectorizer for text feature extraction.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Vocabulary: token -> feature column mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature column.
    idf: Vec<f64>,
}

impl std::fmt::Debug for TfidfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfidfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_features", &self.idf.len())
            .finish()
    }
}

impl TfidfVectorizer {
    /// Create a vectorizer from an already-fitted vocabulary and IDF table.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Self {
        Self { vocabulary, idf }
    }

    /// Transform a document into a TF-IDF feature vector.
    ///
    /// Tokens outside the fitted vocabulary are ignored; an empty document
    /// yields the zero vector. A vocabulary index past the IDF table marks a
    /// malformed artifact and is reported as an inference error.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = Self::tokenize(document);
        let mut features = vec![0.0; self.idf.len()];

        // Count term frequencies over the fitted vocabulary
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                let slot = features.get_mut(idx).ok_or_else(|| {
                    PhishError::Inference(format!(
                        "vocabulary index {} out of range for {} IDF entries",
                        idx,
                        self.idf.len()
                    ))
                })?;
                *slot += 1.0;
            }
        }

        // Normalize by document length
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut features {
                *count /= doc_length;
            }
        }

        // Apply IDF
        for (value, idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        Ok(features)
    }

    /// Lowercase tokenization on non-alphanumeric boundaries.
    fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Number of feature columns produced by [`transform`](Self::transform).
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

//! Inference context: artifact loading and classification
//!
//! Owns the classifier/vectorizer pair loaded once at startup. The pair is
//! loaded together or not at all; a context never holds a single artifact.

use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

use crate::classifier::LinearClassifier;
use crate::config::ModelConfig;
use crate::error::{PhishError, Result};
use crate::vectorizer::TfidfVectorizer;

/// Prediction label for an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    Phishing,
    Legitimate,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Phishing => "Phishing",
            Label::Legitimate => "Legitimate",
        }
    }
}

/// Loaded classifier/vectorizer pair.
#[derive(Debug)]
pub struct InferenceContext {
    vectorizer: TfidfVectorizer,
    classifier: LinearClassifier,
}

impl InferenceContext {
    /// Create a context from already-loaded artifacts.
    pub fn new(vectorizer: TfidfVectorizer, classifier: LinearClassifier) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }

    /// Load both artifacts from their configured paths.
    ///
    /// No partial state escapes: either both artifacts deserialize and a
    /// usable context is returned, or the caller is left with nothing.
    pub fn load(config: &ModelConfig) -> Result<Self> {
        let classifier_path = Path::new(&config.classifier_path);
        if !classifier_path.exists() {
            return Err(PhishError::ArtifactMissing(config.classifier_path.clone()));
        }

        let vectorizer_path = Path::new(&config.vectorizer_path);
        if !vectorizer_path.exists() {
            return Err(PhishError::ArtifactMissing(config.vectorizer_path.clone()));
        }

        let classifier: LinearClassifier = read_artifact(classifier_path)?;
        info!("Classifier loaded from {}", config.classifier_path);

        let vectorizer: TfidfVectorizer = read_artifact(vectorizer_path)?;
        info!("Vectorizer loaded from {}", config.vectorizer_path);

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Classify raw email text.
    ///
    /// Class 1 maps to [`Label::Phishing`], any other class to
    /// [`Label::Legitimate`] -- the fixed convention of the artifact pair.
    pub fn classify(&self, text: &str) -> Result<Label> {
        let features = self.vectorizer.transform(text)?;
        let class = self.classifier.predict(&features)?;

        Ok(if class == 1 {
            Label::Phishing
        } else {
            Label::Legitimate
        })
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| PhishError::ArtifactFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fitted_pair() -> (TfidfVectorizer, LinearClassifier) {
        let vocabulary: HashMap<String, usize> = [
            ("suspended".to_string(), 0),
            ("click".to_string(), 1),
            ("meeting".to_string(), 2),
        ]
        .into_iter()
        .collect();

        let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0, 1.0, 1.0]);
        let classifier = LinearClassifier::new(vec![4.0, 4.0, -4.0], -0.5);
        (vectorizer, classifier)
    }

    fn write_artifacts(dir: &Path) -> ModelConfig {
        let (vectorizer, classifier) = fitted_pair();

        let classifier_path = dir.join("phishing_model.json");
        let vectorizer_path = dir.join("tfidf_vectorizer.json");

        std::fs::write(
            &classifier_path,
            serde_json::to_string(&classifier).unwrap(),
        )
        .unwrap();
        std::fs::write(
            &vectorizer_path,
            serde_json::to_string(&vectorizer).unwrap(),
        )
        .unwrap();

        ModelConfig {
            classifier_path: classifier_path.to_string_lossy().into_owned(),
            vectorizer_path: vectorizer_path.to_string_lossy().into_owned(),
        }
    }

    #[test]
    fn test_load_succeeds_with_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_artifacts(dir.path());

        let context = InferenceContext::load(&config).unwrap();
        assert_eq!(
            context.classify("account suspended click here").unwrap(),
            Label::Phishing
        );
    }

    #[test]
    fn test_load_fails_when_classifier_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = write_artifacts(dir.path());
        config.classifier_path = dir.path().join("absent.json").to_string_lossy().into_owned();

        let err = InferenceContext::load(&config).unwrap_err();
        match err {
            PhishError::ArtifactMissing(path) => assert!(path.ends_with("absent.json")),
            other => panic!("expected ArtifactMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_load_fails_when_vectorizer_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = write_artifacts(dir.path());
        std::fs::remove_file(&config.vectorizer_path).unwrap();
        config.vectorizer_path = dir.path().join("gone.json").to_string_lossy().into_owned();

        let err = InferenceContext::load(&config).unwrap_err();
        assert!(matches!(err, PhishError::ArtifactMissing(_)));
    }

    #[test]
    fn test_load_fails_on_corrupt_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_artifacts(dir.path());
        std::fs::write(&config.classifier_path, "{not valid json").unwrap();

        let err = InferenceContext::load(&config).unwrap_err();
        assert!(matches!(err, PhishError::ArtifactFormat(_)));
    }

    #[test]
    fn test_classify_maps_classes_to_labels() {
        let (vectorizer, classifier) = fitted_pair();
        let context = InferenceContext::new(vectorizer, classifier);

        assert_eq!(
            context
                .classify("Your account has been suspended, click here")
                .unwrap(),
            Label::Phishing
        );
        assert_eq!(
            context.classify("Lunch meeting tomorrow at noon").unwrap(),
            Label::Legitimate
        );
    }

    #[test]
    fn test_classify_surfaces_artifact_mismatch() {
        let (vectorizer, _) = fitted_pair();
        // Classifier trained on a different feature space
        let classifier = LinearClassifier::new(vec![1.0], 0.0);
        let context = InferenceContext::new(vectorizer, classifier);

        let err = context.classify("account suspended").unwrap_err();
        assert!(matches!(err, PhishError::Inference(_)));
    }

    #[test]
    fn test_label_as_str() {
        assert_eq!(Label::Phishing.as_str(), "Phishing");
        assert_eq!(Label::Legitimate.as_str(), "Legitimate");
    }
}

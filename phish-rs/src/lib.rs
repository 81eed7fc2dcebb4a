//! phish-rs: Phishing Email Detection API
//!
//! Serves a pre-trained phishing/legitimate email classifier over a small
//! HTTP API. The classifier and its TF-IDF vectorizer are produced by an
//! external training pipeline and loaded once at startup.
//!
//! # Features
//!
//! - Health endpoint reporting whether the artifact pair is loaded
//! - Prediction endpoint mapping raw email text to Phishing/Legitimate
//! - Degraded startup: missing or corrupt artifacts never abort the process
//! - Permissive CORS for browser clients
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! port = 5001
//!
//! [model]
//! classifier_path = "models/phishing_model.json"
//! vectorizer_path = "models/tfidf_vectorizer.json"
//! ```

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod inference;
pub mod vectorizer;

pub use config::Config;
pub use error::{PhishError, Result};
pub use inference::{InferenceContext, Label};

//! Configuration for phish-rs

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PhishError, Result};

/// Main service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Model artifact configuration
    #[serde(default)]
    pub model: ModelConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listening port (the PORT environment variable takes precedence)
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Model artifact configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Path to the serialized classifier
    #[serde(default = "default_classifier_path")]
    pub classifier_path: String,
    /// Path to the serialized vectorizer
    #[serde(default = "default_vectorizer_path")]
    pub vectorizer_path: String,
}

fn default_port() -> u16 {
    5001
}

fn default_classifier_path() -> String {
    "models/phishing_model.json".to_string()
}

fn default_vectorizer_path() -> String {
    "models/tfidf_vectorizer.json".to_string()
}

impl ServerConfig {
    /// Listen address bound on all interfaces
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            classifier_path: default_classifier_path(),
            vectorizer_path: default_vectorizer_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PhishError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| PhishError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Create a default development configuration
    pub fn development() -> Self {
        Self {
            server: ServerConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::development()
    }
}

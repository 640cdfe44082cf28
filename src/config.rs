//! Configuration loading and categorizer assembly.

use crate::categorize::Categorizer;
use crate::categorize::openai::OpenAiClassifier;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Library configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Remote classifier configuration. With no API key the engine runs in
/// keyword-only mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// OpenAI API key. Absent means the remote path is never attempted.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for classification requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on a single classification request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the default location or fall back to
    /// environment variables.
    pub fn load_or_default() -> Self {
        if let Ok(config) = Self::load("task-triage.yaml") {
            return config;
        }

        let mut config = Self::default();

        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            if !api_key.is_empty() {
                config.classifier.api_key = Some(api_key);
            }
        }

        if let Ok(model) = std::env::var("TASK_TRIAGE_MODEL") {
            config.classifier.model = model;
        }

        if let Ok(timeout) = std::env::var("TASK_TRIAGE_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse() {
                config.classifier.timeout_secs = timeout;
            }
        }

        config
    }

    /// Select the categorization strategy once, at assembly time: remote-
    /// backed when an API key is configured, keyword-only otherwise.
    pub fn build_categorizer(&self) -> Result<Categorizer> {
        match &self.classifier.api_key {
            Some(api_key) => {
                let classifier = OpenAiClassifier::new(
                    api_key.clone(),
                    self.classifier.model.clone(),
                    Duration::from_secs(self.classifier.timeout_secs),
                )?;
                Ok(Categorizer::with_remote(Box::new(classifier)))
            }
            None => Ok(Categorizer::absent()),
        }
    }
}

//! Hybrid categorization: remote classifier with deterministic local fallback.

pub mod lexicon;
pub mod openai;

use crate::types::Category;
use openai::RemoteClassifier;
use tracing::{debug, warn};

/// Produces exactly one category for a task.
///
/// Resolution order: if a remote classifier is configured, make a single
/// attempt and accept its answer only when it whitelist-validates; on any
/// failure or invalid answer, fall back to keyword scoring. `categorize`
/// never fails outward.
pub struct Categorizer {
    remote: Option<Box<dyn RemoteClassifier + Send + Sync>>,
}

impl Categorizer {
    /// Engine with no remote backend; every call uses keyword scoring.
    pub fn absent() -> Self {
        Self { remote: None }
    }

    /// Engine that tries the given remote classifier first.
    pub fn with_remote(remote: Box<dyn RemoteClassifier + Send + Sync>) -> Self {
        Self {
            remote: Some(remote),
        }
    }

    /// Whether a remote classifier is configured. Says nothing about
    /// reachability.
    pub fn is_available(&self) -> bool {
        self.remote.is_some()
    }

    /// Categorize a task from its description and optional title.
    pub async fn categorize(&self, description: &str, title: Option<&str>) -> Category {
        let text = match title {
            Some(title) => format!("{}: {}", title, description),
            None => description.to_string(),
        };

        if let Some(remote) = &self.remote {
            match remote.classify(&text).await {
                Ok(answer) => {
                    let normalized = answer.trim().to_lowercase();
                    match normalized.parse::<Category>() {
                        Ok(category) => {
                            debug!(%category, "remote classifier answer accepted");
                            return category;
                        }
                        Err(_) => {
                            warn!(
                                answer = %normalized,
                                "remote classifier answered outside the whitelist, \
                                 falling back to keyword scoring"
                            );
                        }
                    }
                }
                Err(err) => {
                    warn!(error = %err, "remote classification failed, falling back to keyword scoring");
                }
            }
        }

        lexicon::score_keywords(&text)
    }
}

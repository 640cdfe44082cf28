//! OpenAI-backed remote classifier.

use crate::error::{ClassifyError, ClassifyResult};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI chat completions endpoint.
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Fixed instruction constraining answers to the nine category names.
const SYSTEM_PROMPT: &str = "You are a task categorization assistant. \
    Categorize tasks into one of these categories: work, personal, shopping, \
    finance, health, education, home, entertainment, or general. Respond \
    with only the category name in lowercase.";

/// A category name is one short word; anything longer is already invalid.
const MAX_ANSWER_TOKENS: u32 = 10;

const TEMPERATURE: f32 = 0.3;

/// A remote service that guesses a category for a piece of task text.
///
/// Implementations return the service's raw answer; whitelist validation is
/// the engine's job. Exactly one attempt is made per call, no retries.
#[async_trait]
pub trait RemoteClassifier {
    async fn classify(&self, text: &str) -> ClassifyResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiError,
}

/// Remote classifier backed by the OpenAI chat completions API.
pub struct OpenAiClassifier {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClassifier {
    /// Build a classifier with a bounded request timeout. A hung service
    /// surfaces as `ClassifyError::Http`, same as any other transport
    /// failure.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model,
            base_url: OPENAI_API_URL.to_string(),
        })
    }

    /// Point requests at a different endpoint (proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl RemoteClassifier for OpenAiClassifier {
    async fn classify(&self, text: &str) -> ClassifyResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Categorize this task: \"{}\"", text),
                },
            ],
            max_tokens: MAX_ANSWER_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ClassifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| ClassifyError::MalformedResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ClassifyError::MalformedResponse("empty completion".to_string()))
    }
}

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Generation limit sent with every completion request.
pub const MAX_TOKENS: u32 = 200;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("failed to reach completions API: {0}")]
    Network(#[source] reqwest::Error),

    #[error("completions API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("completions API returned an unreadable body: {0}")]
    MalformedBody(#[source] reqwest::Error),

    #[error("completions API returned no choices")]
    NoChoices,
}

impl CompletionError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(err) | Self::MalformedBody(err) => err.status(),
            Self::NoChoices => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'a Value>,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub text: String,
}

impl CompletionResponse {
    pub fn into_first_text(self) -> Result<String, CompletionError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or(CompletionError::NoChoices)
    }
}

/// Thin client over a text-completion endpoint. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct CompletionsClient {
    http: Client,
    url: String,
    api_key: String,
    model: Option<String>,
}

impl CompletionsClient {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>, model: Option<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
            api_key: api_key.into(),
            model,
        }
    }

    pub fn request_for<'a>(&'a self, prompt: Option<&'a Value>) -> CompletionRequest<'a> {
        CompletionRequest {
            model: self.model.as_deref(),
            prompt,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Sends one completion request and returns the first candidate's text.
    pub async fn complete(&self, prompt: Option<&Value>) -> Result<String, CompletionError> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&self.request_for(prompt))
            .send()
            .await
            .map_err(CompletionError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(CompletionError::Status { status, body });
        }

        response
            .json::<CompletionResponse>()
            .await
            .map_err(CompletionError::MalformedBody)?
            .into_first_text()
    }
}

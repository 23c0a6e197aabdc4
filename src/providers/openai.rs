// OpenAI-compatible chat completions provider
//
// Works for Groq, OpenAI and anything else exposing the
// `/chat/completions` request/response format.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::{CompletionProvider, NO_FEEDBACK_FALLBACK};
use crate::config::ProviderConfig;
use crate::prompt::EvaluationRequest;

/// OpenAI-compatible provider
///
/// The credential and endpoint are fixed at construction; nothing is read
/// from the environment per request.
#[derive(Clone)]
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    provider_name: String,
}

impl OpenAIProvider {
    /// Create a provider from the `[provider]` config section
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        Self::new(
            config.api_key.clone(),
            config.endpoint.clone(),
            config.model.clone(),
            config.name.clone(),
        )
    }

    fn new(api_key: String, endpoint: String, model: String, provider_name: String) -> Result<Self> {
        // No request timeout: the call resolves or fails on the transport's terms
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            endpoint,
            model,
            provider_name,
        })
    }

    /// Convert an EvaluationRequest to the chat completions wire format
    fn to_openai_request<'a>(&'a self, request: &'a EvaluationRequest) -> OpenAIRequest<'a> {
        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };

        OpenAIRequest {
            model,
            messages: [
                OpenAIMessage {
                    role: "system",
                    content: &request.system,
                },
                OpenAIMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

/// Pull `choices[0].message.content`, falling back when any level is missing,
/// the wrong type, or empty.
fn first_choice_text(response: &Value) -> String {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(NO_FEEDBACK_FALLBACK)
        .to_string()
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
    async fn complete(&self, request: &EvaluationRequest) -> Result<String> {
        let openai_request = self.to_openai_request(request);

        tracing::debug!(
            provider = %self.provider_name,
            model = openai_request.model,
            max_tokens = openai_request.max_tokens,
            "Sending evaluation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&openai_request)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.provider_name))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "{} API request failed\n\nStatus: {}\nBody: {}",
                self.provider_name,
                status,
                error_body
            );
        }

        let openai_response: Value = response
            .json()
            .await
            .with_context(|| format!("Failed to read {} API response", self.provider_name))?;

        let text = first_choice_text(&openai_response);
        tracing::debug!(chars = text.len(), "Received evaluation text");

        Ok(text)
    }

    fn name(&self) -> &str {
        &self.provider_name
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Chat completions wire types

#[derive(Debug, Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: [OpenAIMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage<'a> {
    role: &'static str,
    content: &'a str,
}

// Completion API providers
//
// The evaluator only needs "prompt in, text out". Keeping that behind a
// trait lets the server run against the real OpenAI-compatible endpoint in
// production and a canned provider in tests.

use anyhow::Result;
use async_trait::async_trait;

use crate::prompt::EvaluationRequest;

pub mod openai;

pub use openai::OpenAIProvider;

/// Text returned when the API answers successfully but carries no message content.
pub const NO_FEEDBACK_FALLBACK: &str = "No feedback received.";

/// Trait for chat-completion backends
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one evaluation request and return the raw text of the first choice.
    ///
    /// A successful response without usable content yields
    /// [`NO_FEEDBACK_FALLBACK`] rather than an error. Transport failures and
    /// non-2xx statuses are errors.
    async fn complete(&self, request: &EvaluationRequest) -> Result<String>;

    /// Provider name for logs (e.g. "groq")
    fn name(&self) -> &str;

    /// Model identifier sent with every request
    fn model(&self) -> &str;
}

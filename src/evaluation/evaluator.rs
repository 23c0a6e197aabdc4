// Evaluation orchestrator
//
// One pipeline for every template variant:
// parse -> extract -> build prompt -> complete -> normalize.
// The first failure short-circuits; there is no partial result.

use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use super::normalizer::normalize;
use crate::errors::EvalError;
use crate::prompt::{EvaluationRequest, ResponseShape, TemplateMode, TemplateSpec};
use crate::providers::CompletionProvider;
use crate::transcript::{extract_qa_pairs, parse_transcript, QaPair};

/// Stateless evaluator shared by all requests.
///
/// Holds only the provider handle; every call works on its own data.
#[derive(Clone)]
pub struct Evaluator {
    provider: Arc<dyn CompletionProvider>,
}

impl Evaluator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &Arc<dyn CompletionProvider> {
        &self.provider
    }

    /// Run the whole pipeline on a raw request body.
    pub async fn evaluate(&self, body: &[u8], mode: TemplateMode) -> Result<Value, EvalError> {
        let span = tracing::info_span!("evaluation", id = %Uuid::new_v4(), %mode);

        async move {
            let turns = parse_transcript(body)?;
            let pairs = extract_qa_pairs(&turns)?;
            self.evaluate_pairs(&pairs, mode).await
        }
        .instrument(span)
        .await
    }

    /// Evaluate already-extracted pairs.
    pub async fn evaluate_pairs(
        &self,
        pairs: &[QaPair],
        mode: TemplateMode,
    ) -> Result<Value, EvalError> {
        let spec = TemplateSpec::for_mode(mode);
        let request = EvaluationRequest::for_mode(self.provider.model(), mode, pairs);

        tracing::info!(
            pairs = pairs.len(),
            provider = self.provider.name(),
            "Requesting evaluation"
        );

        let raw = self
            .provider
            .complete(&request)
            .await
            .map_err(EvalError::Upstream)?;

        let value = normalize(spec.shape, &raw)?;

        if spec.shape == ResponseShape::Detailed {
            check_insight_count(&value, pairs.len());
        }

        tracing::info!("Evaluation complete");
        Ok(value)
    }
}

/// The detailed template asks for one insight per pair. A mismatch is
/// logged, not rejected: the model's reply is still returned.
fn check_insight_count(value: &Value, expected: usize) {
    let got = value
        .get("perAnswerInsights")
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0);

    if got != expected {
        tracing::warn!(expected, got, "Model returned a different number of per-answer insights");
    }
}

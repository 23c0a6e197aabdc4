// Prompt rendering
//
// Pure string rendering over the extracted pairs. No validation of content.

use serde::Serialize;
use std::fmt::Write;

use super::mode::TemplateMode;
use super::templates::{TemplateSpec, EVALUATION_TEMPERATURE};
use crate::transcript::QaPair;

/// Render the instruction header followed by every pair, numbered from 1.
pub fn build_prompt(spec: &TemplateSpec, pairs: &[QaPair]) -> String {
    let mut prompt = String::from(spec.instructions);

    for (idx, pair) in pairs.iter().enumerate() {
        let n = idx + 1;
        // Writing into a String never fails
        let _ = write!(
            prompt,
            "Question {n}: {}\nAnswer {n}: {}\n\n",
            pair.question, pair.answer
        );
    }

    prompt
}

/// Everything the completion API needs for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl EvaluationRequest {
    pub fn for_mode(model: impl Into<String>, mode: TemplateMode, pairs: &[QaPair]) -> Self {
        let spec = TemplateSpec::for_mode(mode);
        Self {
            model: model.into(),
            system: spec.system_persona.to_string(),
            prompt: build_prompt(spec, pairs),
            temperature: EVALUATION_TEMPERATURE,
            max_tokens: spec.max_tokens,
        }
    }
}

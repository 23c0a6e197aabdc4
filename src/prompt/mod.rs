// Prompt construction
//
// Turns extracted Q&A pairs into the evaluation request for one of the
// fixed template variants.

mod builder;
mod mode;
mod templates;

pub use builder::{build_prompt, EvaluationRequest};
pub use mode::TemplateMode;
pub use templates::{
    ResponseShape, TemplateSpec, DETAILED_MAX_TOKENS, EVALUATION_TEMPERATURE, EVALUATOR_PERSONA,
    SHORT_MAX_TOKENS,
};

// Fixed evaluation templates
//
// One `TemplateSpec` per mode. The orchestrator only ever sees the spec, so
// adding a variant means adding an entry here and a shape check in the
// normalizer.

use super::mode::TemplateMode;

/// System message establishing the evaluator persona.
pub const EVALUATOR_PERSONA: &str = "You are a professional interviewer and evaluator.";

/// Output budget for the short variants.
pub const SHORT_MAX_TOKENS: u32 = 1024;

/// Output budget for the detailed variant.
pub const DETAILED_MAX_TOKENS: u32 = 2048;

/// Sampling temperature shared by all variants.
pub const EVALUATION_TEMPERATURE: f32 = 0.3;

/// What the model's reply must decode to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Any non-empty text.
    Text,
    /// `{ overallScore, feedback }`
    Scored,
    /// `{ perAnswerInsights, technicalMistakes, ..., overallScore }`
    Detailed,
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    pub mode: TemplateMode,
    pub system_persona: &'static str,
    pub instructions: &'static str,
    pub max_tokens: u32,
    pub shape: ResponseShape,
}

const NARRATIVE_INSTRUCTIONS: &str = "You are an expert interview evaluator. Given the following \
interview questions and candidate answers, provide detailed feedback on how well the candidate \
responded. Consider clarity, relevance, confidence, and areas for improvement.\n\n";

const SCORED_INSTRUCTIONS: &str = "You are an expert interview evaluator. Given the following \
interview questions and candidate answers, rate the candidate's overall performance on a scale \
of 1 to 10 and give concise feedback covering clarity, relevance, confidence, and areas for \
improvement.\n\
Respond ONLY with a JSON object in exactly this format, with no extra text:\n\
{\"overallScore\": <number from 1 to 10>, \"feedback\": \"<string>\"}\n\n";

const DETAILED_INSTRUCTIONS: &str = "You are an expert interview evaluator. Given the following \
interview questions and candidate answers, analyse every answer individually and then the \
interview as a whole.\n\
Respond ONLY with a JSON object in exactly this format, with no extra text:\n\
{\n\
  \"perAnswerInsights\": [{\"question\": \"<question>\", \"answer\": \"<answer>\", \"insight\": \"<analysis of this answer>\"}],\n\
  \"technicalMistakes\": [\"<at least 2 entries>\"],\n\
  \"communicationMistakes\": [\"<at least 2 entries>\"],\n\
  \"strengths\": [\"<at least 3 entries>\"],\n\
  \"areasToImprove\": [\"<at least 3 entries>\"],\n\
  \"recommendations\": [\"<at least 4 entries>\"],\n\
  \"overallScore\": <number from 1 to 10>\n\
}\n\
Include exactly one perAnswerInsights entry per question, in the order given.\n\n";

static NARRATIVE: TemplateSpec = TemplateSpec {
    mode: TemplateMode::Narrative,
    system_persona: EVALUATOR_PERSONA,
    instructions: NARRATIVE_INSTRUCTIONS,
    max_tokens: SHORT_MAX_TOKENS,
    shape: ResponseShape::Text,
};

static SCORED: TemplateSpec = TemplateSpec {
    mode: TemplateMode::Scored,
    system_persona: EVALUATOR_PERSONA,
    instructions: SCORED_INSTRUCTIONS,
    max_tokens: SHORT_MAX_TOKENS,
    shape: ResponseShape::Scored,
};

static DETAILED: TemplateSpec = TemplateSpec {
    mode: TemplateMode::Detailed,
    system_persona: EVALUATOR_PERSONA,
    instructions: DETAILED_INSTRUCTIONS,
    max_tokens: DETAILED_MAX_TOKENS,
    shape: ResponseShape::Detailed,
};

impl TemplateSpec {
    pub fn for_mode(mode: TemplateMode) -> &'static TemplateSpec {
        match mode {
            TemplateMode::Narrative => &NARRATIVE,
            TemplateMode::Scored => &SCORED,
            TemplateMode::Detailed => &DETAILED,
        }
    }
}

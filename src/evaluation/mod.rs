// Evaluation pipeline
//
// Orchestration plus the normalization of model replies into the
// structure returned to the caller.

mod evaluator;
mod normalizer;
mod shapes;

pub use evaluator::Evaluator;
pub use normalizer::{normalize, strip_fences};
pub use shapes::{AnswerInsight, DetailedEvaluation, ScoredEvaluation};

// Transcript handling
//
// Decodes the inbound chat transcript and pairs interviewer questions with
// the candidate answers that immediately follow them.

mod extractor;
mod parser;
mod types;

pub use extractor::extract_qa_pairs;
pub use parser::parse_transcript;
pub use types::{ChatTurn, QaPair, Role};

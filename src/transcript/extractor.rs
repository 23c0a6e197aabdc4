// Q&A pair extraction
//
// Positional, non-consuming scan over adjacent turns. A turn that answered
// one pair is still examined as a possible question at the next index.

use super::types::{ChatTurn, QaPair, Role};
use crate::errors::EvalError;

/// Interviewer turns containing this marker (any case) are not questions.
const ERROR_MARKER: &str = "error";

/// Pair every interviewer turn with the candidate turn directly after it.
///
/// Returns pairs in transcript order, with both sides trimmed.
/// Fails with `NoValidPairs` when nothing qualifies.
pub fn extract_qa_pairs(turns: &[ChatTurn]) -> Result<Vec<QaPair>, EvalError> {
    let pairs: Vec<QaPair> = turns
        .windows(2)
        .filter(|w| is_question(&w[0]) && w[1].role() == Role::Candidate)
        .map(|w| QaPair {
            question: w[0].content.trim().to_string(),
            answer: w[1].content.trim().to_string(),
        })
        .collect();

    if pairs.is_empty() {
        return Err(EvalError::NoValidPairs);
    }

    tracing::debug!(
        turns = turns.len(),
        pairs = pairs.len(),
        "Extracted Q&A pairs"
    );

    Ok(pairs)
}

fn is_question(turn: &ChatTurn) -> bool {
    turn.role() == Role::Interviewer && !turn.content.to_lowercase().contains(ERROR_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(sender: &str, content: &str) -> ChatTurn {
        ChatTurn::new(sender, content)
    }

    #[test]
    fn test_single_pair_trimmed() {
        let turns = vec![
            turn("Morgan", " What is your greatest strength? "),
            turn("User", " Communication. "),
        ];
        let pairs = extract_qa_pairs(&turns).unwrap();
        assert_eq!(
            pairs,
            vec![QaPair {
                question: "What is your greatest strength?".to_string(),
                answer: "Communication.".to_string(),
            }]
        );
    }

    #[test]
    fn test_error_question_excluded() {
        let turns = vec![
            turn("morgan", "Tell me about X"),
            turn("user", "X is a framework I used."),
            turn("morgan", "An ERROR occurred, skip"),
            turn("user", "N/A"),
        ];
        let pairs = extract_qa_pairs(&turns).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].question, "Tell me about X");
        assert_eq!(pairs[0].answer, "X is a framework I used.");
    }

    #[test]
    fn test_error_marker_matches_inside_words() {
        // Substring match, so "errors" counts
        let turns = vec![
            turn("morgan", "How do you handle errors?"),
            turn("user", "Carefully."),
        ];
        assert!(matches!(
            extract_qa_pairs(&turns),
            Err(EvalError::NoValidPairs)
        ));
    }

    #[test]
    fn test_preserves_order() {
        let turns = vec![
            turn("morgan", "Q1"),
            turn("user", "A1"),
            turn("morgan", "Q2"),
            turn("user", "A2"),
            turn("morgan", "Q3"),
            turn("user", "A3"),
        ];
        let questions: Vec<String> = extract_qa_pairs(&turns)
            .unwrap()
            .into_iter()
            .map(|p| p.question)
            .collect();
        assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
    }

    #[test]
    fn test_consecutive_interviewer_turns_only_last_pairs() {
        let turns = vec![
            turn("morgan", "Hello, welcome."),
            turn("morgan", "First question?"),
            turn("user", "Answer."),
        ];
        let pairs = extract_qa_pairs(&turns).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].question, "First question?");
    }

    #[test]
    fn test_unanswered_trailing_question_ignored() {
        let turns = vec![
            turn("morgan", "Q1"),
            turn("user", "A1"),
            turn("morgan", "Any questions for us?"),
        ];
        assert_eq!(extract_qa_pairs(&turns).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_senders_never_pair() {
        let turns = vec![
            turn("system", "Q1"),
            turn("user", "A1"),
            turn("morgan", "Q2"),
            turn("assistant", "A2"),
        ];
        assert!(matches!(
            extract_qa_pairs(&turns),
            Err(EvalError::NoValidPairs)
        ));
    }

    #[test]
    fn test_single_turn_has_no_pairs() {
        let turns = vec![turn("morgan", "Q1")];
        assert!(matches!(
            extract_qa_pairs(&turns),
            Err(EvalError::NoValidPairs)
        ));
    }

    #[test]
    fn test_pair_count_bounded_by_turns() {
        let turns: Vec<ChatTurn> = (0..9)
            .map(|i| {
                if i % 2 == 0 {
                    turn("morgan", "Q")
                } else {
                    turn("user", "A")
                }
            })
            .collect();
        let pairs = extract_qa_pairs(&turns).unwrap();
        assert!(pairs.len() <= turns.len() - 1);
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let turns = vec![
            turn("Morgan", "Q1"),
            turn("user", "A1"),
            turn("MORGAN", "Q2"),
            turn("USER", "A2"),
        ];
        assert_eq!(
            extract_qa_pairs(&turns).unwrap(),
            extract_qa_pairs(&turns).unwrap()
        );
    }
}

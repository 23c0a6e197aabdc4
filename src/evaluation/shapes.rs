// Typed views of the structured evaluation replies
//
// Used to check a decoded reply has the fields its template asked for.
// Scores stay `serde_json::Number` so an integer score is not re-rendered
// as a float.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Reply to the scored template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredEvaluation {
    pub overall_score: Number,
    pub feedback: String,
}

/// Reply to the detailed template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedEvaluation {
    pub per_answer_insights: Vec<AnswerInsight>,
    pub technical_mistakes: Vec<String>,
    pub communication_mistakes: Vec<String>,
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
    pub recommendations: Vec<String>,
    pub overall_score: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerInsight {
    pub question: String,
    pub answer: String,
    pub insight: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn detailed_json() -> serde_json::Value {
        json!({
            "perAnswerInsights": [
                {"question": "Q1", "answer": "A1", "insight": "Clear and concise."}
            ],
            "technicalMistakes": ["None major", "Vague on caching"],
            "communicationMistakes": ["Rushed", "Filler words"],
            "strengths": ["Clarity", "Structure", "Examples"],
            "areasToImprove": ["Depth", "Metrics", "Pacing"],
            "recommendations": ["Practice", "Use STAR", "Quantify", "Slow down"],
            "overallScore": 7
        })
    }

    #[test]
    fn test_detailed_deserializes() {
        let parsed: DetailedEvaluation = serde_json::from_value(detailed_json()).unwrap();
        assert_eq!(parsed.per_answer_insights.len(), 1);
        assert_eq!(parsed.per_answer_insights[0].insight, "Clear and concise.");
        assert_eq!(parsed.recommendations.len(), 4);
        assert_eq!(parsed.overall_score.as_u64(), Some(7));
    }

    #[test]
    fn test_detailed_missing_field_rejected() {
        let mut value = detailed_json();
        value.as_object_mut().unwrap().remove("strengths");
        assert!(serde_json::from_value::<DetailedEvaluation>(value).is_err());
    }

    #[test]
    fn test_scored_integer_score_round_trips_as_integer() {
        let parsed: ScoredEvaluation =
            serde_json::from_str(r#"{"overallScore":8,"feedback":"Solid."}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"overallScore":8,"feedback":"Solid."}"#
        );
    }

    #[test]
    fn test_scored_string_score_rejected() {
        assert!(
            serde_json::from_str::<ScoredEvaluation>(r#"{"overallScore":"8","feedback":"x"}"#)
                .is_err()
        );
    }
}

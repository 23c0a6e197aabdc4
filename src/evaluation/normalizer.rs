// Model response normalization
//
// Models often wrap JSON in a markdown code fence. Only a fence that both
// opens and closes the text is removed; a lone leading or trailing marker
// is left in place and the text then fails to decode.

use serde::Deserialize;
use serde_json::{json, Value};

use super::shapes::{DetailedEvaluation, ScoredEvaluation};
use crate::errors::EvalError;
use crate::prompt::ResponseShape;
use crate::providers::NO_FEEDBACK_FALLBACK;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Remove one surrounding code fence and an optional `json` language tag.
///
/// Text without a complete fence comes back trimmed and otherwise unchanged.
pub fn strip_fences(raw: &str) -> &str {
    let text = raw.trim();

    if !(text.starts_with(FENCE) && text.ends_with(FENCE)) {
        return text;
    }

    // "```" alone, or two overlapping markers, leaves nothing inside
    if text.len() < FENCE.len() * 2 {
        return "";
    }

    // The tag must sit directly against the opening fence and end there
    let inner = &text[FENCE.len()..text.len() - FENCE.len()];
    match inner.strip_prefix(JSON_TAG) {
        Some(rest) if !rest.starts_with(|c: char| c.is_alphanumeric() || c == '_') => {
            rest.trim()
        }
        _ => inner.trim(),
    }
}

/// Turn the raw model text into the structure returned to the caller.
///
/// Free-text replies are wrapped as `{"evaluation": <text>}`. Structured
/// replies are fence-stripped, decoded, and checked against the expected
/// shape; the decoded value is returned as-is so extra fields survive.
pub fn normalize(shape: ResponseShape, raw: &str) -> Result<Value, EvalError> {
    match shape {
        ResponseShape::Text => {
            let text = raw.trim();
            let text = if text.is_empty() {
                NO_FEEDBACK_FALLBACK
            } else {
                text
            };
            Ok(json!({ "evaluation": text }))
        }
        ResponseShape::Scored => decode_as::<ScoredEvaluation>(raw),
        ResponseShape::Detailed => decode_as::<DetailedEvaluation>(raw),
    }
}

/// Decode into a `Value` and confirm it also fits the typed view `T`.
fn decode_as<T>(raw: &str) -> Result<Value, EvalError>
where
    T: for<'de> Deserialize<'de>,
{
    let stripped = strip_fences(raw);
    let parse_error = || EvalError::EvaluationParse {
        raw: stripped.to_string(),
    };

    let value: Value = serde_json::from_str(stripped).map_err(|e| {
        tracing::debug!("Model response is not JSON: {}", e);
        parse_error()
    })?;

    // Typed views are structs, which serde would also accept from an array
    if !value.is_object() {
        tracing::debug!("Model response is JSON but not an object");
        return Err(parse_error());
    }

    T::deserialize(&value).map_err(|e| {
        tracing::debug!("Model response has unexpected shape: {}", e);
        parse_error()
    })?;

    Ok(value)
}

// Inbound payload decoding
//
// The body must be a JSON object. `messages` may be absent or null (treated
// as empty); anything else that is not an array is rejected. Every turn must
// carry string `sender` and `content` fields - a single malformed turn fails
// the whole request rather than being skipped.

use serde_json::{Map, Value};

use super::types::ChatTurn;
use crate::errors::EvalError;

/// Decode a request body into an ordered, non-empty list of chat turns.
pub fn parse_transcript(body: &[u8]) -> Result<Vec<ChatTurn>, EvalError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| EvalError::MalformedRequest {
            reason: e.to_string(),
        })?;

    let Value::Object(mut root) = value else {
        return Err(EvalError::MalformedRequest {
            reason: "request body is not a JSON object".to_string(),
        });
    };

    let messages = match root.remove("messages") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(EvalError::MalformedRequest {
                reason: "'messages' is not an array".to_string(),
            })
        }
    };

    if messages.is_empty() {
        return Err(EvalError::NoMessages);
    }

    messages
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_turn(index, item))
        .collect()
}

fn parse_turn(index: usize, item: Value) -> Result<ChatTurn, EvalError> {
    let Value::Object(mut fields) = item else {
        return Err(EvalError::MalformedTurn {
            index,
            field: "sender",
        });
    };

    let sender = take_string(&mut fields, index, "sender")?;
    let content = take_string(&mut fields, index, "content")?;
    Ok(ChatTurn { sender, content })
}

fn take_string(
    fields: &mut Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, EvalError> {
    match fields.remove(field) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(EvalError::MalformedTurn { index, field }),
    }
}

// Error taxonomy for the evaluation pipeline
//
// Every failure a request can hit is one of these variants. The server maps
// them to an HTTP status and JSON body; nothing escapes the handler unconverted.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

pub const NO_MESSAGES_MESSAGE: &str = "No messages provided";
pub const NO_VALID_PAIRS_MESSAGE: &str = "No valid Q&A pairs found";
pub const MALFORMED_REQUEST_MESSAGE: &str = "Malformed request body";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";
pub const INVALID_TARGET_MESSAGE: &str = "Invalid request path or query string";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse model response as JSON.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Body is not a JSON object, or `messages` is not an array.
    #[error("malformed request body: {reason}")]
    MalformedRequest { reason: String },

    /// Body exceeds the configured size limit.
    #[error("request body too large: {reason}")]
    PayloadTooLarge { reason: String },

    /// Path or query string could not be decoded.
    #[error("invalid request target: {reason}")]
    InvalidTarget { reason: String },

    /// Route exists but not for this HTTP method.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Requested template mode does not exist.
    #[error("unknown evaluation mode '{mode}'")]
    UnknownMode { mode: String },

    /// `messages` is absent, null or empty.
    #[error("no messages provided")]
    NoMessages,

    /// A turn lacks a string `sender` or `content`.
    #[error("message {index} is missing a string '{field}' field")]
    MalformedTurn { index: usize, field: &'static str },

    /// No adjacent interviewer/candidate turns survived the filter.
    #[error("no valid Q&A pairs found")]
    NoValidPairs,

    /// Model text could not be decoded into the shape the template asks for.
    /// `raw` is the fence-stripped text, returned to the caller for debugging.
    #[error("failed to parse model response: {raw}")]
    EvaluationParse { raw: String },

    /// Completion API unreachable or answered with a non-2xx status.
    #[error("completion API failure: {0:#}")]
    Upstream(anyhow::Error),

    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl EvalError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest { .. }
            | Self::UnknownMode { .. }
            | Self::NoMessages
            | Self::MalformedTurn { .. }
            | Self::NoValidPairs
            | Self::InvalidTarget { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::EvaluationParse { .. } | Self::Upstream(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON body sent to the caller. Upstream and internal detail stays in the log.
    pub fn body(&self) -> Value {
        match self {
            Self::MalformedRequest { .. } => json!({ "error": MALFORMED_REQUEST_MESSAGE }),
            Self::PayloadTooLarge { .. } => json!({ "error": PAYLOAD_TOO_LARGE_MESSAGE }),
            Self::InvalidTarget { .. } => json!({ "error": INVALID_TARGET_MESSAGE }),
            Self::MethodNotAllowed => json!({ "error": METHOD_NOT_ALLOWED_MESSAGE }),
            Self::UnknownMode { mode } => json!({
                "error": format!("Unknown evaluation mode '{mode}'")
            }),
            Self::NoMessages => json!({ "error": NO_MESSAGES_MESSAGE }),
            Self::MalformedTurn { index, field } => json!({
                "error": format!("Message {index} is missing a string '{field}' field")
            }),
            Self::NoValidPairs => json!({ "error": NO_VALID_PAIRS_MESSAGE }),
            Self::EvaluationParse { raw } => json!({
                "error": PARSE_FAILURE_MESSAGE,
                "rawResponse": raw,
            }),
            Self::Upstream(_) | Self::Internal(_) => json!({ "error": INTERNAL_ERROR_MESSAGE }),
        }
    }
}

impl IntoResponse for EvalError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(e) => tracing::error!("Completion API call failed: {:#}", e),
            Self::Internal(e) => tracing::error!("Evaluation failed: {:#}", e),
            Self::EvaluationParse { raw } => {
                tracing::warn!(raw_response = %raw, "Model response was not valid JSON")
            }
            other => tracing::debug!("Rejected request: {}", other),
        }

        (self.status(), Json(self.body())).into_response()
    }
}

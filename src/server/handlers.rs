// HTTP request handlers

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::any::Any;
use std::sync::Arc;

use super::AppState;
use crate::errors::EvalError;
use crate::prompt::TemplateMode;

/// Query string for `POST /evaluate`
#[derive(Debug, Default, Deserialize)]
pub struct EvaluateQuery {
    /// Overrides the configured default template
    pub mode: Option<String>,
}

/// `POST /evaluate[?mode=...]`
///
/// Extractors are taken as `Result`s so their rejections go through the
/// same JSON error mapping as every other failure.
pub async fn handle_evaluate(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EvaluateQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => return target_error(rejection.body_text()).into_response(),
    };
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return body_error(&rejection).into_response(),
    };

    let mode = match query.mode.as_deref() {
        Some(name) => match parse_mode(name) {
            Ok(mode) => mode,
            Err(e) => return e.into_response(),
        },
        None => state.default_mode,
    };

    run_evaluation(&state, mode, &body).await
}

/// `POST /evaluate/:mode`
pub async fn handle_evaluate_mode(
    State(state): State<Arc<AppState>>,
    mode: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let Path(mode) = match mode {
        Ok(mode) => mode,
        Err(rejection) => return target_error(rejection.body_text()).into_response(),
    };
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return body_error(&rejection).into_response(),
    };

    match parse_mode(&mode) {
        Ok(mode) => run_evaluation(&state, mode, &body).await,
        Err(e) => e.into_response(),
    }
}

fn target_error(reason: String) -> EvalError {
    EvalError::InvalidTarget { reason }
}

fn body_error(rejection: &BytesRejection) -> EvalError {
    let reason = rejection.body_text();
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        EvalError::PayloadTooLarge { reason }
    } else {
        EvalError::MalformedRequest { reason }
    }
}

async fn run_evaluation(state: &AppState, mode: TemplateMode, body: &[u8]) -> Response {
    match state.evaluator.evaluate(body, mode).await {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn parse_mode(name: &str) -> Result<TemplateMode, EvalError> {
    name.parse().map_err(|_| EvalError::UnknownMode {
        mode: name.to_string(),
    })
}

/// `GET /health`
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let provider = state.evaluator.provider();
    Json(json!({
        "status": "ok",
        "provider": provider.name(),
        "model": provider.model(),
        "default_mode": state.default_mode,
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found" })),
    )
        .into_response()
}

/// Fallback for a known route hit with the wrong method
pub async fn method_not_allowed() -> Response {
    EvalError::MethodNotAllowed.into_response()
}

/// Convert a handler panic into the generic 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    EvalError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}

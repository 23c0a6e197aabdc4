// Evaluation server module
// HTTP hosting for the evaluation pipeline

mod handlers;

pub use handlers::{
    handle_evaluate, handle_evaluate_mode, handle_panic, health_check, method_not_allowed,
    not_found, EvaluateQuery,
};

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::constants::MAX_BODY_BYTES;
use crate::config::Config;
use crate::evaluation::Evaluator;
use crate::prompt::TemplateMode;
use crate::providers::CompletionProvider;

/// Read-only state shared by every request
pub struct AppState {
    pub evaluator: Evaluator,
    /// Template used when the request does not choose one
    pub default_mode: TemplateMode,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>, default_mode: TemplateMode) -> Self {
        Self {
            evaluator: Evaluator::new(provider),
            default_mode,
        }
    }
}

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/evaluate",
            post(handle_evaluate).fallback(method_not_allowed),
        )
        .route(
            "/evaluate/:mode",
            post(handle_evaluate_mode).fallback(method_not_allowed),
        )
        .route("/health", get(health_check).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Evaluation HTTP server
pub struct EvalServer {
    bind_address: String,
    state: Arc<AppState>,
}

impl EvalServer {
    pub fn new(config: &Config, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            bind_address: config.server.bind_address.clone(),
            state: Arc::new(AppState::new(provider, config.evaluation.default_mode)),
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind_address))?;

        let app = create_router(Arc::clone(&self.state)).layer(TraceLayer::new_for_http());

        let provider = self.state.evaluator.provider();
        tracing::info!(
            provider = provider.name(),
            model = provider.model(),
            default_mode = %self.state.default_mode,
            "Starting evaluation server on {}",
            addr
        );

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

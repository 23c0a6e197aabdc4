// Inter Eval - Interview transcript evaluator
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use inter_eval::config::load_config;
use inter_eval::logging::init_tracing;
use inter_eval::providers::OpenAIProvider;
use inter_eval::server::EvalServer;
use inter_eval::TemplateMode;

/// Evaluate interview transcripts with an LLM over HTTP
#[derive(Debug, Parser)]
#[command(name = "inter-eval", version, about)]
struct Cli {
    /// Config file (default: ~/.inter-eval/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address, overrides the config file and INTER_EVAL_BIND
    #[arg(long)]
    bind: Option<String>,

    /// Default template: narrative, scored or detailed
    #[arg(long)]
    mode: Option<TemplateMode>,

    /// Log filter (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_deref());

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }
    if let Some(mode) = cli.mode {
        config.evaluation.default_mode = mode;
    }

    let provider = OpenAIProvider::from_config(&config.provider)?;
    let server = EvalServer::new(&config, Arc::new(provider));

    server.serve().await
}

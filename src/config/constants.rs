// Project-wide constants
//
// Centralised here so addresses and defaults have one source of truth.

/// Default bind address for the evaluation server (localhost only).
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8000";

/// Default chat completions endpoint (Groq's OpenAI-compatible API).
pub const DEFAULT_COMPLETIONS_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default evaluation model.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// Default provider name used in logs.
pub const DEFAULT_PROVIDER_NAME: &str = "groq";

/// Environment variable holding the completion API credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the bind address.
pub const BIND_ENV: &str = "INTER_EVAL_BIND";

/// Largest accepted request body. Transcripts are plain text.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

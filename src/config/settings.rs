// Configuration structs

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::constants::{
    DEFAULT_COMPLETIONS_ENDPOINT, DEFAULT_HTTP_ADDR, DEFAULT_MODEL, DEFAULT_PROVIDER_NAME,
};
use crate::prompt::TemplateMode;

/// Top-level configuration, read once at startup and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Completion API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name for logs
    #[serde(default = "default_provider_name")]
    pub name: String,
    /// Full chat completions URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,
    /// Bearer credential. Usually supplied through GROQ_API_KEY instead.
    #[serde(default, skip_serializing)]
    pub api_key: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider_name(),
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: String::new(),
        }
    }
}

/// Evaluation behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Template used when a request does not name one
    #[serde(default)]
    pub default_mode: TemplateMode,
}

fn default_bind_address() -> String {
    DEFAULT_HTTP_ADDR.to_string()
}

fn default_provider_name() -> String {
    DEFAULT_PROVIDER_NAME.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_COMPLETIONS_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Config {
    /// Check the configuration is usable before the server starts.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.bind_address.parse::<SocketAddr>().is_err() {
            bail!(
                "Invalid bind address '{}' (expected host:port, e.g. {})",
                self.server.bind_address,
                DEFAULT_HTTP_ADDR
            );
        }

        let endpoint = self.provider.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            bail!(
                "Invalid provider endpoint '{}' (must be an http:// or https:// URL)",
                self.provider.endpoint
            );
        }

        if self.provider.model.trim().is_empty() {
            bail!("Provider model must not be empty");
        }

        if self.provider.api_key.trim().is_empty() {
            bail!(
                "No API key configured for provider '{}'\n\n\
                 Set it in the environment:\n  \
                 export {}=\"gsk_...\"\n\n\
                 or add `api_key` to the [provider] section of the config file.",
                self.provider.name,
                super::constants::API_KEY_ENV
            );
        }

        Ok(())
    }
}

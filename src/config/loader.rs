// Configuration loader
// Loads settings from ~/.inter-eval/config.toml (or --config) plus environment overrides

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{API_KEY_ENV, BIND_ENV};
use super::settings::Config;

/// Default config location: ~/.inter-eval/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".inter-eval").join("config.toml"))
}

/// Load and validate configuration.
///
/// An explicit `path` must exist. Without one, the default path is used if
/// present and defaults apply otherwise. Environment variables win over the file.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Configuration file not found: {}", path.display());
            }
            load_from_file(path)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => load_from_file(&path)?,
            _ => Config::default(),
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

/// Parse a TOML config file without validating it.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Apply GROQ_API_KEY / INTER_EVAL_BIND. Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
        config.provider.api_key = api_key;
    }
    if let Some(bind) = lookup(BIND_ENV).filter(|v| !v.trim().is_empty()) {
        config.server.bind_address = bind;
    }
}

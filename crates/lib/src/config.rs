//! Configuration types and loading.
//!
//! Config is loaded from a JSON file (e.g. `~/.intercom/config.json`) and environment.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.intercom.io";

/// Top-level client config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// API root (default https://api.intercom.io).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Access token. Overridden by INTERCOM_ACCESS_TOKEN env.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Sent as the Intercom-Version header when set.
    #[serde(default)]
    pub api_version: Option<String>,

    /// Per-request timeout in seconds (default 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            api_version: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Resolve the access token: env INTERCOM_ACCESS_TOKEN overrides config.
pub fn resolve_access_token(config: &Config) -> Option<String> {
    pick_access_token(std::env::var("INTERCOM_ACCESS_TOKEN").ok().as_deref(), config)
}

fn pick_access_token(env: Option<&str>, config: &Config) -> Option<String> {
    env.and_then(trimmed)
        .or_else(|| config.access_token.as_deref().and_then(trimmed))
}

fn trimmed(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

/// Resolve config path from env or default.
pub fn default_config_path() -> PathBuf {
    std::env::var("INTERCOM_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(".intercom").join("config.json"))
                .unwrap_or_else(|| PathBuf::from("config.json"))
        })
}

/// Load config from the given path, or the default path (or INTERCOM_CONFIG_PATH). Missing file => default config.
/// Returns the config and the path that was used.
pub fn load_config(path: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let path = path.unwrap_or_else(default_config_path);
    let config = if !path.exists() {
        log::debug!("config file not found, using defaults: {}", path.display());
        Config::default()
    } else {
        let s = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&s)
            .with_context(|| format!("parsing config from {}", path.display()))?
    };
    Ok((config, path))
}

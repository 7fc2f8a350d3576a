//! Startup configuration.
//!
//! Read once from the process environment (after `.env` is loaded by the
//! binary). The Gemini API key is required; everything else has a default.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TutorlyError};
use crate::providers::gemini::DEFAULT_GEMINI_MODEL;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_TIMEOUT: &str = "TUTORLY_REQUEST_TIMEOUT_SECS";
pub const ENV_STATIC_DIR: &str = "TUTORLY_STATIC_DIR";
pub const ENV_TEMPLATES_DIR: &str = "TUTORLY_TEMPLATES_DIR";

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (default: 0.0.0.0).
    pub host: String,
    /// Listen port (default: 8000).
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Directory holding `index.html` for the landing page.
    pub templates_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            templates_dir: PathBuf::from("templates"),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream provider settings. Holds the credential, so it is never serialized.
#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    /// Per-request deadline enforced by the HTTP client.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var(ENV_API_KEY)
            .ok_or_else(|| TutorlyError::Config("Gemini API key not found".into()))?;

        let mut server = ServerConfig::default();
        if let Some(host) = var(ENV_HOST) {
            server.host = host;
        }
        if let Some(port) = var(ENV_PORT) {
            server.port = parse_number(ENV_PORT, &port)?;
        }
        if let Some(dir) = var(ENV_STATIC_DIR) {
            server.static_dir = PathBuf::from(dir);
        }
        if let Some(dir) = var(ENV_TEMPLATES_DIR) {
            server.templates_dir = PathBuf::from(dir);
        }

        let timeout_secs = match var(ENV_TIMEOUT) {
            Some(v) => parse_number(ENV_TIMEOUT, &v)?,
            None => 120,
        };

        Ok(Self {
            provider: ProviderConfig {
                api_key: api_key.trim().to_string(),
                model: var(ENV_MODEL).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                timeout_secs,
            },
            server,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TutorlyError::Config(format!("Invalid value for {name}: '{value}'")))
}

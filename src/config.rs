use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

use crate::error::AppError;

const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Process configuration, read once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Config {
    /// `OPENAI_API_KEY`. Absent is allowed; generation requests then fail fast.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    /// Upper bound for a single outbound model call.
    pub request_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Loads `.env` (if any) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR is not a valid socket address")?;

        let timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(v) => v
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let max_upload_bytes = match get("MAX_UPLOAD_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            api_key: get("OPENAI_API_KEY"),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: get("OPENAI_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            bind_addr,
            request_timeout: Duration::from_secs(timeout_secs),
            max_upload_bytes,
        })
    }

    pub fn credential(&self) -> Result<&str, AppError> {
        self.api_key.as_deref().ok_or(AppError::MissingCredential)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

use serde::{Deserialize, Serialize};
use crate::{ChatError, Result};

pub const API_BASE_ENV: &str = "COGNITA_API_BASE";
pub const REQUEST_TIMEOUT_ENV: &str = "COGNITA_REQUEST_TIMEOUT_MS";

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 300_000;

/// Path of the chat endpoint relative to `api_base`
pub const CHAT_PATH: &str = "/api/chat";

/// Client configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base: String,
    /// `None` waits for the service indefinitely
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: Some(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl ClientConfig {
    /// Resolve from the process environment, falling back to values baked
    /// in at build time. In the browser only the baked values exist.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| baked_env(key)))
    }

    /// Resolve using `lookup` for each variable; missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup(API_BASE_ENV) {
            config.api_base = normalize_base(&base)?;
        }

        if let Some(raw) = lookup(REQUEST_TIMEOUT_ENV) {
            let ms: u64 = raw.trim().parse().map_err(|_| {
                ChatError::Config(format!("{} must be a number of milliseconds, got {:?}", REQUEST_TIMEOUT_ENV, raw))
            })?;
            config.request_timeout_ms = (ms > 0).then_some(ms);
        }

        Ok(config)
    }

    /// Full URL of the chat endpoint
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.api_base, CHAT_PATH)
    }
}

fn normalize_base(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(ChatError::Config(format!("{} is empty", API_BASE_ENV)));
    }
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ChatError::Config(format!(
            "{} must start with http:// or https://, got {:?}",
            API_BASE_ENV, base
        )));
    }
    Ok(base.to_string())
}

fn baked_env(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_ENV => option_env!("COGNITA_API_BASE"),
        REQUEST_TIMEOUT_ENV => option_env!("COGNITA_REQUEST_TIMEOUT_MS"),
        _ => None,
    };
    value.map(String::from)
}

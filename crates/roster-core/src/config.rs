//! Directory endpoint configuration.
//!
//! Resolves the base URL of the remote user directory from the process
//! environment. A full `ROSTER_API_URL` wins; otherwise the URL is composed
//! from host/port/path parts with defaults suitable for local development.

use std::env;

use crate::error::{Error, Result};
use crate::models::UserId;
use crate::util::{is_http_url, normalize_text_option};

const ENV_API_URL: &str = "ROSTER_API_URL";
const ENV_API_HOST: &str = "ROSTER_API_HOST";
const ENV_API_PORT: &str = "ROSTER_API_PORT";
const ENV_API_BASE: &str = "ROSTER_API_BASE";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BASE: &str = "/users";

/// Resolved directory endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL.
    ///
    /// The URL must include an http(s) scheme; a trailing slash is trimmed.
    pub fn from_base_url(url: impl Into<String>) -> Result<Self> {
        let url = normalize_text_option(Some(url.into()))
            .ok_or_else(|| Error::Config("base URL must not be empty".to_string()))?;
        if !is_http_url(&url) {
            return Err(Error::Config(
                "base URL must include http:// or https://".to_string(),
            ));
        }
        Ok(Self {
            base_url: url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve the config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(|key| env::var(key).ok())
    }

    /// Resolve the config from an arbitrary variable lookup.
    ///
    /// Public for testability — callers can exercise the override rules
    /// without mutating the process environment.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = normalize_text_option(lookup(ENV_API_URL)) {
            return Self::from_base_url(url);
        }

        let host = normalize_text_option(lookup(ENV_API_HOST))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match normalize_text_option(lookup(ENV_API_PORT)) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("invalid {ENV_API_PORT} value: {raw}")))?,
            None => DEFAULT_PORT,
        };
        let base = normalize_text_option(lookup(ENV_API_BASE))
            .unwrap_or_else(|| DEFAULT_BASE.to_string());
        if !base.starts_with('/') {
            return Err(Error::Config(format!(
                "{ENV_API_BASE} must start with '/': {base}"
            )));
        }

        Self::from_base_url(format!(
            "http://{host}:{port}{}",
            base.trim_end_matches('/')
        ))
    }

    /// URL of the full collection resource.
    #[must_use]
    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single record resource.
    #[must_use]
    pub fn record_url(&self, id: UserId) -> String {
        format!("{}/{id}", self.base_url)
    }
}

use anyhow::{Context, Result, bail};
use reqwest::Url;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "DATASANITY_API_URL";

/// Where the processing backend listens by default.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

// ---------------------------------------------------------------------------
// Client configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `http://127.0.0.1:8000`.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let Some(raw) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) else {
            return Ok(Self::default());
        };
        let raw = raw.trim();

        let url = Url::parse(raw).with_context(|| format!("{API_URL_ENV}={raw:?} is not a valid URL"))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("{API_URL_ENV} must use http or https, got {:?}", url.scheme());
        }

        Ok(Self {
            api_base_url: raw.trim_end_matches('/').to_string(),
        })
    }
}

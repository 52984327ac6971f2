use std::env;
use std::time::Duration;

use anyhow::Context;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for the product analysis API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// Environment variables:
    /// - ANALYSIS_API_BASE_URL: API root (default: "http://localhost:8080")
    /// - ANALYSIS_API_TIMEOUT_SECS: request timeout in seconds (default: none)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("ANALYSIS_API_BASE_URL").ok().as_deref(),
            env::var("ANALYSIS_API_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    pub fn from_values(base_url: Option<&str>, timeout_secs: Option<&str>) -> anyhow::Result<Self> {
        let raw_url = base_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw_url)
            .with_context(|| format!("ANALYSIS_API_BASE_URL is not a valid URL: {raw_url}"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("ANALYSIS_API_BASE_URL must use http or https: {raw_url}");
        }

        let timeout = match timeout_secs.map(str::trim).filter(|t| !t.is_empty()) {
            Some(secs) => Some(Duration::from_secs(secs.parse().with_context(|| {
                format!("ANALYSIS_API_TIMEOUT_SECS must be a whole number of seconds: {secs}")
            })?)),
            None => None,
        };

        Ok(Self { base_url, timeout })
    }
}

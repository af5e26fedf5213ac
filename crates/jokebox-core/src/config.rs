//! Endpoint configuration.
//!
//! The joke endpoint is compiled in through the `API_URL` build-time value
//! and wrapped in an explicit [`ApiConfig`] handed to the fetcher at
//! construction, so nothing reads process-wide state after startup.

use tracing::debug;

use crate::error::{Error, Result};

/// Build-time endpoint value, if one was provided.
const BUILD_API_URL: Option<&str> = option_env!("API_URL");

/// Explicit configuration for the joke endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Validated base URL of the joke endpoint.
    base_url: String,
}

impl ApiConfig {
    /// Create a configuration from an endpoint URL.
    ///
    /// The value must be non-empty and use an http(s) scheme. A trailing
    /// slash is stripped so the URL can be used as-is for the GET request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the value is empty or not an
    /// http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();

        if trimmed.is_empty() {
            return Err(Error::configuration("joke endpoint is not set"));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(Error::configuration(format!(
                "joke endpoint is not an http(s) URL: {trimmed}"
            )));
        }

        let base_url = trimmed.trim_end_matches('/').to_string();
        debug!("Joke endpoint configured: {}", base_url);
        Ok(Self { base_url })
    }

    /// Resolve the endpoint compiled in at build time via `API_URL`.
    ///
    /// There is no runtime default: a build without `API_URL` yields a
    /// configuration error, and no request is ever sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `API_URL` was absent or invalid.
    pub fn from_build_env() -> Result<Self> {
        match BUILD_API_URL {
            Some(url) => Self::new(url),
            None => Err(Error::configuration("API_URL was not set at build time")),
        }
    }

    /// The validated base URL of the joke endpoint.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

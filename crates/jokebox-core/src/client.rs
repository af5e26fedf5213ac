//! HTTP joke fetching.
//!
//! [`HttpJokeFetcher`] performs the single outbound request the app makes.
//! On wasm32 `reqwest` rides the browser fetch API, so the same client
//! code serves the WASM frontend and native tests.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::joke::{Joke, parse_joke_response};

/// Abstraction over the joke endpoint.
///
/// Browser futures are not `Send`, so the trait is `?Send`. The UI drives
/// the fetch-and-render cycle through this seam, which keeps the cycle
/// testable with a scripted or mocked fetcher.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait JokeFetcher {
    /// Fetch one joke from the configured endpoint.
    async fn fetch_joke(&self) -> Result<Joke>;
}

/// Fetcher backed by an HTTP client and an explicit endpoint config.
pub struct HttpJokeFetcher {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpJokeFetcher {
    /// Create a fetcher for the given endpoint configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// The endpoint configuration this fetcher was built with.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl JokeFetcher for HttpJokeFetcher {
    async fn fetch_joke(&self) -> Result<Joke> {
        let url = self.config.base_url();
        debug!("Fetching joke from {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Joke endpoint returned status {}", status);
            return Err(Error::network(format!("{url} returned status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("failed to read response body: {e}")))?;

        let joke = parse_joke_response(&body)?;
        debug!("Fetched joke ({} chars)", joke.text().len());
        Ok(joke)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_exposes_its_config() {
        let config = ApiConfig::new("https://icanhazdadjoke.com").unwrap();
        let fetcher = HttpJokeFetcher::new(config.clone());
        assert_eq!(fetcher.config(), &config);
    }

    #[tokio::test]
    async fn test_mock_fetcher_returns_scripted_joke() {
        let mut mock = MockJokeFetcher::new();
        mock.expect_fetch_joke()
            .times(1)
            .returning(|| Ok(Joke::new("why did the scarecrow win an award?")));

        let joke = mock.fetch_joke().await.unwrap();
        assert_eq!(joke.text(), "why did the scarecrow win an award?");
    }

    #[tokio::test]
    async fn test_mock_fetcher_propagates_failures() {
        let mut mock = MockJokeFetcher::new();
        mock.expect_fetch_joke()
            .times(1)
            .returning(|| Err(Error::network("connection reset")));

        let err = mock.fetch_joke().await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}

//! HTTP manifest fetching.
//!
//! Provides a blocking HTTP client that issues a single GET per manifest.
//! Non-success statuses are reported as fetch errors rather than handed to
//! the manifest decoder.

use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

use super::ManifestFetcher;
use crate::error::{LayerError, Result};

/// Fetches manifests over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the given request timeout.
    ///
    /// Requests carry no custom headers; the manifest host is public.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LayerError::Fetch {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl ManifestFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        debug!("Fetching layer manifest from {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| LayerError::Fetch {
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!("Manifest request returned {}", status);

        if !status.is_success() {
            return Err(LayerError::Fetch {
                message: format!("HTTP {} fetching {}", status, url),
            });
        }

        let body = response.bytes().map_err(|e| LayerError::Fetch {
            message: format!("failed to read response from {}: {}", url, e),
        })?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap()
    }

    fn url(server: &MockServer, path: &str) -> Url {
        Url::parse(&server.url(path)).unwrap()
    }

    #[test]
    fn custom_timeout() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn fetch_returns_body_bytes() {
        let server = MockServer::start();
        let body = r#"{"console": {"us-east-1": "47"}}"#;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/brefphp/bref/2.0.5/layers.json");
            then.status(200).body(body);
        });

        let fetcher = fetcher();
        let bytes = fetcher
            .fetch(&url(&server, "/brefphp/bref/2.0.5/layers.json"))
            .unwrap();

        assert_eq!(bytes, body.as_bytes());
        mock.assert_calls(1);
    }

    #[test]
    fn fetch_sends_no_custom_headers() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/layers.json")
                .header_missing("user-agent")
                .header_missing("authorization");
            then.status(200).body("{}");
        });

        let bytes = fetcher().fetch(&url(&server, "/layers.json")).unwrap();

        assert_eq!(bytes, b"{}");
        mock.assert();
    }

    #[test]
    fn fetch_returns_error_on_404() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/missing/layers.json");
            then.status(404).body("404: Not Found");
        });

        let fetcher = fetcher();
        let err = fetcher
            .fetch(&url(&server, "/missing/layers.json"))
            .unwrap_err();

        assert!(matches!(err, LayerError::Fetch { .. }));
        assert!(err.to_string().contains("404"), "Error should mention 404: {}", err);
    }

    #[test]
    fn fetch_does_not_retry_on_500() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET).path("/error/layers.json");
            then.status(500).body("Internal Server Error");
        });

        let fetcher = fetcher();
        let result = fetcher.fetch(&url(&server, "/error/layers.json"));

        assert!(matches!(result, Err(LayerError::Fetch { .. })));
        mock.assert_calls(1);
    }

    #[test]
    fn fetch_returns_error_when_connection_refused() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(2)).unwrap();
        let result = fetcher.fetch(&Url::parse("http://127.0.0.1:1/layers.json").unwrap());

        assert!(matches!(result, Err(LayerError::Fetch { .. })));
    }
}

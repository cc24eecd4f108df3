//! HTTP fetcher
//!
//! One shared client, one GET per page. There is no retry logic and no
//! manual redirect handling; anything other than a final 200 with a body
//! is a failure for that page.

use crate::config::CrawlerConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// User agent sent with every request
static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Result of a single fetch
#[derive(Debug)]
pub enum FetchResult {
    /// Got a 200 response with a body
    Success {
        /// Response body text
        body: String,
    },

    /// Got a response, but not a 200
    HttpError {
        /// The HTTP status code
        status: u16,
    },

    /// Transport-level failure (timeout, connection refused, ...)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared by all fetches in a run
///
/// Connection reuse across fetches is a performance nicety, not a
/// correctness requirement.
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page
///
/// Sleeps the politeness delay first, then issues the GET. Every failure
/// mode maps to a [`FetchResult`] variant; this function never returns an
/// error, because a bad page must not abort the crawl.
pub async fn fetch_page(client: &Client, url: &str, delay: Duration) -> FetchResult {
    tokio::time::sleep(delay).await;

    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if status != StatusCode::OK {
                return FetchResult::HttpError {
                    status: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success { body },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                "connection refused".to_string()
            } else {
                e.to_string()
            };
            FetchResult::NetworkError { error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CrawlerConfig;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&CrawlerConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = build_http_client(&CrawlerConfig::default()).unwrap();

        // Port 1 on localhost is essentially never listening
        let result = fetch_page(&client, "http://127.0.0.1:1/", Duration::ZERO).await;
        assert!(matches!(result, FetchResult::NetworkError { .. }));
    }

    // Status-code and success paths are covered by the wiremock tests in
    // tests/crawl_tests.rs
}

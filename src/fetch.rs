//! Network retrieval of raw feed bodies.
//!
//! # Architecture
//!
//! - [`Fetch`]: the capability the aggregator depends on, `url -> bytes`
//! - [`HttpFetcher`]: the production implementation on top of `reqwest`
//!
//! Keeping the aggregator generic over [`Fetch`] lets tests drive it with
//! canned payloads and injected failures instead of live endpoints.

use crate::error::FetchError;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Retrieves the complete body behind a URL.
///
/// Implementations must treat non-success statuses as errors and must
/// buffer the entire body before returning.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// [`Fetch`] implementation backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Upper bound for one request, connect through last body byte
    ///
    /// # Returns
    ///
    /// A fetcher sending the crate's user agent, or the `reqwest` error when
    /// the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let t0 = Instant::now();
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let resp = self.client.get(url).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "Non-success response");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = resp.bytes().await.map_err(transport)?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched body"
        );
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a loopback port and return its URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/feed")
    }

    fn fetcher() -> HttpFetcher {
        let client = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        HttpFetcher { client }
    }

    #[tokio::test]
    async fn test_fetch_returns_full_body() {
        let url = serve_once("200 OK", "[{\"id\":\"1\"}]").await;
        let body = fetcher().fetch(&url).await.unwrap();
        assert_eq!(body, b"[{\"id\":\"1\"}]");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let url = serve_once("503 Service Unavailable", "down for maintenance").await;
        let err = fetcher().fetch(&url).await.unwrap_err();
        match err {
            FetchError::Status { url: failed, status } => {
                assert_eq!(failed, url);
                assert_eq!(status, reqwest::StatusCode::SERVICE_UNAVAILABLE);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_a_transport_error() {
        // Bind then drop to get a port nobody is listening on.
        let addr = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap();
        let url = format!("http://{addr}/feed");
        let err = fetcher().fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[test]
    fn test_new_builds_client() {
        assert!(HttpFetcher::new(Duration::from_secs(30)).is_ok());
    }
}

//! # nw-fetch
//!
//! Page fetch and audio size probe clients for Newswatch.
//!
//! The resolution engine only talks to the network through [`PageFetcher`]:
//! - `fetch_text` retrieves schedule, program and episode markup and fails
//!   on transport errors or non-2xx statuses
//! - `fetch_size` probes the byte size of an audio file and never fails,
//!   answering 0 when the size cannot be determined
//!
//! [`HttpFetcher`] is the `reqwest` implementation used by the CLI.

mod error;
mod http;

pub use error::FetchError;

use std::future::Future;
use std::time::Duration;

use nw_config::HttpConfig;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, RANGE};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Retrieval collaborator used by the resolution engine.
pub trait PageFetcher {
    /// Fetch the markup at `url`.
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;

    /// Best-effort byte size of the resource at `url`; 0 when unknown.
    fn fetch_size(&self, url: &str) -> impl Future<Output = u64> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the broadcaster's pages and audio files.
pub struct HttpFetcher {
    http: reqwest::Client,
    page_timeout: Duration,
    probe_timeout: Duration,
}

impl HttpFetcher {
    /// Create a client with the configured user agent, headers and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if a configured header is not a valid header
    /// value or the underlying `reqwest::Client` fails to build.
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language).map_err(|_| {
                FetchError::InvalidHeader {
                    name: "Accept-Language",
                    value: config.accept_language.clone(),
                }
            })?,
        );

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            page_timeout: Duration::from_secs(config.page_timeout_secs),
            probe_timeout: Duration::from_secs(config.probe_timeout_secs),
        })
    }

    /// Ask for the first byte only and read the total from `Content-Range`,
    /// falling back to `Content-Length`.
    async fn probe_range(&self, url: &str) -> Result<Option<u64>, FetchError> {
        let resp = self
            .http
            .get(url)
            .header(RANGE, "bytes=0-0")
            .timeout(self.probe_timeout)
            .send()
            .await?;
        let resp = http::check_response(resp)?;
        Ok(http::total_from_content_range(resp.headers())
            .or_else(|| http::content_length(resp.headers())))
    }

    /// Plain GET reading `Content-Length`; the body is never consumed.
    async fn probe_length(&self, url: &str) -> Result<Option<u64>, FetchError> {
        let resp = self
            .http
            .get(url)
            .timeout(self.probe_timeout)
            .send()
            .await?;
        let resp = http::check_response(resp)?;
        Ok(http::content_length(resp.headers()))
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .http
            .get(url)
            .timeout(self.page_timeout)
            .send()
            .await?;
        let resp = http::check_response(resp)?;
        Ok(resp.text().await?)
    }

    async fn fetch_size(&self, url: &str) -> u64 {
        match self.probe_range(url).await {
            Ok(Some(size)) => return size,
            Ok(None) => {}
            Err(error) => tracing::debug!(url, %error, "range probe failed"),
        }

        match self.probe_length(url).await {
            Ok(Some(size)) => size,
            Ok(None) => 0,
            Err(error) => {
                tracing::warn!(url, %error, "size probe failed");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RANGED_TOTAL: &str = "4096000";

    fn has_range(request: &tiny_http::Request) -> bool {
        request
            .headers()
            .iter()
            .any(|header| header.field.equiv("Range"))
    }

    fn header(name: &str, value: &str) -> tiny_http::Header {
        tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()).unwrap()
    }

    /// Local server with a handful of fixed routes. Returns its origin.
    fn spawn_server() -> String {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();

        std::thread::spawn(move || {
            for request in server.incoming_requests() {
                let response = match request.url() {
                    "/page" => tiny_http::Response::from_string("<p>bulletin</p>"),
                    "/ranged.mp3" if has_range(&request) => {
                        tiny_http::Response::from_data(vec![0u8])
                            .with_status_code(206)
                            .with_header(header("Content-Range", &format!("bytes 0-0/{RANGED_TOTAL}")))
                    }
                    "/ranged.mp3" | "/plain.mp3" => tiny_http::Response::from_data(vec![0u8; 3072]),
                    _ => tiny_http::Response::from_string("missing").with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });

        format!("http://127.0.0.1:{port}")
    }

    fn client() -> HttpFetcher {
        let config = HttpConfig {
            page_timeout_secs: 5,
            probe_timeout_secs: 5,
            ..HttpConfig::default()
        };
        HttpFetcher::new(&config).expect("client builds")
    }

    #[test]
    fn rejects_invalid_accept_language() {
        let config = HttpConfig {
            accept_language: String::from("en\nfr"),
            ..HttpConfig::default()
        };
        let err = HttpFetcher::new(&config).err().expect("header should be rejected");
        assert!(matches!(err, FetchError::InvalidHeader { name: "Accept-Language", .. }));
    }

    #[tokio::test]
    async fn fetch_text_returns_body() {
        let origin = spawn_server();
        let body = client().fetch_text(&format!("{origin}/page")).await.unwrap();
        assert_eq!(body, "<p>bulletin</p>");
    }

    #[tokio::test]
    async fn fetch_text_fails_on_not_found() {
        let origin = spawn_server();
        let err = client()
            .fetch_text(&format!("{origin}/gone"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn fetch_size_reads_content_range_total() {
        let origin = spawn_server();
        let size = client().fetch_size(&format!("{origin}/ranged.mp3")).await;
        assert_eq!(size, 4_096_000);
    }

    #[tokio::test]
    async fn fetch_size_falls_back_to_content_length() {
        let origin = spawn_server();
        let size = client().fetch_size(&format!("{origin}/plain.mp3")).await;
        assert_eq!(size, 3072);
    }

    #[tokio::test]
    async fn fetch_size_is_zero_when_unreachable() {
        let origin = spawn_server();
        assert_eq!(client().fetch_size(&format!("{origin}/gone.mp3")).await, 0);
        assert_eq!(client().fetch_size("http://127.0.0.1:9/none.mp3").await, 0);
    }
}

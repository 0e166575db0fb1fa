//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when retrieving a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} for {url}")]
    Status {
        /// HTTP status code returned by the server.
        status: u16,
        /// Address that was requested.
        url: String,
    },

    /// A configured header value is not valid HTTP.
    #[error("invalid header value for {name}: {value}")]
    InvalidHeader {
        /// Header name.
        name: &'static str,
        /// Rejected value.
        value: String,
    },

    /// A fake or recorded fetcher has no page for this address.
    #[error("no page for {0}")]
    NotFound(String),
}

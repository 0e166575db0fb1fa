//! Shared HTTP response helpers.
//!
//! Centralizes the status check for page fetches and the header parsing used
//! by the size probe, so the client in `lib.rs` stays focused on request
//! construction.

use reqwest::header::{CONTENT_LENGTH, CONTENT_RANGE, HeaderMap};

use crate::error::FetchError;

/// Check an HTTP response for a success status.
///
/// Returns the response unchanged on success, [`FetchError::Status`]
/// otherwise.
pub fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    if !resp.status().is_success() {
        return Err(FetchError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}

/// Total resource size from a `Content-Range: bytes 0-0/<total>` header.
pub fn total_from_content_range(headers: &HeaderMap) -> Option<u64> {
    let value = headers.get(CONTENT_RANGE)?.to_str().ok()?;
    let (_, total) = value.trim_end().rsplit_once('/')?;
    total.trim().parse().ok()
}

/// Body size from the `Content-Length` header.
pub fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

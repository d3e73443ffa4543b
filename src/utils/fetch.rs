//! Network fetching utilities.
//!
//! Requests are plain GETs with no timeout, cache or retry; a failure is
//! reported once to the caller.

use gloo_net::http::Request;

use crate::core::error::FetchError;
use crate::core::Fetcher;

/// Fetch text content from a URL using the Fetch API.
pub async fn fetch_content(url: &str) -> Result<String, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    resp.text()
        .await
        .map_err(|e| FetchError::ResponseReadFailed(e.to_string()))
}

/// [`Fetcher`] backed by the browser Fetch API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        fetch_content(url).await
    }
}

//! Minimal HTTP seam used by the auth gateway.
//!
//! The browser implementation posts JSON with `gloo-net`; tests substitute an
//! in-memory fake so gateway behavior can be exercised natively.

#![allow(async_fn_in_trait)]

/// Raw HTTP response: status code plus the unparsed body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (offline, DNS, CORS, aborted).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("request failed: {0}")]
pub struct TransportError(pub String);

/// Issues JSON requests against the backend.
pub trait Transport {
    /// POST `body` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no HTTP response was received. Non-2xx
    /// responses are *not* errors at this layer.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, TransportError>;
}

/// `gloo-net` backed transport for the browser.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<HttpResponse, TransportError> {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| TransportError(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}

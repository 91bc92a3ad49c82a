//! Pluggable HTTP transport.
//!
//! The requestor never talks to the network directly. It hands a fully-built
//! [`HttpRequest`] to an [`HttpTransport`] and interprets the returned
//! [`HttpResponse`]. [`ReqwestTransport`] is the default implementation.

use std::fmt;

use async_trait::async_trait;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// The HTTP capability the client depends on.
///
/// Implementations must be `Send + Sync`; whether concurrent calls are safe
/// is up to the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Sends a request and returns the status and body of the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the round trip could not be completed.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Default transport backed by [`reqwest`] with rustls.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with a fresh rustls-backed client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self { client })
    }

    /// Wraps an existing [`reqwest::Client`], e.g. one configured with
    /// timeouts or a proxy.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(request.url),
            HttpMethod::Post => self.client.post(request.url),
            HttpMethod::Patch => self.client.patch(request.url),
            HttpMethod::Delete => self.client.delete(request.url),
        };

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let res = builder.body(request.body).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(HttpResponse { status, body })
    }
}

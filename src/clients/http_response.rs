//! HTTP response type returned by an
//! [`HttpTransport`](crate::clients::HttpTransport).

/// A raw HTTP response: status code plus the unparsed body.
///
/// The requestor only uses the status code for logging; error envelopes are
/// recognized from the JSON body alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

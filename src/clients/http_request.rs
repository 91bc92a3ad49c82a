//! HTTP request types for the Omise API client.
//!
//! This module provides the [`HttpMethod`] and [`RequestPath`] types used to
//! address an endpoint, and the fully-built [`HttpRequest`] handed to an
//! [`HttpTransport`](crate::clients::HttpTransport).

use std::collections::BTreeMap;
use std::fmt;

use url::Url;

/// HTTP methods used by the Omise API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and running actions.
    Post,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An ordered sequence of path segments relative to an API base URL.
///
/// Segments are joined with `/` as given (no percent-encoding) and the result
/// is resolved against the base URL with standard URL-join semantics.
///
/// # Example
///
/// ```rust
/// use omise::clients::RequestPath;
///
/// let path = RequestPath::new(["charges", "chrg_test_1"]).join("capture");
/// assert_eq!(path.to_string(), "charges/chrg_test_1/capture");
///
/// let single = RequestPath::from("account");
/// assert_eq!(single.segments(), &["account".to_string()]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RequestPath {
    segments: Vec<String>,
}

impl RequestPath {
    /// Creates a path from an ordered sequence of segments.
    ///
    /// Any `Display` value can be a segment; it is stringified as-is.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            segments: segments.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn join(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Returns the segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolves this path against `base`.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if the joined path cannot be resolved.
    pub fn resolve(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.to_string())
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl From<&str> for RequestPath {
    fn from(segment: &str) -> Self {
        Self::new([segment])
    }
}

impl From<String> for RequestPath {
    fn from(segment: String) -> Self {
        Self {
            segments: vec![segment],
        }
    }
}

/// A fully-built HTTP request ready to be sent by a transport.
///
/// The requestor always produces a JSON object body, even for `GET`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL of the endpoint.
    pub url: Url,
    /// The serialized JSON body.
    pub body: String,
    /// Headers to send, keyed by header name.
    pub headers: BTreeMap<String, String>,
}

impl HttpRequest {
    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }

    #[test]
    fn test_request_path_stringifies_segments() {
        let path = RequestPath::new(vec!["forex".to_string(), "usd".to_string()]);
        assert_eq!(path.to_string(), "forex/usd");

        let numeric = RequestPath::new([1, 2, 3]);
        assert_eq!(numeric.to_string(), "1/2/3");
    }

    #[test]
    fn test_request_path_resolves_against_base() {
        let base = Url::parse("https://api.omise.co/").unwrap();
        let url = RequestPath::new(["charges", "chrg_1"]).resolve(&base).unwrap();
        assert_eq!(url.as_str(), "https://api.omise.co/charges/chrg_1");
    }

    #[test]
    fn test_request_path_with_query_in_segment() {
        let base = Url::parse("https://api.omise.co/").unwrap();
        let path = RequestPath::new(["search", "?scope=charge&query=a"]);
        let url = path.resolve(&base).unwrap();
        assert_eq!(url.path(), "/search/");
        assert_eq!(url.query(), Some("scope=charge&query=a"));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: Url::parse("https://api.omise.co/account").unwrap(),
            body: "{}".to_string(),
            headers,
        };
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("Accept"), None);
    }
}

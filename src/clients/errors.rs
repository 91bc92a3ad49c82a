//! Error types for the request pipeline.
//!
//! This module contains the errors raised while sending a request and
//! interpreting its response.
//!
//! # Error Handling
//!
//! - [`HttpError`]: The transport could not complete the round trip
//! - [`ApiError`]: The server answered with an error envelope
//!   (`{"object": "error", "code": ..., "message": ...}`)
//! - [`RequestError`]: Unified error type returned by
//!   [`Requestor::send`](crate::clients::Requestor::send)
//!
//! # Example
//!
//! ```rust
//! use omise::clients::{ApiError, ApiErrorKind};
//! use serde_json::json;
//!
//! let error = ApiError::from_body(&json!({
//!     "object": "error",
//!     "code": "not_found",
//!     "message": "no such charge"
//! }));
//!
//! assert_eq!(error.kind, ApiErrorKind::NotFound);
//! assert_eq!(error.to_string(), "no such charge");
//! ```

use serde_json::Value;
use thiserror::Error;

/// Error returned when the transport fails to complete a round trip.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error from the default transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },
}

/// The kind of error reported by the API, derived from the envelope `code`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// `authentication_failure`
    AuthenticationFailure,
    /// `not_found`
    NotFound,
    /// `used_token`
    UsedToken,
    /// `invalid_card`
    InvalidCard,
    /// `invalid_card_token`
    InvalidCardToken,
    /// `missing_card`
    MissingCard,
    /// `invalid_charge`
    InvalidCharge,
    /// `failed_capture`
    FailedCapture,
    /// `failed_fraud_check`
    FailedFraudCheck,
    /// `failed_refund`
    FailedRefund,
    /// `invalid_recipient`
    InvalidRecipient,
    /// Any other code, or a malformed envelope.
    Unknown,
}

impl ApiErrorKind {
    /// Maps an error code to its kind. Unrecognized codes map to
    /// [`ApiErrorKind::Unknown`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "authentication_failure" => Self::AuthenticationFailure,
            "not_found" => Self::NotFound,
            "used_token" => Self::UsedToken,
            "invalid_card" => Self::InvalidCard,
            "invalid_card_token" => Self::InvalidCardToken,
            "missing_card" => Self::MissingCard,
            "invalid_charge" => Self::InvalidCharge,
            "failed_capture" => Self::FailedCapture,
            "failed_fraud_check" => Self::FailedFraudCheck,
            "failed_refund" => Self::FailedRefund,
            "invalid_recipient" => Self::InvalidRecipient,
            _ => Self::Unknown,
        }
    }
}

/// An error envelope returned by the API.
///
/// Displays as the server's `message`, verbatim.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// The kind derived from `code`.
    pub kind: ApiErrorKind,
    /// The raw `code` field, if present.
    pub code: Option<String>,
    /// The human-readable message from the server.
    pub message: String,
}

impl ApiError {
    /// Builds an error from an error envelope body.
    ///
    /// An envelope that is not an object, or that lacks a string `message`,
    /// yields [`ApiErrorKind::Unknown`] with the message `"unknown error"`.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let Some(object) = body.as_object() else {
            return Self::unknown();
        };
        let Some(message) = object.get("message").and_then(Value::as_str) else {
            return Self::unknown();
        };

        let code = object.get("code").and_then(Value::as_str);
        Self {
            kind: code.map_or(ApiErrorKind::Unknown, ApiErrorKind::from_code),
            code: code.map(String::from),
            message: message.to_string(),
        }
    }

    fn unknown() -> Self {
        Self {
            kind: ApiErrorKind::Unknown,
            code: None,
            message: "unknown error".to_string(),
        }
    }
}

/// Unified error type for a single request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The transport failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server returned an error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body is not valid JSON.
    #[error("Invalid JSON response (status {status}): {source}")]
    InvalidJson {
        /// HTTP status of the response.
        status: u16,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The request path could not be resolved against the base URL.
    #[error("Invalid request URL '{path}': {source}")]
    InvalidUrl {
        /// The path that failed to resolve.
        path: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The payload could not be serialized.
    #[error("Invalid request payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

impl RequestError {
    /// Returns the API error if this is an error envelope from the server.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }
}

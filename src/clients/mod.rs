//! HTTP client types for Omise API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the Omise API. It builds requests, injects credentials and
//! headers, and maps responses to JSON values or typed API errors.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`OmiseClient`]: The client facade every resource operation takes
//! - [`Requestor`]: Binds one API key and one base URL; sends a single request
//! - [`HttpTransport`]: The pluggable HTTP capability, with
//!   [`ReqwestTransport`] as the default
//! - [`HttpRequest`] / [`HttpResponse`]: What crosses the transport boundary
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`RequestPath`]: An ordered list of path segments
//! - [`ApiError`] / [`ApiErrorKind`]: Errors reported by the API itself
//! - [`RequestError`]: Everything that can go wrong with one request
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::{ApiHost, OmiseClient, OmiseConfig, SecretKey};
//! use omise::clients::{HttpMethod, RequestPath};
//!
//! let config = OmiseConfig::builder()
//!     .secret_key(SecretKey::new("skey_test_4xsjvwfnvb2g0l81sjz")?)
//!     .build()?;
//! let client = OmiseClient::new(config)?;
//!
//! let requestor = client.requestor(ApiHost::Main)?;
//! let body = requestor
//!     .send(HttpMethod::Get, &RequestPath::from("account"), None, None)
//!     .await?;
//! ```
//!
//! # Error Mapping
//!
//! Every response body is parsed as JSON regardless of status:
//!
//! - **Unparseable body**: [`RequestError::InvalidJson`]
//! - **`"object": "error"`**: [`RequestError::Api`] with the mapped
//!   [`ApiErrorKind`]; unknown codes map to [`ApiErrorKind::Unknown`]
//! - **Anything else**: returned as-is
//!
//! No request is ever retried.

mod client;
mod errors;
mod http_request;
mod http_response;
mod requestor;
pub(crate) mod transport;

pub use client::OmiseClient;
pub use errors::{ApiError, ApiErrorKind, HttpError, RequestError};
pub use http_request::{HttpMethod, HttpRequest, RequestPath};
pub use http_response::HttpResponse;
pub use requestor::{Requestor, SDK_VERSION};
pub use transport::{HttpTransport, ReqwestTransport};

//! Error types for the Omise API client.
//!
//! This module contains the configuration error type used when building an
//! [`OmiseConfig`](crate::OmiseConfig) or constructing a request against one
//! of the API hosts.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A missing API key is reported when a requestor is
//! constructed, never deferred to the first HTTP call.
//!
//! # Example
//!
//! ```rust
//! use omise::{ConfigError, SecretKey};
//!
//! let result = SecretKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptySecretKey)));
//! ```

use thiserror::Error;

use crate::config::ApiHost;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid Omise secret key (skey_...).")]
    EmptySecretKey,

    /// Public key cannot be empty.
    #[error("Public key cannot be empty. Please provide a valid Omise public key (pkey_...).")]
    EmptyPublicKey,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM-DD' (e.g., '2019-05-29').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.omise.co').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Neither a secret key nor a public key was configured.
    #[error("Missing credentials: at least one of 'secret_key' or 'public_key' must be set before building the configuration.")]
    MissingCredentials,

    /// No API key is configured for the host a request targets.
    #[error("API key is not set for the {host} host.")]
    MissingApiKey {
        /// The host the request was going to be sent to.
        host: ApiHost,
    },
}

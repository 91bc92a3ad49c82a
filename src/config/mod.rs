//! Configuration types for the Omise API client.
//!
//! This module provides the configuration used to reach the two Omise API
//! hosts: the general API (authenticated with the secret key) and the vault
//! (authenticated with the public key, used for card tokenization).
//!
//! # Overview
//!
//! - [`OmiseConfig`]: Immutable configuration snapshot shared by every request
//! - [`OmiseConfigBuilder`]: Builder for [`OmiseConfig`]
//! - [`SecretKey`] / [`PublicKey`]: Validated credential newtypes
//! - [`BaseUrl`]: A validated absolute base URL
//! - [`ApiVersion`]: The dated API version sent with each request
//! - [`ApiHost`]: Selects which credential and base URL a request uses
//!
//! # Example
//!
//! ```rust
//! use omise::{OmiseConfig, SecretKey, PublicKey, ApiVersion};
//!
//! let config = OmiseConfig::builder()
//!     .secret_key(SecretKey::new("skey_test_123").unwrap())
//!     .public_key(PublicKey::new("pkey_test_123").unwrap())
//!     .api_version(ApiVersion::V2019_05_29)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base().as_ref(), "https://api.omise.co/");
//! ```

mod newtypes;
mod version;

use std::fmt;

pub use newtypes::{BaseUrl, PublicKey, SecretKey};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Default base URL of the general API.
pub const DEFAULT_API_BASE: &str = "https://api.omise.co";

/// Default base URL of the vault API.
pub const DEFAULT_VAULT_BASE: &str = "https://vault.omise.co";

/// The API host a resource talks to.
///
/// Every resource type is bound to exactly one host. The host decides which
/// base URL is used and which key authenticates the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiHost {
    /// The general API, authenticated with the secret key.
    Main,
    /// The vault API, authenticated with the public key.
    Vault,
}

impl fmt::Display for ApiHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => f.write_str("main"),
            Self::Vault => f.write_str("vault"),
        }
    }
}

/// Configuration for the Omise API client.
///
/// This is the explicit replacement for process-wide settings: it is built
/// once at startup and read (never mutated) by every request.
///
/// # Thread Safety
///
/// `OmiseConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct OmiseConfig {
    secret_key: Option<SecretKey>,
    public_key: Option<PublicKey>,
    api_version: Option<ApiVersion>,
    api_base: BaseUrl,
    vault_base: BaseUrl,
}

impl OmiseConfig {
    /// Creates a new builder for constructing an `OmiseConfig`.
    #[must_use]
    pub fn builder() -> OmiseConfigBuilder {
        OmiseConfigBuilder::new()
    }

    /// Returns the secret key, if configured.
    #[must_use]
    pub const fn secret_key(&self) -> Option<&SecretKey> {
        self.secret_key.as_ref()
    }

    /// Returns the public key, if configured.
    #[must_use]
    pub const fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// Returns the API version, if configured.
    ///
    /// `None` means the server default version is used.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the base URL of the general API.
    #[must_use]
    pub const fn api_base(&self) -> &BaseUrl {
        &self.api_base
    }

    /// Returns the base URL of the vault API.
    #[must_use]
    pub const fn vault_base(&self) -> &BaseUrl {
        &self.vault_base
    }

    /// Returns the key and base URL used for requests to `host`.
    ///
    /// The key is `None` when the matching credential was not configured.
    #[must_use]
    pub fn credentials(&self, host: ApiHost) -> (Option<&str>, &BaseUrl) {
        match host {
            ApiHost::Main => (self.secret_key.as_ref().map(AsRef::as_ref), &self.api_base),
            ApiHost::Vault => (self.public_key.as_ref().map(AsRef::as_ref), &self.vault_base),
        }
    }
}

// Verify OmiseConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OmiseConfig>();
};

/// Builder for constructing [`OmiseConfig`] instances.
///
/// At least one of `secret_key` or `public_key` is required.
///
/// # Defaults
///
/// - `api_version`: `None` (server default)
/// - `api_base`: [`DEFAULT_API_BASE`]
/// - `vault_base`: [`DEFAULT_VAULT_BASE`]
#[derive(Debug, Default)]
pub struct OmiseConfigBuilder {
    secret_key: Option<SecretKey>,
    public_key: Option<PublicKey>,
    api_version: Option<ApiVersion>,
    api_base: Option<BaseUrl>,
    vault_base: Option<BaseUrl>,
}

impl OmiseConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the secret key used against the general API.
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sets the public key used against the vault API.
    #[must_use]
    pub fn public_key(mut self, key: PublicKey) -> Self {
        self.public_key = Some(key);
        self
    }

    /// Sets the API version sent in the `Omise-Version` header.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the base URL of the general API.
    #[must_use]
    pub fn api_base(mut self, url: BaseUrl) -> Self {
        self.api_base = Some(url);
        self
    }

    /// Overrides the base URL of the vault API.
    #[must_use]
    pub fn vault_base(mut self, url: BaseUrl) -> Self {
        self.vault_base = Some(url);
        self
    }

    /// Builds the [`OmiseConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if neither key is set.
    pub fn build(self) -> Result<OmiseConfig, ConfigError> {
        if self.secret_key.is_none() && self.public_key.is_none() {
            return Err(ConfigError::MissingCredentials);
        }

        let api_base = match self.api_base {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_API_BASE)?,
        };
        let vault_base = match self.vault_base {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_VAULT_BASE)?,
        };

        Ok(OmiseConfig {
            secret_key: self.secret_key,
            public_key: self.public_key,
            api_version: self.api_version,
            api_base,
            vault_base,
        })
    }
}

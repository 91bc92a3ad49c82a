//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so an
//! [`OmiseConfig`](super::OmiseConfig) can never hold an empty key or a
//! relative base URL.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// A validated Omise secret key.
///
/// The secret key authenticates requests to the general API. Its value is
/// masked in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use omise::SecretKey;
///
/// let key = SecretKey::new("skey_test_123").unwrap();
/// assert_eq!(key.as_ref(), "skey_test_123");
/// assert_eq!(format!("{:?}", key), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}

/// A validated Omise public key.
///
/// The public key authenticates requests to the vault API. It is meant to be
/// shared with browsers, so it is not masked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    /// Creates a new validated public key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPublicKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyPublicKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PublicKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated absolute base URL for one of the API hosts.
///
/// Request paths are resolved against this URL with standard URL-join
/// semantics.
///
/// # Example
///
/// ```rust
/// use omise::BaseUrl;
///
/// let url = BaseUrl::new("https://api.omise.co").unwrap();
/// assert_eq!(url.host_name(), Some("api.omise.co"));
/// assert!(BaseUrl::new("api.omise.co").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value does not parse as
    /// an absolute URL with an `http` or `https` scheme and a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let parsed = Url::parse(&url).map_err(|_| ConfigError::InvalidBaseUrl { url: url.clone() })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(parsed))
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_key_rejects_empty() {
        assert!(matches!(SecretKey::new(""), Err(ConfigError::EmptySecretKey)));
        assert!(matches!(SecretKey::new("   "), Err(ConfigError::EmptySecretKey)));
    }

    #[test]
    fn test_secret_key_debug_is_masked() {
        let key = SecretKey::new("skey_test_secret").unwrap();
        assert_eq!(format!("{key:?}"), "SecretKey(*****)");
        assert_eq!(key.as_ref(), "skey_test_secret");
    }

    #[test]
    fn test_public_key_rejects_empty() {
        assert!(matches!(PublicKey::new(""), Err(ConfigError::EmptyPublicKey)));
        assert_eq!(PublicKey::new("pkey_test").unwrap().as_ref(), "pkey_test");
    }

    #[test]
    fn test_base_url_accepts_http_and_https() {
        assert!(BaseUrl::new("https://api.omise.co").is_ok());
        assert!(BaseUrl::new("http://127.0.0.1:3000").is_ok());
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("api.omise.co").is_err());
        assert!(BaseUrl::new("ftp://api.omise.co").is_err());
        assert!(BaseUrl::new("not a url").is_err());
    }

    #[test]
    fn test_base_url_host_name() {
        let url = BaseUrl::new("https://vault.omise.co/").unwrap();
        assert_eq!(url.host_name(), Some("vault.omise.co"));
        assert_eq!(url.to_string(), "https://vault.omise.co/");
    }
}

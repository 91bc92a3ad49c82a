//! The Omise client facade.
//!
//! [`OmiseClient`] pairs an [`OmiseConfig`] with an [`HttpTransport`]. It is
//! cheap to clone and is what every resource operation takes as its first
//! argument.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, RequestPath};
use crate::clients::requestor::Requestor;
use crate::clients::transport::{HttpTransport, ReqwestTransport};
use crate::config::{ApiHost, OmiseConfig};
use crate::error::ConfigError;
use crate::rest::{materialize, Materialized, ResourceError};

/// Entry point for talking to the Omise API.
///
/// # Thread Safety
///
/// `OmiseClient` is `Clone + Send + Sync`. Clones share the transport.
///
/// # Example
///
/// ```rust,ignore
/// use omise::{OmiseClient, OmiseConfig, SecretKey};
/// use omise::rest::Retrieve;
/// use omise::Charge;
///
/// let config = OmiseConfig::builder()
///     .secret_key(SecretKey::new("skey_test_123")?)
///     .build()?;
/// let client = OmiseClient::new(config)?;
///
/// let charge = Charge::retrieve(&client, "chrg_test_1").await?;
/// println!("{charge}");
/// ```
#[derive(Clone, Debug)]
pub struct OmiseClient {
    config: OmiseConfig,
    transport: Arc<dyn HttpTransport>,
}

// Verify OmiseClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OmiseClient>();
};

impl OmiseClient {
    /// Creates a client using the default [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the transport cannot be initialized.
    pub fn new(config: OmiseConfig) -> Result<Self, HttpError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client with a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: OmiseConfig, transport: Arc<dyn HttpTransport>) -> Self {
        tracing::debug!(
            "Creating Omise client (api: {}, vault: {}, version: {})",
            config.api_base(),
            config.vault_base(),
            config
                .api_version()
                .map_or_else(|| "server default".to_string(), ToString::to_string)
        );
        Self { config, transport }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &OmiseConfig {
        &self.config
    }

    /// Returns a requestor bound to `host`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key is configured for
    /// `host`.
    pub fn requestor(&self, host: ApiHost) -> Result<Requestor, ConfigError> {
        Requestor::new(&self.config, host, Arc::clone(&self.transport))
    }

    /// Sends a request to `host` and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if `host` has no key, or
    /// [`ResourceError::Request`] if the request fails.
    pub async fn request(
        &self,
        host: ApiHost,
        method: HttpMethod,
        path: &RequestPath,
        payload: Option<&Map<String, Value>>,
    ) -> Result<Value, ResourceError> {
        let requestor = self.requestor(host)?;
        Ok(requestor.send(method, path, payload, None).await?)
    }

    /// Sends a request to `host` and materializes the response.
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request), plus materialization errors.
    pub async fn send(
        &self,
        host: ApiHost,
        method: HttpMethod,
        path: &RequestPath,
        payload: Option<&Map<String, Value>>,
    ) -> Result<Materialized, ResourceError> {
        let body = self.request(host, method, path, payload).await?;
        materialize(body)
    }
}

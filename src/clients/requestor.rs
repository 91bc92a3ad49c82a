//! The transport requestor.
//!
//! A [`Requestor`] is bound to one API host: it holds that host's key, base
//! URL, and the configured API version. [`Requestor::send`] builds a single
//! request, hands it to the transport, parses the JSON body, and turns error
//! envelopes into [`ApiError`](crate::clients::ApiError)s.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use url::Url;

use crate::clients::errors::{ApiError, RequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestPath};
use crate::clients::transport::HttpTransport;
use crate::config::{ApiHost, ApiVersion, OmiseConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Headers the requestor always sets. Caller-supplied values for these are
/// dropped.
const RESERVED_HEADERS: [&str; 4] = ["Accept", "Content-Type", "User-Agent", "Authorization"];

/// Reserved only while an API version is configured.
const VERSION_HEADER: &str = "Omise-Version";

/// Builds and sends requests against a single API host.
///
/// # Thread Safety
///
/// `Requestor` is `Send + Sync`. It holds no mutable state.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use omise::clients::{HttpMethod, RequestPath, Requestor, ReqwestTransport};
/// use omise::{ApiHost, OmiseConfig, SecretKey};
///
/// let config = OmiseConfig::builder()
///     .secret_key(SecretKey::new("skey_test_123")?)
///     .build()?;
/// let transport = Arc::new(ReqwestTransport::new()?);
///
/// let requestor = Requestor::new(&config, ApiHost::Main, transport)?;
/// let account = requestor
///     .send(HttpMethod::Get, &RequestPath::from("account"), None, None)
///     .await?;
/// ```
#[derive(Clone)]
pub struct Requestor {
    api_key: String,
    api_base: Url,
    api_version: Option<ApiVersion>,
    transport: Arc<dyn HttpTransport>,
}

// Verify Requestor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Requestor>();
};

impl Requestor {
    /// Creates a requestor for `host` from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key is configured for
    /// `host`. This is checked here, before any request is made.
    pub fn new(
        config: &OmiseConfig,
        host: ApiHost,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ConfigError> {
        let (api_key, api_base) = config.credentials(host);
        let api_key = api_key.ok_or(ConfigError::MissingApiKey { host })?;

        Ok(Self {
            api_key: api_key.to_string(),
            api_base: api_base.as_url().clone(),
            api_version: config.api_version().cloned(),
            transport,
        })
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Returns the API version sent with each request, if any.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Sends a request and returns the parsed JSON body.
    ///
    /// The payload is sent as a JSON object with sorted keys regardless of
    /// the method; an absent payload is sent as `{}`. Caller headers are
    /// merged in, but never override `Accept`, `Content-Type`, `User-Agent`,
    /// or `Authorization`. `Omise-Version` is overridden only when a version
    /// is configured.
    ///
    /// # Errors
    ///
    /// - [`RequestError::InvalidUrl`] if the path cannot be resolved
    /// - [`RequestError::Http`] if the transport fails
    /// - [`RequestError::InvalidJson`] if the body is not JSON
    /// - [`RequestError::Api`] if the body is an error envelope
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &RequestPath,
        payload: Option<&Map<String, Value>>,
        headers: Option<&BTreeMap<String, String>>,
    ) -> Result<Value, RequestError> {
        let request = self.build_request(method, path, payload, headers)?;

        tracing::info!("Sending HTTP request: {} {}", method.as_str(), request.url);
        tracing::debug!("Authorization: {}", mask_key(&self.api_key));
        tracing::debug!("Payload: {}", request.body);
        tracing::debug!("Headers: {:?}", masked_headers(&request.headers));

        let response = self.transport.send(request).await?;

        if response.is_ok() {
            tracing::info!("Received HTTP response: {}", response.status);
        } else {
            tracing::warn!("Received HTTP response: {}", response.status);
        }
        tracing::debug!("Response body: {}", response.body);

        let body: Value =
            serde_json::from_str(&response.body).map_err(|source| RequestError::InvalidJson {
                status: response.status,
                source,
            })?;

        if body.get("object").and_then(Value::as_str) == Some("error") {
            let error = ApiError::from_body(&body);
            tracing::debug!("API error {:?}: {}", error.kind, error.message);
            return Err(error.into());
        }

        Ok(body)
    }

    /// Builds the request without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidUrl`] or [`RequestError::InvalidPayload`].
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &RequestPath,
        payload: Option<&Map<String, Value>>,
        headers: Option<&BTreeMap<String, String>>,
    ) -> Result<HttpRequest, RequestError> {
        let url = path
            .resolve(&self.api_base)
            .map_err(|source| RequestError::InvalidUrl {
                path: path.to_string(),
                source,
            })?;

        Ok(HttpRequest {
            method,
            url,
            body: build_payload(payload)?,
            headers: self.build_headers(headers),
        })
    }

    fn build_headers(&self, headers: Option<&BTreeMap<String, String>>) -> BTreeMap<String, String> {
        let mut merged: BTreeMap<String, String> = headers
            .into_iter()
            .flatten()
            .filter(|(key, _)| !self.is_reserved(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        merged.insert("Accept".to_string(), "application/json".to_string());
        merged.insert("Content-Type".to_string(), "application/json".to_string());
        merged.insert("User-Agent".to_string(), format!("OmiseRust/{SDK_VERSION}"));
        if let Some(version) = &self.api_version {
            merged.insert(VERSION_HEADER.to_string(), version.to_string());
        }

        let credentials = STANDARD.encode(format!("{}:", self.api_key));
        merged.insert("Authorization".to_string(), format!("Basic {credentials}"));

        merged
    }

    fn is_reserved(&self, name: &str) -> bool {
        RESERVED_HEADERS
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
            || (self.api_version.is_some() && VERSION_HEADER.eq_ignore_ascii_case(name))
    }
}

impl fmt::Debug for Requestor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requestor")
            .field("api_key", &mask_key(&self.api_key))
            .field("api_base", &self.api_base.as_str())
            .field("api_version", &self.api_version)
            .field("transport", &self.transport)
            .finish()
    }
}

/// Serializes the payload with keys sorted at every level.
fn build_payload(payload: Option<&Map<String, Value>>) -> Result<String, RequestError> {
    match payload {
        Some(map) => serde_json::to_string(&sorted_map(map)).map_err(RequestError::InvalidPayload),
        None => Ok("{}".to_string()),
    }
}

/// A JSON value that serializes its object keys in lexicographic order,
/// whatever order the underlying `Map` iterates in.
struct SortedKeys<'a>(&'a Value);

impl Serialize for SortedKeys<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Object(map) => sorted_map(map).serialize(serializer),
            Value::Array(items) => serializer.collect_seq(items.iter().map(SortedKeys)),
            other => other.serialize(serializer),
        }
    }
}

fn sorted_map(map: &Map<String, Value>) -> BTreeMap<&str, SortedKeys<'_>> {
    map.iter()
        .map(|(key, value)| (key.as_str(), SortedKeys(value)))
        .collect()
}

/// Keeps the key prefix (`skey_test_`) and hides the rest.
fn mask_key(key: &str) -> String {
    let prefix = key.rfind('_').map_or("", |index| &key[..=index]);
    format!("{prefix}*****")
}

fn masked_headers(headers: &BTreeMap<String, String>) -> BTreeMap<&str, &str> {
    headers
        .iter()
        .map(|(key, value)| {
            if key.eq_ignore_ascii_case("Authorization") {
                (key.as_str(), "Basic *****")
            } else {
                (key.as_str(), value.as_str())
            }
        })
        .collect()
}

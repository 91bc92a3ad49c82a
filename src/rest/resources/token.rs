//! Card token resource.
//!
//! Tokens are created on the vault host with the public key. The card
//! fields passed to [`Create::create`] are sent wrapped under a `card` key.
//!
//! In production, tokens should be created client-side so that card
//! numbers never reach the merchant's server. Creating them here is meant
//! for test mode.
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::rest::Create;
//! use omise::Token;
//! use serde_json::json;
//!
//! let token = Token::create(&client, &json!({
//!     "name": "Somchai Prasert",
//!     "number": "4242424242424242",
//!     "expiration_month": 10,
//!     "expiration_year": 2030,
//!     "security_code": 123
//! }))
//! .await?;
//! ```

use serde_json::{Map, Value};

use crate::config::ApiHost;
use crate::rest::{api_resource, Create, Endpoint, Reload, Retrieve};

api_resource!(
    /// A single-use card token.
    Token,
    "token"
);

impl Endpoint for Token {
    const HOST: ApiHost = ApiHost::Vault;
    const COLLECTION_PATH: &'static str = "tokens";
}

impl Create for Token {
    fn create_payload(params: Map<String, Value>) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("card".to_string(), Value::Object(params));
        payload
    }
}

impl Retrieve for Token {}
impl Reload for Token {}

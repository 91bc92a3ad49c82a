//! Search resource.
//!
//! Searches run against one scope (`charge`, `customer`, `dispute`,
//! `recipient`, ...) and return a page of matching resources. Options are
//! sent in the query string; object-valued options are expanded one level
//! into `key[sub]=value` pairs:
//!
//! ```text
//! {"query": "thb", "filters": {"amount": "1000..2000", "captured": true}}
//! -> search?scope=charge&filters[amount]=1000..2000&filters[captured]=true&query=thb
//! ```
//!
//! The result shares the page semantics of
//! [`Collection`](crate::rest::Collection) through [`Page`].
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::rest::Page;
//! use omise::{Charge, Search};
//! use serde_json::json;
//!
//! let results = Search::execute(&client, "charge", &json!({
//!     "query": "thb",
//!     "filters": {"amount": "1000..2000", "captured": true}
//! }))
//! .await?;
//!
//! let charges: Vec<Charge> = results.items_as()?;
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpMethod, OmiseClient};
use crate::rest::resource::{fetch, to_params};
use crate::rest::{api_resource, Endpoint, Page, ResourceError};

api_resource!(
    /// A page of search results.
    Search,
    "search"
);

impl Endpoint for Search {
    const COLLECTION_PATH: &'static str = "search";
}

impl Page for Search {}

impl Search {
    /// Runs a search over `scope` with the given options.
    ///
    /// `options` must serialize to a JSON object (or `null` for none).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParams`] if `options` is not an
    /// object, and propagates request errors.
    pub async fn execute<P: Serialize + ?Sized>(
        client: &OmiseClient,
        scope: &str,
        options: &P,
    ) -> Result<Self, ResourceError> {
        let query = search_query(scope, options)?;
        let path = Self::collection_path().join(query);
        fetch(client, Self::HOST, HttpMethod::Get, &path, None).await
    }
}

/// Builds `?scope=..&key=value&key[sub]=value` with percent-encoded values
/// and keys in sorted order.
fn search_query<P: Serialize + ?Sized>(scope: &str, options: &P) -> Result<String, ResourceError> {
    let mut pairs = vec![format!("scope={}", urlencoding::encode(scope))];

    let options: BTreeMap<String, Value> = to_params(options)?.into_iter().collect();
    for (key, value) in options {
        match value {
            Value::Object(nested) => {
                let nested: BTreeMap<String, Value> = nested.into_iter().collect();
                for (sub, value) in nested {
                    pairs.push(format!("{key}[{sub}]={}", encode_value(&value)));
                }
            }
            value => pairs.push(format!("{key}={}", encode_value(&value))),
        }
    }

    Ok(format!("?{}", pairs.join("&")))
}

fn encode_value(value: &Value) -> String {
    match value {
        Value::String(s) => urlencoding::encode(s).into_owned(),
        other => urlencoding::encode(&other.to_string()).into_owned(),
    }
}

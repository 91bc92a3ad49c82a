//! Eager collections: one already-fetched page of results.
//!
//! A page is a JSON object of the form
//! `{"object": "list", "data": [...], "total", "limit", "offset", "from", "to", "location", "order"}`.
//! [`Collection`] (discriminator `list`) and
//! [`Search`](crate::rest::resources::Search) both expose it through the
//! [`Page`] trait. Items stay raw in `data` and are materialized on access.
//!
//! # Example
//!
//! ```rust
//! use omise::rest::{materialize, Collection, Page};
//! use serde_json::json;
//!
//! let page: Collection = materialize(json!({
//!     "object": "list",
//!     "total": 2,
//!     "data": [
//!         {"object": "card", "id": "card_1"},
//!         {"object": "card", "id": "card_2"}
//!     ]
//! }))
//! .unwrap()
//! .downcast()
//! .unwrap();
//!
//! assert_eq!(page.len(), 2);
//! assert_eq!(page.get(-1).unwrap(), page.get(1).unwrap());
//! assert!(page.lookup("card_3").unwrap().is_none());
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::rest::errors::ResourceError;
use crate::rest::registry::{materialize, Materialized};
use crate::rest::resource::ApiResource;
use crate::rest::api_resource;

api_resource!(
    /// A single page of list results (discriminator `list`).
    Collection,
    "list"
);

impl Page for Collection {}

/// Sort order for paginated listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Oldest first.
    Chronological,
    /// Newest first.
    ReverseChronological,
}

impl Order {
    /// Returns the order as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chronological => "chronological",
            Self::ReverseChronological => "reverse_chronological",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sequence semantics over a page's `data` array.
///
/// Nothing here touches the network.
pub trait Page: ApiResource {
    /// Returns the raw items. Empty if `data` is missing or not an array.
    fn raw_items(&self) -> &[Value] {
        self.as_object()
            .attributes()
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of items on this page.
    fn len(&self) -> usize {
        self.raw_items().len()
    }

    /// Returns `true` if this page has no items.
    fn is_empty(&self) -> bool {
        self.raw_items().is_empty()
    }

    /// Materializes the item at `index`. Negative indices count from the end.
    ///
    /// Returns `Ok(None)` when the index is out of range.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the item lacks a
    /// discriminator.
    fn get(&self, index: isize) -> Result<Option<Materialized>, ResourceError> {
        let items = self.raw_items();
        let resolved = if index < 0 {
            items.len().checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        resolved
            .and_then(|i| items.get(i))
            .map(|item| materialize(item.clone()))
            .transpose()
    }

    /// Iterates the items in order, materializing each one.
    fn iter(&self) -> impl Iterator<Item = Result<Materialized, ResourceError>> + '_ {
        self.raw_items().iter().map(|item| materialize(item.clone()))
    }

    /// Materializes every item on the page.
    ///
    /// # Errors
    ///
    /// Returns the first materialization error.
    fn items(&self) -> Result<Vec<Materialized>, ResourceError> {
        self.iter().collect()
    }

    /// Converts every item on the page into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedObject`] if an item is not a `T`.
    fn items_as<T: ApiResource>(&self) -> Result<Vec<T>, ResourceError> {
        self.iter().map(|item| item?.downcast()).collect()
    }

    /// Finds the item whose `id` equals `id` among the raw items.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the match lacks a
    /// discriminator.
    fn lookup(&self, id: &str) -> Result<Option<Materialized>, ResourceError> {
        self.raw_items()
            .iter()
            .find(|item| item.get("id").and_then(Value::as_str) == Some(id))
            .map(|item| materialize(item.clone()))
            .transpose()
    }

    /// Total number of items across all pages.
    fn total(&self) -> Option<i64> {
        self.as_object().get_i64("total").ok()
    }

    /// The page size the server applied.
    fn limit(&self) -> Option<i64> {
        self.as_object().get_i64("limit").ok()
    }

    /// Offset of the first item on this page.
    fn offset(&self) -> Option<i64> {
        self.as_object().get_i64("offset").ok()
    }

    /// Sort order, if the server reported one.
    fn order(&self) -> Option<&str> {
        self.as_object().get_str("order").ok()
    }

    /// Path of the list endpoint this page came from.
    fn location(&self) -> Option<&str> {
        self.as_object().get_str("location").ok()
    }

    /// Lower bound of the page's time window.
    fn from(&self) -> Option<DateTime<Utc>> {
        self.as_object().get_datetime("from").ok()
    }

    /// Upper bound of the page's time window.
    fn to(&self) -> Option<DateTime<Utc>> {
        self.as_object().get_datetime("to").ok()
    }
}

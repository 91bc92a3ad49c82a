//! Card resource.
//!
//! Cards are never created directly: a [`Token`](super::Token) is attached
//! to a customer, and the resulting card is read back through the customer.
//! Each card carries a `location` field with its own nested path
//! (`/customers/{customer}/cards/{card}`), which is where reload, update,
//! and destroy are sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::rest::{Destroy, Retrieve, Update};
//! use omise::{Card, Customer};
//! use serde_json::json;
//!
//! let customer = Customer::retrieve(&client, "cust_test_1").await?;
//! let mut cards = customer.list_cards(&client)?;
//! while let Some(item) = cards.next().await? {
//!     let mut card: Card = item.downcast()?;
//!     card.update(&client, &json!({"name": "Somchai Prasert"})).await?;
//! }
//! ```

use crate::clients::RequestPath;
use crate::rest::resources::location_path;
use crate::rest::{
    api_resource, ApiResource, Destroy, Endpoint, Reload, ResourceError, Update,
};

api_resource!(
    /// A stored card belonging to a customer.
    Card,
    "card"
);

impl Endpoint for Card {
    const COLLECTION_PATH: &'static str = "cards";

    fn self_path(&self) -> Result<RequestPath, ResourceError> {
        location_path(self.as_object())
    }
}

impl Reload for Card {}

impl Update for Card {}

impl Destroy for Card {
    fn is_destroyed(&self) -> bool {
        self.get_bool("deleted").unwrap_or(false)
    }
}

//! Customer resource.
//!
//! Customers hold stored cards (attached by passing a token as `card` on
//! create or update) and own charge schedules.
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::rest::{Create, Destroy, Update};
//! use omise::Customer;
//! use serde_json::json;
//!
//! let mut customer = Customer::create(&client, &json!({
//!     "email": "john.doe@example.com",
//!     "card": "tokn_test_4xs9408a642a1htto8z"
//! }))
//! .await?;
//!
//! customer.set("description", "Loyal customer");
//! customer.update(&client, &()).await?;
//!
//! customer.destroy(&client).await?;
//! assert!(customer.is_destroyed());
//! ```

use crate::clients::{HttpMethod, OmiseClient};
use crate::rest::resource::fetch;
use crate::rest::{
    api_resource, Collection, Create, Destroy, Endpoint, LazyCollection, Listable, Reload,
    ResourceError, Retrieve, RetrieveAll, Update,
};

api_resource!(
    /// A customer of the account.
    Customer,
    "customer"
);

impl Endpoint for Customer {
    const COLLECTION_PATH: &'static str = "customers";
}

impl Create for Customer {}
impl Retrieve for Customer {}
impl RetrieveAll for Customer {}
impl Listable for Customer {}
impl Reload for Customer {}
impl Update for Customer {}

impl Destroy for Customer {
    fn is_destroyed(&self) -> bool {
        self.get_bool("deleted").unwrap_or(false)
    }
}

impl Customer {
    /// Returns a lazy collection over the customer's cards.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the customer has no id.
    pub fn list_cards(&self, client: &OmiseClient) -> Result<LazyCollection, ResourceError> {
        self.nested_collection(client, "cards")
    }

    /// Returns a lazy collection over the customer's schedules.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the customer has no id.
    pub fn list_schedules(&self, client: &OmiseClient) -> Result<LazyCollection, ResourceError> {
        self.nested_collection(client, "schedules")
    }

    /// Retrieves the customer's schedules as one page.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn schedules(&self, client: &OmiseClient) -> Result<Collection, ResourceError> {
        let path = self.nested_path("schedules")?;
        fetch(client, Self::HOST, HttpMethod::Get, &path, None).await
    }

    fn nested_collection(
        &self,
        client: &OmiseClient,
        segment: &str,
    ) -> Result<LazyCollection, ResourceError> {
        Ok(LazyCollection::new(
            client.clone(),
            Self::HOST,
            self.nested_path(segment)?,
        ))
    }
}

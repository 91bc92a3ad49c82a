//! Charge resource.
//!
//! A charge debits a card or source. Charges created with `capture: false`
//! are only authorized and must later be captured or reversed.
//!
//! # Resource-Specific Operations
//!
//! - [`Charge::capture`] - capture an authorized charge
//! - [`Charge::reverse`] - release an uncaptured authorization
//! - [`Charge::refund`] - refund a captured charge, then reload it
//! - [`Charge::list_refunds`] - page through the refunds of a charge
//! - [`Charge::schedules`] - all charge schedules of the account
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::rest::{Create, Retrieve};
//! use omise::Charge;
//! use serde_json::json;
//!
//! let mut charge = Charge::create(&client, &json!({
//!     "amount": 100000,
//!     "currency": "thb",
//!     "card": "tokn_test_4xs9408a642a1htto8z",
//!     "capture": false
//! }))
//! .await?;
//!
//! charge.capture(&client).await?;
//! let refund = charge.refund(&client, &json!({"amount": 10000})).await?;
//! ```

use serde::Serialize;

use crate::clients::{HttpMethod, OmiseClient, RequestPath};
use crate::rest::resource::{fetch, to_params};
use crate::rest::resources::Refund;
use crate::rest::{
    api_resource, ApiResource, Collection, Create, Endpoint, LazyCollection, Listable, Reload,
    ResourceError, Retrieve, RetrieveAll, Update,
};

api_resource!(
    /// A charge against a card or payment source.
    Charge,
    "charge"
);

impl Endpoint for Charge {
    const COLLECTION_PATH: &'static str = "charges";
}

impl Create for Charge {}
impl Retrieve for Charge {}
impl RetrieveAll for Charge {}
impl Listable for Charge {}
impl Reload for Charge {}
impl Update for Charge {}

impl Charge {
    /// Captures an authorized charge and reloads from the response.
    ///
    /// # Errors
    ///
    /// Propagates request errors; fails with
    /// [`ResourceError::FieldNotFound`] if the charge has no id.
    pub async fn capture(&mut self, client: &OmiseClient) -> Result<(), ResourceError> {
        self.sub_action(client, "capture").await
    }

    /// Reverses an uncaptured charge and reloads from the response.
    ///
    /// # Errors
    ///
    /// Same as [`capture`](Self::capture).
    pub async fn reverse(&mut self, client: &OmiseClient) -> Result<(), ResourceError> {
        self.sub_action(client, "reverse").await
    }

    async fn sub_action(&mut self, client: &OmiseClient, action: &str) -> Result<(), ResourceError> {
        let path = self.nested_path(action)?;
        let data = client
            .request(Self::HOST, HttpMethod::Post, &path, None)
            .await?;
        self.as_object_mut().reload_value(data)
    }

    /// Creates a refund for this charge.
    ///
    /// The charge itself is reloaded afterwards so that its `refunded`
    /// amount reflects the new refund. This takes two round trips.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParams`] if `params` is not an object
    /// and propagates request errors from either request.
    pub async fn refund<P: Serialize + ?Sized>(
        &mut self,
        client: &OmiseClient,
        params: &P,
    ) -> Result<Refund, ResourceError> {
        let payload = to_params(params)?;
        let path = self.nested_path("refunds")?;
        let refund = fetch(client, Self::HOST, HttpMethod::Post, &path, Some(&payload)).await?;
        self.reload(client).await?;
        Ok(refund)
    }

    /// Returns a lazy collection over `charges/{id}/refunds`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the charge has no id.
    pub fn list_refunds(&self, client: &OmiseClient) -> Result<LazyCollection, ResourceError> {
        Ok(LazyCollection::new(
            client.clone(),
            Self::HOST,
            self.nested_path("refunds")?,
        ))
    }

    /// Retrieves all charge schedules (`charges/schedules`) as one page.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn schedules(client: &OmiseClient) -> Result<Collection, ResourceError> {
        let path = RequestPath::new([Self::COLLECTION_PATH, "schedules"]);
        fetch(client, Self::HOST, HttpMethod::Get, &path, None).await
    }
}

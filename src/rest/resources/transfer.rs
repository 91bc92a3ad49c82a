//! Transfer resource.
//!
//! Transfers move money from the account balance to a
//! [`Recipient`](super::Recipient), or to the account's default bank
//! account when no recipient is given. Pending transfers can be updated or
//! destroyed.

use crate::rest::{
    api_resource, Create, Destroy, Endpoint, Listable, Reload, Retrieve, RetrieveAll, Update,
};

api_resource!(
    /// A payout from the account balance.
    Transfer,
    "transfer"
);

impl Endpoint for Transfer {
    const COLLECTION_PATH: &'static str = "transfers";
}

impl Create for Transfer {}
impl Retrieve for Transfer {}
impl RetrieveAll for Transfer {}
impl Listable for Transfer {}
impl Reload for Transfer {}
impl Update for Transfer {}

impl Destroy for Transfer {
    fn is_destroyed(&self) -> bool {
        self.get_bool("deleted").unwrap_or(false)
    }
}

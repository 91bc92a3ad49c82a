//! Recipient resource.
//!
//! Recipients are the destinations of transfers. Each one holds a
//! [`BankAccount`](super::BankAccount), read through `get("bank_account")`.

use crate::rest::{
    api_resource, Create, Destroy, Endpoint, Listable, Reload, Retrieve, RetrieveAll, Update,
};

api_resource!(
    /// A transfer recipient.
    Recipient,
    "recipient"
);

impl Endpoint for Recipient {
    const COLLECTION_PATH: &'static str = "recipients";
}

impl Create for Recipient {}
impl Retrieve for Recipient {}
impl RetrieveAll for Recipient {}
impl Listable for Recipient {}
impl Reload for Recipient {}
impl Update for Recipient {}

impl Destroy for Recipient {
    fn is_destroyed(&self) -> bool {
        self.get_bool("deleted").unwrap_or(false)
    }
}

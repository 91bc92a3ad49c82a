//! Balance transactions: every credit and debit applied to the account.

use crate::rest::{api_resource, Endpoint, Listable, Reload, Retrieve, RetrieveAll};

api_resource!(
    /// A credit or debit on the account balance.
    Transaction,
    "transaction"
);

impl Endpoint for Transaction {
    const COLLECTION_PATH: &'static str = "transactions";
}

impl Retrieve for Transaction {}
impl RetrieveAll for Transaction {}
impl Listable for Transaction {}
impl Reload for Transaction {}

//! Payment sources: non-card payment methods (internet banking, wallets,
//! bill payment) that a charge can be made against.

use crate::rest::{api_resource, Create, Endpoint};

api_resource!(Source, "source");

impl Endpoint for Source {
    const COLLECTION_PATH: &'static str = "sources";
}

impl Create for Source {}

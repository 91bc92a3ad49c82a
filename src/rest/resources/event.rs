//! Event resource.
//!
//! Events record every change on the account (`charge.create`,
//! `customer.update`, ...) and are the payloads delivered to webhooks. They
//! are read-only.

use crate::rest::{api_resource, Endpoint, Listable, Reload, Retrieve, RetrieveAll};

api_resource!(
    /// An account event. `key` names what happened, `data` holds the
    /// affected resource.
    Event,
    "event"
);

impl Endpoint for Event {
    const COLLECTION_PATH: &'static str = "events";
}

impl Retrieve for Event {}
impl RetrieveAll for Event {}
impl Listable for Event {}
impl Reload for Event {}

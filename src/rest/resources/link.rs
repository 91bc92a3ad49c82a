//! Payment links: hosted payment pages with a fixed amount.

use crate::rest::{api_resource, Create, Endpoint, Listable, Reload, Retrieve, RetrieveAll};

api_resource!(
    /// A payment link.
    Link,
    "link"
);

impl Endpoint for Link {
    const COLLECTION_PATH: &'static str = "links";
}

impl Create for Link {}
impl Retrieve for Link {}
impl RetrieveAll for Link {}
impl Listable for Link {}
impl Reload for Link {}

//! Refund resource.
//!
//! Refunds are created through [`Charge::refund`](super::Charge::refund).
//! Like cards, each refund carries its nested `location`
//! (`/charges/{charge}/refunds/{refund}`), which is where it reloads from.

use crate::clients::RequestPath;
use crate::rest::resources::location_path;
use crate::rest::{api_resource, ApiResource, Endpoint, Listable, Reload, ResourceError};

api_resource!(
    /// A full or partial refund of a charge.
    Refund,
    "refund"
);

impl Endpoint for Refund {
    const COLLECTION_PATH: &'static str = "refunds";

    fn self_path(&self) -> Result<RequestPath, ResourceError> {
        location_path(self.as_object())
    }
}

impl Listable for Refund {}
impl Reload for Refund {}

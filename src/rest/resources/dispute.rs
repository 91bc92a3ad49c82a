//! Dispute resource.
//!
//! Disputes are opened by card holders against charges. They can be
//! retrieved individually, listed in full, or filtered by
//! [`DisputeStatus`] through the `disputes/{status}` collections.

use std::fmt;

use serde::Serialize;

use crate::clients::{HttpMethod, OmiseClient};
use crate::rest::resource::fetch;
use crate::rest::{
    api_resource, Collection, Endpoint, LazyCollection, Listable, Reload, ResourceError,
    Retrieve, RetrieveAll, Update,
};

api_resource!(
    /// A charge dispute.
    Dispute,
    "dispute"
);

/// The status filter for dispute collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeStatus {
    /// Awaiting a response from the merchant.
    Open,
    /// Response submitted, under review.
    Pending,
    /// Resolved, won or lost.
    Closed,
}

impl DisputeStatus {
    /// Returns the path segment for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Endpoint for Dispute {
    const COLLECTION_PATH: &'static str = "disputes";
}

impl Retrieve for Dispute {}
impl RetrieveAll for Dispute {}
impl Listable for Dispute {}
impl Reload for Dispute {}
impl Update for Dispute {}

impl Dispute {
    /// Retrieves the first page of disputes with the given status.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn retrieve_by_status(
        client: &OmiseClient,
        status: DisputeStatus,
    ) -> Result<Collection, ResourceError> {
        let path = Self::collection_path().join(status);
        fetch(client, Self::HOST, HttpMethod::Get, &path, None).await
    }

    /// Returns a lazy collection over disputes with the given status.
    #[must_use]
    pub fn list_by_status(client: &OmiseClient, status: DisputeStatus) -> LazyCollection {
        LazyCollection::new(
            client.clone(),
            Self::HOST,
            Self::collection_path().join(status),
        )
    }

    /// Shorthand for [`list_by_status`](Self::list_by_status) with
    /// [`DisputeStatus::Open`].
    #[must_use]
    pub fn list_open(client: &OmiseClient) -> LazyCollection {
        Self::list_by_status(client, DisputeStatus::Open)
    }

    /// Shorthand for [`list_by_status`](Self::list_by_status) with
    /// [`DisputeStatus::Pending`].
    #[must_use]
    pub fn list_pending(client: &OmiseClient) -> LazyCollection {
        Self::list_by_status(client, DisputeStatus::Pending)
    }

    /// Shorthand for [`list_by_status`](Self::list_by_status) with
    /// [`DisputeStatus::Closed`].
    #[must_use]
    pub fn list_closed(client: &OmiseClient) -> LazyCollection {
        Self::list_by_status(client, DisputeStatus::Closed)
    }
}

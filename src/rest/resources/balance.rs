//! The current account balance.

use crate::clients::{HttpMethod, OmiseClient, RequestPath};
use crate::rest::resource::fetch;
use crate::rest::{api_resource, Endpoint, Reload, ResourceError};

api_resource!(
    /// Current balance. Has no id and cannot be modified.
    Balance,
    "balance"
);

impl Endpoint for Balance {
    const COLLECTION_PATH: &'static str = "balance";

    fn instance_path(_id: &str) -> RequestPath {
        Self::collection_path()
    }

    fn self_path(&self) -> Result<RequestPath, ResourceError> {
        Ok(Self::collection_path())
    }
}

impl Reload for Balance {}

impl Balance {
    /// Retrieves the balance of the account.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn retrieve(client: &OmiseClient) -> Result<Self, ResourceError> {
        fetch(client, Self::HOST, HttpMethod::Get, &Self::collection_path(), None).await
    }
}

//! The account tied to the secret key.

use crate::clients::{HttpMethod, OmiseClient, RequestPath};
use crate::rest::resource::fetch;
use crate::rest::{api_resource, Endpoint, Reload, ResourceError};

api_resource!(
    /// Account details: creator email, currency, creation date.
    ///
    /// There is exactly one account per key, so it is retrieved without an id.
    Account,
    "account"
);

impl Endpoint for Account {
    const COLLECTION_PATH: &'static str = "account";

    fn instance_path(_id: &str) -> RequestPath {
        Self::collection_path()
    }

    fn self_path(&self) -> Result<RequestPath, ResourceError> {
        Ok(Self::collection_path())
    }
}

impl Reload for Account {}

impl Account {
    /// Retrieves the account associated with the secret key.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn retrieve(client: &OmiseClient) -> Result<Self, ResourceError> {
        fetch(client, Self::HOST, HttpMethod::Get, &Self::collection_path(), None).await
    }
}

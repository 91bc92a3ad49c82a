//! Chain resource.
//!
//! A chain links a sub-merchant account to this account. Chains are created
//! by the sub-merchant accepting an invitation, so they can only be read
//! and revoked here.

use crate::clients::{HttpMethod, OmiseClient};
use crate::rest::{
    api_resource, ApiResource, Endpoint, Listable, Reload, ResourceError, Retrieve, RetrieveAll,
};

api_resource!(
    /// A link to a sub-merchant account.
    Chain,
    "chain"
);

impl Endpoint for Chain {
    const COLLECTION_PATH: &'static str = "chains";
}

impl Retrieve for Chain {}
impl RetrieveAll for Chain {}
impl Listable for Chain {}
impl Reload for Chain {}

impl Chain {
    /// Revokes the chain and reloads from the response.
    ///
    /// # Errors
    ///
    /// Propagates request errors; fails with
    /// [`ResourceError::FieldNotFound`] if the chain has no id.
    pub async fn revoke(&mut self, client: &OmiseClient) -> Result<(), ResourceError> {
        let path = self.nested_path("revoke")?;
        let data = client
            .request(Self::HOST, HttpMethod::Post, &path, None)
            .await?;
        self.as_object_mut().reload_value(data)
    }
}

//! Account capabilities: available payment methods, currencies, and
//! installment options.

use crate::clients::{HttpMethod, OmiseClient, RequestPath};
use crate::rest::resource::fetch;
use crate::rest::{api_resource, Endpoint, Reload, ResourceError};

api_resource!(
    /// Payment methods and features enabled for the account.
    ///
    /// Like [`Account`](super::Account), this is a singleton with no id.
    Capability,
    "capability"
);

impl Endpoint for Capability {
    const COLLECTION_PATH: &'static str = "capability";

    fn instance_path(_id: &str) -> RequestPath {
        Self::collection_path()
    }

    fn self_path(&self) -> Result<RequestPath, ResourceError> {
        Ok(Self::collection_path())
    }
}

impl Reload for Capability {}

impl Capability {
    /// Retrieves the capabilities of the account.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    pub async fn retrieve(client: &OmiseClient) -> Result<Self, ResourceError> {
        fetch(client, Self::HOST, HttpMethod::Get, &Self::collection_path(), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::transport::testing::{test_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_retrieve_and_reload() {
        let transport = MockTransport::with_json([
            json!({
                "object": "capability",
                "location": "/capability",
                "payment_methods": [
                    {"object": "payment_method", "name": "card", "currencies": ["THB", "JPY"]},
                    {"object": "payment_method", "name": "alipay", "currencies": ["THB"]}
                ],
                "country": "TH",
                "zero_interest_installments": true
            }),
            json!({"object": "capability", "zero_interest_installments": false}),
        ]);
        let client = test_client(transport.clone());

        let mut capability = Capability::retrieve(&client).await.unwrap();
        assert_eq!(capability.get_str("country").unwrap(), "TH");
        assert!(capability.get_bool("zero_interest_installments").unwrap());
        assert_eq!(capability.to_string(), "<Capability>");

        capability.reload(&client).await.unwrap();
        assert!(!capability.get_bool("zero_interest_installments").unwrap());

        let requests = transport.requests();
        assert_eq!(requests[0].url.as_str(), "https://api.omise.co/capability");
        assert_eq!(requests[1].url.as_str(), "https://api.omise.co/capability");
        assert_eq!(requests[1].method, HttpMethod::Get);
    }
}

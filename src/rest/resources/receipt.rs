//! Daily fee receipts issued to the account.

use crate::rest::{api_resource, Endpoint, Listable, Retrieve, RetrieveAll};

api_resource!(Receipt, "receipt");

impl Endpoint for Receipt {
    const COLLECTION_PATH: &'static str = "receipts";
}

impl Retrieve for Receipt {}
impl RetrieveAll for Receipt {}
impl Listable for Receipt {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::transport::testing::{test_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_pages_until_short_page() {
        let transport = MockTransport::with_json([
            json!({"object": "list", "data": [
                {"object": "receipt", "id": "rcpt_1"},
                {"object": "receipt", "id": "rcpt_2"}
            ]}),
            json!({"object": "list", "data": [{"object": "receipt", "id": "rcpt_3"}]}),
        ]);
        let client = test_client(transport.clone());

        let receipts = Receipt::list(&client)
            .with_page_size(2)
            .collect_remaining()
            .await
            .unwrap();

        assert_eq!(receipts.len(), 3);
        assert_eq!(transport.request_count(), 2);
        assert_eq!(
            transport.requests()[1].url.as_str(),
            "https://api.omise.co/receipts"
        );
    }
}

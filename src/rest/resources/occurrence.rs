//! A single run of a [`Schedule`](super::Schedule).

use crate::rest::{api_resource, Endpoint, Reload, Retrieve};

api_resource!(
    /// One scheduled execution and its outcome.
    Occurrence,
    "occurrence"
);

impl Endpoint for Occurrence {
    const COLLECTION_PATH: &'static str = "occurrences";
}

impl Retrieve for Occurrence {}
impl Reload for Occurrence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::transport::testing::{test_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_retrieve_and_reload() {
        let transport = MockTransport::with_json([
            json!({"object": "occurrence", "id": "occu_test_1", "status": "scheduled"}),
            json!({"object": "occurrence", "id": "occu_test_1", "status": "successful"}),
        ]);
        let client = test_client(transport.clone());

        let mut occurrence = Occurrence::retrieve(&client, "occu_test_1").await.unwrap();
        occurrence.reload(&client).await.unwrap();

        assert_eq!(occurrence.get_str("status").unwrap(), "successful");
        let requests = transport.requests();
        assert_eq!(requests[0].url, requests[1].url);
        assert_eq!(
            requests[1].url.as_str(),
            "https://api.omise.co/occurrences/occu_test_1"
        );
    }
}

//! Foreign exchange rates used for multi-currency charges.

use crate::rest::{api_resource, Endpoint, Retrieve};

api_resource!(
    /// The exchange rate for one currency. Retrieved by currency code,
    /// e.g. `Forex::retrieve(&client, "usd")`.
    Forex,
    "forex"
);

impl Endpoint for Forex {
    const COLLECTION_PATH: &'static str = "forex";
}

impl Retrieve for Forex {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::transport::testing::{test_client, MockTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_retrieve_by_currency() {
        let transport = MockTransport::with_json([json!({
            "object": "forex",
            "from": "usd",
            "to": "thb",
            "rate": 32.747069
        })]);
        let client = test_client(transport.clone());

        let forex = Forex::retrieve(&client, "usd").await.unwrap();
        assert_eq!(
            forex.get_raw("rate").unwrap().as_f64(),
            Some(32.747069)
        );
        assert_eq!(forex.to_string(), "<Forex>");
        assert_eq!(
            transport.requests()[0].url.as_str(),
            "https://api.omise.co/forex/usd"
        );
    }
}

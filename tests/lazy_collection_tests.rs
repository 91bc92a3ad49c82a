//! Integration tests for lazy pagination.
//!
//! Each page request is a GET carrying `{"limit", "offset", "order"}` as its
//! JSON body, so the mocks below match pages on the body.

use omise::rest::{Listable, OffsetParams, Order};
use omise::{BaseUrl, Charge, Customer, OmiseClient, OmiseConfig, SecretKey};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> OmiseClient {
    let config = OmiseConfig::builder()
        .secret_key(SecretKey::new("skey_test_123").unwrap())
        .api_base(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    OmiseClient::new(config).unwrap()
}

/// A list page holding `count` charges numbered from `start`.
fn charge_page(start: usize, count: usize) -> Value {
    let data: Vec<Value> = (start..start + count)
        .map(|i| json!({"object": "charge", "id": format!("chrg_{i}")}))
        .collect();
    json!({"object": "list", "data": data})
}

async fn mount_page(server: &MockServer, body: Value, page: Value) {
    Mock::given(method("GET"))
        .and(path("/charges"))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(200).set_body_json(page))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Streaming
// ============================================================================

#[tokio::test]
async fn test_streams_until_short_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        json!({"limit": 100, "offset": 0, "order": null}),
        charge_page(0, 100),
    )
    .await;
    mount_page(
        &server,
        json!({"limit": 100, "offset": 100, "order": null}),
        charge_page(100, 100),
    )
    .await;
    mount_page(
        &server,
        json!({"limit": 100, "offset": 200, "order": null}),
        charge_page(200, 37),
    )
    .await;

    let client = create_client(&server);
    let mut charges = Charge::list(&client);
    let mut ids = Vec::new();
    while let Some(item) = charges.next().await.unwrap() {
        let charge: Charge = item.downcast().unwrap();
        ids.push(charge.id().unwrap().to_string());
    }

    assert_eq!(ids.len(), 237);
    assert_eq!(ids[0], "chrg_0");
    assert_eq!(ids[236], "chrg_236");
    assert!(charges.is_exhausted());

    // exhausted: no further requests (the mocks expect exactly one hit each)
    assert!(charges.next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_full_page_boundary_ends_sequence() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        json!({"limit": 2, "offset": 0, "order": null}),
        charge_page(0, 2),
    )
    .await;
    mount_page(
        &server,
        json!({"limit": 2, "offset": 2, "order": null}),
        charge_page(2, 0),
    )
    .await;

    let client = create_client(&server);
    let items = Charge::list(&client)
        .with_page_size(2)
        .collect_remaining()
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_restart_begins_new_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/charges"))
        .and(body_json(json!({"limit": 100, "offset": 0, "order": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(charge_page(0, 3)))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let mut charges = Charge::list(&client);
    assert_eq!(charges.collect_remaining().await.unwrap().len(), 3);

    charges.restart();
    assert!(!charges.is_exhausted());
    assert_eq!(charges.collect_remaining().await.unwrap().len(), 3);
}

// ============================================================================
// Remote Queries
// ============================================================================

#[tokio::test]
async fn test_len_asks_for_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(body_json(json!({"limit": 1, "offset": 0, "order": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "total": 42,
            "data": [{"object": "customer", "id": "cust_1"}]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let customers = Customer::list(&client);
    assert_eq!(customers.len().await.unwrap(), 42);
    assert!(!customers.is_empty().await.unwrap());
}

#[tokio::test]
async fn test_offset_query_with_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        json!({"limit": 20, "offset": 40, "order": "reverse_chronological"}),
        charge_page(40, 20),
    )
    .await;

    let client = create_client(&server);
    let charges = Charge::list(&client);
    let items = charges
        .offset(OffsetParams {
            offset: 40,
            order: Some(Order::ReverseChronological),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(items.len(), 20);
    assert!(!charges.is_exhausted());
}

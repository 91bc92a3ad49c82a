//! # Omise API Rust Client
//!
//! A Rust client for the Omise payment API, providing type-safe
//! configuration, an authenticated transport, and dynamic resource objects
//! for charges, customers, transfers, and the rest of the API surface.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`OmiseConfig`] and [`OmiseConfigBuilder`]
//! - Validated newtypes for API keys and base URLs
//! - An async HTTP transport with Basic authentication and API version pinning
//! - Polymorphic deserialization of API payloads into typed resources
//! - Change tracking for partial updates
//! - Eager pages and lazy, on-demand pagination of collections
//!
//! ## Quick Start
//!
//! ```rust
//! use omise::{ApiVersion, OmiseConfig, PublicKey, SecretKey};
//!
//! // Create configuration using the builder pattern
//! let config = OmiseConfig::builder()
//!     .secret_key(SecretKey::new("skey_test_4xsjvwfnvb2g0l81sjz").unwrap())
//!     .public_key(PublicKey::new("pkey_test_4xs8breq32civvobx15").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use omise::rest::{Create, Listable, Retrieve, Update};
//! use omise::{Charge, Customer, OmiseClient};
//! use serde_json::json;
//!
//! let client = OmiseClient::new(config)?;
//!
//! // Create a customer with a card token
//! let mut customer = Customer::create(&client, &json!({
//!     "email": "john.doe@example.com",
//!     "card": "tokn_test_4xs9408a642a1htto8z"
//! }))
//! .await?;
//!
//! // Modify and save only what changed
//! customer.set("description", "VIP");
//! customer.update(&client, &()).await?;
//!
//! // Charge the customer
//! let charge = Charge::create(&client, &json!({
//!     "amount": 100000,
//!     "currency": "thb",
//!     "customer": customer.id()
//! }))
//! .await?;
//!
//! // Iterate over all charges, one page at a time
//! let mut charges = Charge::list(&client);
//! while let Some(item) = charges.next().await? {
//!     println!("{}", item.into_resource()?);
//! }
//! ```
//!
//! ## Errors
//!
//! API errors are surfaced with their server message verbatim:
//!
//! ```rust,ignore
//! use omise::clients::ApiErrorKind;
//!
//! match Charge::retrieve(&client, "chrg_missing").await {
//!     Err(err) if err.api_error().is_some_and(|e| e.kind == ApiErrorKind::NotFound) => {
//!         println!("no such charge: {err}");
//!     }
//!     other => { /* ... */ }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: Configuration and client are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **No retries**: Each operation issues exactly the requests it names

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiHost, ApiVersion, BaseUrl, OmiseConfig, OmiseConfigBuilder, PublicKey, SecretKey,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiError, ApiErrorKind, HttpError, HttpMethod, HttpTransport, OmiseClient, RequestError,
    ReqwestTransport,
};

// Re-export resource types
pub use rest::{
    Account, Balance, BankAccount, Capability, Card, Chain, Charge, Collection, Customer, Dispute,
    DisputeStatus, Document, Event, Forex, LazyCollection, Link, Occurrence, Receipt, Recipient,
    Refund, ResourceError, ResourceObject, Schedule, Search, Source, Token, Transaction, Transfer,
};

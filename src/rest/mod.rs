//! Resource layer for the Omise API.
//!
//! This module turns raw JSON payloads into typed resources and provides the
//! operation shapes shared by all of them:
//!
//! - **[`ResourceObject`]**: the dynamic, attribute-keyed object every
//!   resource wraps, with change tracking for partial updates
//! - **[`materialize`]**: polymorphic deserialization keyed on the `object`
//!   discriminator, producing a [`Resource`]
//! - **Operation traits**: [`Retrieve`], [`RetrieveAll`], [`Listable`],
//!   [`Create`], [`Update`], [`Reload`], [`Destroy`]
//! - **Collections**: eager pages ([`Collection`], [`Page`]) and on-demand
//!   pagination ([`LazyCollection`])
//! - **[`ResourceError`]**: semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::rest::{Create, Listable, Reload, Retrieve};
//! use omise::{Charge, OmiseClient};
//! use serde_json::json;
//!
//! let charge = Charge::retrieve(&client, "chrg_test_4xso2s8ivdej29pqnhz").await?;
//! println!("{charge}: {}", charge.get_i64("amount")?);
//!
//! let mut charges = Charge::list(&client);
//! while let Some(item) = charges.next().await? {
//!     let charge: Charge = item.downcast()?;
//!     println!("{charge}");
//! }
//! ```

mod collection;
mod errors;
mod lazy_collection;
mod object;
mod registry;
mod resource;

pub mod resources;

pub use collection::{Collection, Order, Page};
pub use errors::ResourceError;
pub use lazy_collection::{LazyCollection, OffsetParams, DEFAULT_PAGE_SIZE};
pub use object::ResourceObject;
pub use registry::{materialize, Materialized, Resource};
pub use resource::{
    to_params, ApiResource, Create, Destroy, Endpoint, Listable, Reload, Retrieve, RetrieveAll,
    Update,
};
pub use resources::{
    Account, Balance, BankAccount, Capability, Card, Chain, Charge, Customer, Dispute,
    DisputeStatus, Document, Event, Forex, Link, Occurrence, Receipt, Recipient, Refund, Schedule,
    Search, Source, Token, Transaction, Transfer,
};

pub(crate) use resource::api_resource;

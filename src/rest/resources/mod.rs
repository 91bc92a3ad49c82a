//! Concrete Omise resources.
//!
//! Each resource is a thin newtype over [`ResourceObject`] generated by
//! `api_resource!`, opting into the operation traits its endpoint
//! supports:
//!
//! | Resource | Path | Operations |
//! |---|---|---|
//! | [`Account`] | `account` | retrieve, reload |
//! | [`Balance`] | `balance` | retrieve, reload |
//! | [`BankAccount`] | nested in recipients | none |
//! | [`Capability`] | `capability` | retrieve, reload |
//! | [`Card`] | `location` | reload, update, destroy |
//! | [`Chain`] | `chains` | retrieve, list, reload, revoke |
//! | [`Charge`] | `charges` | create, retrieve, list, reload, update, capture, reverse, refund |
//! | [`Customer`] | `customers` | create, retrieve, list, reload, update, destroy, cards, schedules |
//! | [`Dispute`] | `disputes` | retrieve, list (by status), reload, update |
//! | [`Document`] | `location` | retrieve (per dispute), reload, destroy |
//! | [`Event`] | `events` | retrieve, list, reload |
//! | [`Forex`] | `forex/{currency}` | retrieve |
//! | [`Link`] | `links` | create, retrieve, list, reload |
//! | [`Occurrence`] | `occurrences` | retrieve, reload |
//! | [`Receipt`] | `receipts` | retrieve, list |
//! | [`Recipient`] | `recipients` | create, retrieve, list, reload, update, destroy |
//! | [`Refund`] | `location` | list, reload |
//! | [`Schedule`] | `schedules` | create, retrieve, list, reload, destroy, occurrences |
//! | [`Search`] | `search` | execute |
//! | [`Source`] | `sources` | create |
//! | [`Token`] | `tokens` (vault) | create, retrieve, reload |
//! | [`Transaction`] | `transactions` | retrieve, list, reload |
//! | [`Transfer`] | `transfers` | create, retrieve, list, reload, update, destroy |
//!
//! Nothing outside this table is reachable through a typed resource; unknown
//! discriminators materialize as [`Resource::Object`](crate::rest::Resource::Object).

mod account;
mod balance;
mod bank_account;
mod capability;
mod card;
mod chain;
mod charge;
mod customer;
mod dispute;
mod document;
mod event;
mod forex;
mod link;
mod occurrence;
mod receipt;
mod recipient;
mod refund;
mod schedule;
mod search;
mod source;
mod token;
mod transaction;
mod transfer;

pub use account::Account;
pub use balance::Balance;
pub use bank_account::BankAccount;
pub use capability::Capability;
pub use card::Card;
pub use chain::Chain;
pub use charge::Charge;
pub use customer::Customer;
pub use dispute::{Dispute, DisputeStatus};
pub use document::Document;
pub use event::Event;
pub use forex::Forex;
pub use link::Link;
pub use occurrence::Occurrence;
pub use receipt::Receipt;
pub use recipient::Recipient;
pub use refund::Refund;
pub use schedule::Schedule;
pub use search::Search;
pub use source::Source;
pub use token::Token;
pub use transaction::Transaction;
pub use transfer::Transfer;

use crate::clients::RequestPath;
use crate::rest::{ResourceError, ResourceObject};

/// The path stored in an object's `location` field, e.g.
/// `/customers/cust_1/cards/card_1`.
pub(crate) fn location_path(object: &ResourceObject) -> Result<RequestPath, ResourceError> {
    let location = object.get_str("location")?;
    Ok(RequestPath::new(
        location
            .trim_start_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty()),
    ))
}

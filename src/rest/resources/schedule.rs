//! Schedule resource.
//!
//! A schedule runs a charge or transfer periodically. Each run is recorded
//! as an [`Occurrence`](super::Occurrence).
//!
//! Unlike most deletable resources, a destroyed schedule is signaled by
//! `status: "deleted"` rather than a `deleted` flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::rest::{Create, Page};
//! use omise::Schedule;
//! use serde_json::json;
//!
//! let schedule = Schedule::create(&client, &json!({
//!     "every": 1,
//!     "period": "month",
//!     "on": {"days_of_month": [1]},
//!     "start_date": "2026-01-01",
//!     "end_date": "2027-01-01",
//!     "charge": {"customer": "cust_test_1", "amount": 100000}
//! }))
//! .await?;
//!
//! for occurrence in schedule.occurrences(&client).await?.iter() {
//!     println!("{}", occurrence?.into_resource()?);
//! }
//! ```

use crate::clients::{HttpMethod, OmiseClient};
use crate::rest::resource::fetch;
use crate::rest::{
    api_resource, Collection, Create, Destroy, Endpoint, Listable, Reload, ResourceError,
    Retrieve, RetrieveAll,
};

api_resource!(
    /// A recurring charge or transfer.
    Schedule,
    "schedule"
);

impl Endpoint for Schedule {
    const COLLECTION_PATH: &'static str = "schedules";
}

impl Create for Schedule {}
impl Retrieve for Schedule {}
impl RetrieveAll for Schedule {}
impl Listable for Schedule {}
impl Reload for Schedule {}

impl Destroy for Schedule {
    fn is_destroyed(&self) -> bool {
        self.get_str("status").is_ok_and(|status| status == "deleted")
    }
}

impl Schedule {
    /// Retrieves the occurrences of this schedule as one page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the schedule has no id,
    /// and propagates request errors.
    pub async fn occurrences(&self, client: &OmiseClient) -> Result<Collection, ResourceError> {
        let path = self.nested_path("occurrences")?;
        fetch(client, Self::HOST, HttpMethod::Get, &path, None).await
    }
}

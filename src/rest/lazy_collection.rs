//! Lazy, paginated collections.
//!
//! A [`LazyCollection`] is bound to a collection endpoint and fetches pages
//! on demand. Streaming iteration moves strictly forward, 100 items per page
//! by default, and stops for good once a page comes back short.
//!
//! Page requests are `GET`s whose JSON body carries the paging parameters:
//! `{"limit": 100, "offset": 200, "order": null}`.

use std::collections::VecDeque;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, OmiseClient, RequestPath};
use crate::config::ApiHost;
use crate::rest::collection::Order;
use crate::rest::errors::ResourceError;
use crate::rest::registry::{materialize, Materialized};
use crate::rest::resource::to_params;

/// Default page size for streaming iteration.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Parameters for a one-shot [`LazyCollection::offset`] query.
///
/// Defaults to `limit = 20`, `offset = 0`, no explicit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OffsetParams {
    /// Maximum number of items to return.
    pub limit: u32,
    /// Number of items to skip.
    pub offset: u64,
    /// Sort order; `None` sends `null` and lets the server decide.
    pub order: Option<Order>,
}

impl Default for OffsetParams {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            order: None,
        }
    }
}

/// An on-demand, paginated view of a collection endpoint.
///
/// # Example
///
/// ```rust,ignore
/// use omise::rest::{Listable, OffsetParams, Order};
/// use omise::Charge;
///
/// let mut charges = Charge::list(&client);
/// println!("{} charges in total", charges.len().await?);
///
/// while let Some(charge) = charges.next().await? {
///     println!("{charge:?}");
/// }
///
/// let newest = charges
///     .offset(OffsetParams { order: Some(Order::ReverseChronological), ..Default::default() })
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct LazyCollection {
    client: OmiseClient,
    host: ApiHost,
    path: RequestPath,
    page_size: u32,
    yielded: u64,
    exhausted: bool,
    buffer: VecDeque<Value>,
}

impl LazyCollection {
    /// Creates a lazy collection over `path` on `host`.
    #[must_use]
    pub fn new(client: OmiseClient, host: ApiHost, path: RequestPath) -> Self {
        Self {
            client,
            host,
            path,
            page_size: DEFAULT_PAGE_SIZE,
            yielded: 0,
            exhausted: false,
            buffer: VecDeque::new(),
        }
    }

    /// Overrides the streaming page size. Zero is treated as one.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Returns the collection path.
    #[must_use]
    pub const fn path(&self) -> &RequestPath {
        &self.path
    }

    /// Returns the streaming page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns `true` once a short page has been seen in this session.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns the server-side total, fetched with a `limit = 1` request.
    ///
    /// This is a remote call every time; buffered items are not counted.
    ///
    /// # Errors
    ///
    /// Propagates request errors; returns [`ResourceError::FieldNotFound`]
    /// or [`ResourceError::FieldType`] if the page has no integer `total`.
    pub async fn len(&self) -> Result<u64, ResourceError> {
        let page = self.fetch_page(1, 0, None).await?;
        let total = page
            .get("total")
            .ok_or_else(|| ResourceError::field_not_found("total"))?;
        total.as_u64().ok_or_else(|| ResourceError::FieldType {
            field: "total".to_string(),
            expected: "a non-negative integer",
        })
    }

    /// Returns `true` if the server-side total is zero.
    ///
    /// # Errors
    ///
    /// Same as [`len`](Self::len).
    pub async fn is_empty(&self) -> Result<bool, ResourceError> {
        Ok(self.len().await? == 0)
    }

    /// Yields the next item, fetching a page when the buffer runs dry.
    ///
    /// Returns `Ok(None)` at the end of the sequence. Once a page returns
    /// fewer items than the page size, no further requests are made until
    /// [`restart`](Self::restart).
    ///
    /// # Errors
    ///
    /// Propagates request and materialization errors.
    pub async fn next(&mut self) -> Result<Option<Materialized>, ResourceError> {
        if self.buffer.is_empty() && !self.next_batch().await? {
            return Ok(None);
        }

        let Some(item) = self.buffer.pop_front() else {
            return Ok(None);
        };
        self.yielded += 1;
        materialize(item).map(Some)
    }

    /// Drains the rest of the sequence into a vector.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub async fn collect_remaining(&mut self) -> Result<Vec<Materialized>, ResourceError> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Fetches a single page at an explicit offset.
    ///
    /// Independent of the streaming state: the buffer, cursor, and
    /// exhaustion flag are left untouched.
    ///
    /// # Errors
    ///
    /// Propagates request and materialization errors.
    pub async fn offset(&self, params: OffsetParams) -> Result<Vec<Materialized>, ResourceError> {
        let page = self
            .fetch_page(params.limit, params.offset, params.order)
            .await?;
        take_data(page)?.into_iter().map(materialize).collect()
    }

    /// Starts a new iteration session from the beginning.
    pub fn restart(&mut self) {
        self.buffer.clear();
        self.yielded = 0;
        self.exhausted = false;
    }

    /// Fills the buffer with the next page. Returns `false` at the end.
    async fn next_batch(&mut self) -> Result<bool, ResourceError> {
        if self.exhausted {
            return Ok(false);
        }

        let page = self.fetch_page(self.page_size, self.yielded, None).await?;
        let data = take_data(page)?;
        if data.is_empty() {
            return Ok(false);
        }

        if data.len() < self.page_size as usize {
            self.exhausted = true;
        }
        self.buffer.extend(data);
        Ok(true)
    }

    async fn fetch_page(
        &self,
        limit: u32,
        offset: u64,
        order: Option<Order>,
    ) -> Result<Map<String, Value>, ResourceError> {
        tracing::debug!(
            "Fetching page of {} (limit: {limit}, offset: {offset})",
            self.path
        );

        let payload = to_params(&OffsetParams {
            limit,
            offset,
            order,
        })?;
        let body = self
            .client
            .request(self.host, HttpMethod::Get, &self.path, Some(&payload))
            .await?;

        match body {
            Value::Object(page) => Ok(page),
            _ => Err(ResourceError::UnexpectedObject {
                expected: "list",
                found: "non-object".to_string(),
            }),
        }
    }
}

fn take_data(mut page: Map<String, Value>) -> Result<Vec<Value>, ResourceError> {
    match page.remove("data") {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ResourceError::FieldType {
            field: "data".to_string(),
            expected: "an array",
        }),
        None => Err(ResourceError::field_not_found("data")),
    }
}

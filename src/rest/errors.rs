//! Error types for resource operations.
//!
//! Resource operations add object-model failures (missing fields, wrong
//! field types, unexpected discriminators) on top of the request pipeline's
//! [`RequestError`], which is propagated unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::rest::{ResourceError, Retrieve};
//! use omise::clients::ApiErrorKind;
//! use omise::Charge;
//!
//! match Charge::retrieve(&client, "chrg_test_1").await {
//!     Ok(charge) => println!("Found: {charge}"),
//!     Err(e) if e.api_error().map(|a| a.kind) == Some(ApiErrorKind::NotFound) => {
//!         println!("No such charge");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{ApiError, RequestError};
use crate::error::ConfigError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The field was never set on the object.
    #[error("Field '{field}' not found")]
    FieldNotFound {
        /// The requested field name.
        field: String,
    },

    /// The field exists but holds a value of a different JSON type.
    #[error("Field '{field}' is not {expected}")]
    FieldType {
        /// The requested field name.
        field: String,
        /// Description of the expected type.
        expected: &'static str,
    },

    /// A payload could not be turned into the requested resource type.
    #[error("Expected '{expected}' object, found '{found}'")]
    UnexpectedObject {
        /// The discriminator the caller asked for.
        expected: &'static str,
        /// What was found instead.
        found: String,
    },

    /// Operation parameters did not serialize to a JSON object.
    #[error("Invalid parameters: {message}")]
    InvalidParams {
        /// Description of the problem.
        message: String,
    },

    /// The request failed.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The configuration lacks what the operation needs.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ResourceError {
    /// Returns the API error if the server answered with an error envelope.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Request(error) => error.api_error(),
            _ => None,
        }
    }

    pub(crate) fn field_not_found(field: &str) -> Self {
        Self::FieldNotFound {
            field: field.to_string(),
        }
    }
}

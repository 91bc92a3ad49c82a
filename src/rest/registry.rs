//! Polymorphic deserialization.
//!
//! Every JSON object returned by the API carries an `object` discriminator.
//! [`materialize`] uses it to pick the matching [`Resource`] variant, falling
//! back to a generic [`ResourceObject`] for discriminators it does not know.
//!
//! # Example
//!
//! ```rust
//! use omise::rest::{materialize, Materialized, Resource};
//! use serde_json::json;
//!
//! let value = materialize(json!({"object": "charge", "id": "chrg_1"})).unwrap();
//! assert!(matches!(value, Materialized::Resource(Resource::Charge(_))));
//!
//! let value = materialize(json!({"object": "totally_unknown_type", "id": "x"})).unwrap();
//! let resource = value.into_resource().unwrap();
//! assert!(matches!(resource, Resource::Object(_)));
//! assert_eq!(resource.as_object().id(), Some("x"));
//! ```

use std::fmt;

use serde_json::Value;

use crate::rest::collection::Collection;
use crate::rest::errors::ResourceError;
use crate::rest::object::{json_type_name, ResourceObject};
use crate::rest::resource::ApiResource;
use crate::rest::resources::{
    Account, Balance, BankAccount, Capability, Card, Chain, Charge, Customer, Dispute, Document,
    Event, Forex, Link, Occurrence, Receipt, Recipient, Refund, Schedule, Search, Source, Token,
    Transaction, Transfer,
};

macro_rules! resource_registry {
    ($($discriminator:literal => $variant:ident($ty:ty)),+ $(,)?) => {
        /// A materialized resource, tagged by its discriminator.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Resource {
            $(
                #[doc = concat!("`\"", $discriminator, "\"`")]
                $variant($ty),
            )+
            /// Any other discriminator.
            Object(ResourceObject),
        }

        impl Resource {
            /// Builds the variant registered for `discriminator`, or
            /// [`Resource::Object`] if there is none.
            #[must_use]
            pub fn from_discriminator(discriminator: Option<&str>, object: ResourceObject) -> Self {
                match discriminator {
                    $(Some($discriminator) => Self::$variant(<$ty>::from_object(object)),)+
                    _ => Self::Object(object),
                }
            }

            /// Returns the underlying object.
            #[must_use]
            pub fn as_object(&self) -> &ResourceObject {
                match self {
                    $(Self::$variant(resource) => resource.as_object(),)+
                    Self::Object(object) => object,
                }
            }

            /// Consumes the resource, returning the underlying object.
            #[must_use]
            pub fn into_object(self) -> ResourceObject {
                match self {
                    $(Self::$variant(resource) => resource.into_object(),)+
                    Self::Object(object) => object,
                }
            }
        }

        impl fmt::Display for Resource {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(resource) => fmt::Display::fmt(resource, f),)+
                    Self::Object(object) => fmt::Display::fmt(object, f),
                }
            }
        }
    };
}

resource_registry! {
    "account" => Account(Account),
    "balance" => Balance(Balance),
    "bank_account" => BankAccount(BankAccount),
    "capability" => Capability(Capability),
    "card" => Card(Card),
    "chain" => Chain(Chain),
    "charge" => Charge(Charge),
    "customer" => Customer(Customer),
    "dispute" => Dispute(Dispute),
    "document" => Document(Document),
    "event" => Event(Event),
    "forex" => Forex(Forex),
    "link" => Link(Link),
    "list" => Collection(Collection),
    "occurrence" => Occurrence(Occurrence),
    "receipt" => Receipt(Receipt),
    "recipient" => Recipient(Recipient),
    "refund" => Refund(Refund),
    "schedule" => Schedule(Schedule),
    "search" => Search(Search),
    "source" => Source(Source),
    "token" => Token(Token),
    "transaction" => Transaction(Transaction),
    "transfer" => Transfer(Transfer),
}

impl Resource {
    /// Converts into a concrete resource type.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedObject`] if the discriminator is
    /// not `T::OBJECT`.
    pub fn downcast<T: ApiResource>(self) -> Result<T, ResourceError> {
        let object = self.into_object();
        match object.object_type() {
            Some(found) if found == T::OBJECT => Ok(T::from_object(object)),
            found => Err(ResourceError::UnexpectedObject {
                expected: T::OBJECT,
                found: found.unwrap_or("none").to_string(),
            }),
        }
    }
}

/// The result of materializing a JSON value.
#[derive(Clone, Debug, PartialEq)]
pub enum Materialized {
    /// A JSON object, turned into a resource.
    Resource(Resource),
    /// A JSON array, materialized element by element in order.
    List(Vec<Materialized>),
    /// Any other JSON value, unchanged.
    Scalar(Value),
}

impl Materialized {
    /// Returns the resource, if this is one.
    #[must_use]
    pub const fn as_resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    /// Returns the scalar value, if this is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the elements, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Converts into a resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedObject`] for lists and scalars.
    pub fn into_resource(self) -> Result<Resource, ResourceError> {
        match self {
            Self::Resource(resource) => Ok(resource),
            Self::List(_) => Err(ResourceError::UnexpectedObject {
                expected: "object",
                found: "array".to_string(),
            }),
            Self::Scalar(value) => Err(ResourceError::UnexpectedObject {
                expected: "object",
                found: json_type_name(&value).to_string(),
            }),
        }
    }

    /// Converts into a concrete resource type.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedObject`] if this is not a `T`.
    pub fn downcast<T: ApiResource>(self) -> Result<T, ResourceError> {
        self.into_resource()?.downcast()
    }
}

/// Turns a JSON value into resources.
///
/// - arrays are materialized element-wise, preserving order
/// - objects become the [`Resource`] registered for their `object` field,
///   or [`Resource::Object`] when the discriminator is unknown
/// - anything else is returned unchanged
///
/// # Errors
///
/// Returns [`ResourceError::FieldNotFound`] for an object without an
/// `object` field.
pub fn materialize(value: Value) -> Result<Materialized, ResourceError> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(materialize)
            .collect::<Result<Vec<_>, _>>()
            .map(Materialized::List),
        Value::Object(data) => {
            let discriminator = match data.get("object") {
                Some(value) => value.as_str().map(str::to_owned),
                None => return Err(ResourceError::field_not_found("object")),
            };
            let object = ResourceObject::from_data(data);
            Ok(Materialized::Resource(Resource::from_discriminator(
                discriminator.as_deref(),
                object,
            )))
        }
        scalar => Ok(Materialized::Scalar(scalar)),
    }
}

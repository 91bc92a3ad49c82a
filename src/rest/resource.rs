//! Resource traits and the generic operation shapes.
//!
//! Every typed resource is a newtype over [`ResourceObject`] implementing
//! [`ApiResource`]. Resources reachable at a fixed path also implement
//! [`Endpoint`], which supplies the host and path templates. The operation
//! shapes are capability traits with default implementations; a resource
//! opts into exactly the ones its endpoint supports:
//!
//! | Trait | Request | Result |
//! |---|---|---|
//! | [`Retrieve`] | `GET instance` | `Self` |
//! | [`RetrieveAll`] | `GET collection` | [`Collection`] |
//! | [`Listable`] | `GET collection` per page | [`LazyCollection`] |
//! | [`Create`] | `POST collection` | `Self` |
//! | [`Update`] | `PATCH instance` | reloads self |
//! | [`Reload`] | `GET instance` | reloads self |
//! | [`Destroy`] | `DELETE instance` | reloads self |
//!
//! # Example
//!
//! ```rust,ignore
//! use omise::rest::{Create, Listable, Reload, Update};
//! use omise::Customer;
//! use serde_json::json;
//!
//! let mut customer = Customer::create(&client, &json!({"email": "a@example.com"})).await?;
//!
//! customer.set("description", "VIP");
//! customer.update(&client, &()).await?; // PATCH {"description": "VIP"}
//!
//! let mut customers = Customer::list(&client);
//! while let Some(customer) = customers.next().await? {
//!     println!("{customer}");
//! }
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, OmiseClient, RequestPath};
use crate::config::ApiHost;
use crate::rest::collection::Collection;
use crate::rest::errors::ResourceError;
use crate::rest::lazy_collection::LazyCollection;
use crate::rest::object::{json_type_name, ResourceObject};

/// A typed view over a [`ResourceObject`].
pub trait ApiResource: Sized {
    /// The type name used in display output (e.g., "Charge").
    const NAME: &'static str;

    /// The discriminator this type is registered under (e.g., "charge").
    const OBJECT: &'static str;

    /// The field shown in display output.
    const DISPLAY_FIELD: &'static str = "id";

    /// Wraps an object without checking its discriminator.
    fn from_object(object: ResourceObject) -> Self;

    /// Returns the underlying object.
    fn as_object(&self) -> &ResourceObject;

    /// Returns the underlying object mutably.
    fn as_object_mut(&mut self) -> &mut ResourceObject;

    /// Consumes the resource, returning the underlying object.
    fn into_object(self) -> ResourceObject;
}

/// A resource reachable at a fixed path on one of the API hosts.
pub trait Endpoint: ApiResource {
    /// The host serving this resource.
    const HOST: ApiHost = ApiHost::Main;

    /// The collection path (e.g., "charges").
    const COLLECTION_PATH: &'static str;

    /// Returns the collection path.
    #[must_use]
    fn collection_path() -> RequestPath {
        RequestPath::from(Self::COLLECTION_PATH)
    }

    /// Returns the instance path for `id` (collection path plus id).
    #[must_use]
    fn instance_path(id: &str) -> RequestPath {
        Self::collection_path().join(id)
    }

    /// Returns the path this instance is reloaded, updated, and destroyed at.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the object has no `id`.
    fn self_path(&self) -> Result<RequestPath, ResourceError> {
        let id = self
            .as_object()
            .id()
            .ok_or_else(|| ResourceError::field_not_found("id"))?;
        Ok(Self::instance_path(id))
    }

    /// Returns [`self_path`](Self::self_path) with `segment` appended, the
    /// path of a sub-action or nested collection.
    ///
    /// # Errors
    ///
    /// Same as [`self_path`](Self::self_path).
    fn nested_path(&self, segment: &str) -> Result<RequestPath, ResourceError> {
        Ok(self.self_path()?.join(segment))
    }
}

/// `GET instance_path(id)`.
#[allow(async_fn_in_trait)]
pub trait Retrieve: Endpoint {
    /// Retrieves a single resource by id.
    ///
    /// # Errors
    ///
    /// Propagates request errors; returns [`ResourceError::UnexpectedObject`]
    /// if the response is not a `Self`.
    async fn retrieve(client: &OmiseClient, id: &str) -> Result<Self, ResourceError> {
        fetch(client, Self::HOST, HttpMethod::Get, &Self::instance_path(id), None).await
    }
}

/// `GET collection_path`, as a single page.
#[allow(async_fn_in_trait)]
pub trait RetrieveAll: Endpoint {
    /// Retrieves the first page of the collection.
    ///
    /// # Errors
    ///
    /// Propagates request errors; returns [`ResourceError::UnexpectedObject`]
    /// if the response is not a list.
    async fn retrieve_all(client: &OmiseClient) -> Result<Collection, ResourceError> {
        fetch(client, Self::HOST, HttpMethod::Get, &Self::collection_path(), None).await
    }
}

/// Lazy, paginated iteration over `collection_path`.
pub trait Listable: Endpoint {
    /// Returns a lazy collection bound to the collection path. No request
    /// is made until it is iterated.
    #[must_use]
    fn list(client: &OmiseClient) -> LazyCollection {
        LazyCollection::new(client.clone(), Self::HOST, Self::collection_path())
    }
}

/// `POST collection_path`.
#[allow(async_fn_in_trait)]
pub trait Create: Endpoint {
    /// Transforms the caller's fields into the request body.
    #[must_use]
    fn create_payload(params: Map<String, Value>) -> Map<String, Value> {
        params
    }

    /// Creates a resource from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParams`] if `params` does not serialize
    /// to an object, and propagates request errors.
    async fn create<P: Serialize + ?Sized>(
        client: &OmiseClient,
        params: &P,
    ) -> Result<Self, ResourceError> {
        let payload = Self::create_payload(to_params(params)?);
        fetch(
            client,
            Self::HOST,
            HttpMethod::Post,
            &Self::collection_path(),
            Some(&payload),
        )
        .await
    }
}

/// `PATCH self_path` with pending changes merged with explicit fields.
#[allow(async_fn_in_trait)]
pub trait Update: Endpoint {
    /// Sends pending changes plus `params` and reloads from the response.
    ///
    /// Explicit `params` win over pending changes on key collision. Pass
    /// `&()` to send only the pending changes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParams`] if `params` does not serialize
    /// to an object, and propagates request errors.
    async fn update<P: Serialize + ?Sized>(
        &mut self,
        client: &OmiseClient,
        params: &P,
    ) -> Result<(), ResourceError> {
        let payload = update_payload(self.as_object(), params)?;
        let path = self.self_path()?;
        let data = client
            .request(Self::HOST, HttpMethod::Patch, &path, Some(&payload))
            .await?;
        self.as_object_mut().reload_value(data)
    }
}

/// `GET self_path`.
#[allow(async_fn_in_trait)]
pub trait Reload: Endpoint {
    /// Repopulates the object wholesale from the server.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    async fn reload(&mut self, client: &OmiseClient) -> Result<(), ResourceError> {
        let path = self.self_path()?;
        let data = client.request(Self::HOST, HttpMethod::Get, &path, None).await?;
        self.as_object_mut().reload_value(data)
    }
}

/// `DELETE self_path`.
#[allow(async_fn_in_trait)]
pub trait Destroy: Endpoint {
    /// Returns `true` if the loaded payload marks the resource as deleted.
    ///
    /// How deletion is signaled differs between resource types.
    fn is_destroyed(&self) -> bool;

    /// Deletes the resource and repopulates from the response.
    ///
    /// # Errors
    ///
    /// Propagates request errors.
    async fn destroy(&mut self, client: &OmiseClient) -> Result<(), ResourceError> {
        let path = self.self_path()?;
        let data = client
            .request(Self::HOST, HttpMethod::Delete, &path, None)
            .await?;
        self.as_object_mut().reload_value(data)
    }
}

/// Converts operation parameters into a JSON object.
///
/// `null` (e.g. `()` or `None`) means no parameters.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidParams`] if `params` fails to serialize
/// or serializes to something other than an object.
pub fn to_params<P: Serialize + ?Sized>(params: &P) -> Result<Map<String, Value>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidParams {
        message: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ResourceError::InvalidParams {
            message: format!("expected an object, got {}", json_type_name(&other)),
        }),
    }
}

/// Pending changes overlaid with explicit parameters.
pub(crate) fn update_payload<P: Serialize + ?Sized>(
    object: &ResourceObject,
    params: &P,
) -> Result<Map<String, Value>, ResourceError> {
    let mut payload = object.changes();
    payload.extend(to_params(params)?);
    Ok(payload)
}

/// Sends a request and converts the materialized response into `T`.
pub(crate) async fn fetch<T: ApiResource>(
    client: &OmiseClient,
    host: ApiHost,
    method: HttpMethod,
    path: &RequestPath,
    payload: Option<&Map<String, Value>>,
) -> Result<T, ResourceError> {
    client.send(host, method, path, payload).await?.downcast()
}

/// Defines a resource newtype over [`ResourceObject`].
///
/// The generated type implements [`ApiResource`], derefs to the object, and
/// displays as `<Name id='...'>`.
macro_rules! api_resource {
    ($(#[$meta:meta])* $name:ident, $object:literal) => {
        $crate::rest::api_resource!($(#[$meta])* $name, $object, "id");
    };
    ($(#[$meta:meta])* $name:ident, $object:literal, $display:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name($crate::rest::ResourceObject);

        impl $crate::rest::ApiResource for $name {
            const NAME: &'static str = stringify!($name);
            const OBJECT: &'static str = $object;
            const DISPLAY_FIELD: &'static str = $display;

            fn from_object(object: $crate::rest::ResourceObject) -> Self {
                Self(object)
            }

            fn as_object(&self) -> &$crate::rest::ResourceObject {
                &self.0
            }

            fn as_object_mut(&mut self) -> &mut $crate::rest::ResourceObject {
                &mut self.0
            }

            fn into_object(self) -> $crate::rest::ResourceObject {
                self.0
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::rest::ResourceObject;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.0.write_tag(
                    f,
                    <Self as $crate::rest::ApiResource>::NAME,
                    <Self as $crate::rest::ApiResource>::DISPLAY_FIELD,
                )
            }
        }
    };
}

pub(crate) use api_resource;

//! The dynamic resource object.
//!
//! [`ResourceObject`] is the attribute bag every typed resource wraps. It
//! stores the deserialized payload as a JSON map and tracks which fields the
//! caller has set since the last load, so partial updates send only those.
//!
//! # Example
//!
//! ```rust
//! use omise::rest::ResourceObject;
//! use serde_json::json;
//!
//! let mut customer = ResourceObject::from_value(json!({
//!     "object": "customer",
//!     "id": "cust_test_1",
//!     "description": "d"
//! }))
//! .unwrap();
//! assert!(customer.changes().is_empty());
//!
//! customer.set("description", "d2");
//! customer.set("email", "e@example.com");
//!
//! let changes = customer.changes();
//! assert_eq!(changes.len(), 2);
//! assert_eq!(changes["description"], "d2");
//! ```

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::rest::errors::ResourceError;
use crate::rest::registry::{materialize, Materialized};

/// A mapping-backed object with change tracking.
///
/// Reading a field that was never set is an error, never a silent default.
/// Setting a field always records it as changed, even if the value is the
/// same as before.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceObject {
    attributes: Map<String, Value>,
    changes: BTreeSet<String>,
    synced: bool,
}

impl ResourceObject {
    /// Creates an empty, unsynced object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a synced object populated wholesale from `data`.
    #[must_use]
    pub fn from_data(data: Map<String, Value>) -> Self {
        let mut object = Self::new();
        object.reload_data(data);
        object
    }

    /// Creates a synced object from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedObject`] if `value` is not a JSON
    /// object.
    pub fn from_value(value: Value) -> Result<Self, ResourceError> {
        let mut object = Self::new();
        object.reload_value(value)?;
        Ok(object)
    }

    /// Replaces all attributes with `data` and clears pending changes.
    pub fn reload_data(&mut self, data: Map<String, Value>) {
        self.attributes = data;
        self.changes.clear();
        self.synced = true;
    }

    /// Replaces all attributes from a JSON value and clears pending changes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnexpectedObject`] if `value` is not a JSON
    /// object. The object is left untouched in that case.
    pub fn reload_value(&mut self, value: Value) -> Result<(), ResourceError> {
        match value {
            Value::Object(data) => {
                self.reload_data(data);
                Ok(())
            }
            other => Err(ResourceError::UnexpectedObject {
                expected: "object",
                found: json_type_name(&other).to_string(),
            }),
        }
    }

    /// Returns `true` once the object has been populated from a payload.
    #[must_use]
    pub const fn is_synced(&self) -> bool {
        self.synced
    }

    /// Returns the full attribute map.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Consumes the object, returning its attribute map.
    #[must_use]
    pub fn into_attributes(self) -> Map<String, Value> {
        self.attributes
    }

    /// Returns `true` if the field has been set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Reads a field.
    ///
    /// Nested JSON objects are materialized into resources on every read.
    /// Lists and scalars are returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the field was never set,
    /// or if a nested object lacks its `object` discriminator.
    pub fn get(&self, name: &str) -> Result<Materialized, ResourceError> {
        match self.get_raw(name)? {
            value @ Value::Object(_) => materialize(value.clone()),
            value => Ok(Materialized::Scalar(value.clone())),
        }
    }

    /// Reads a field without materializing it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] if the field was never set.
    pub fn get_raw(&self, name: &str) -> Result<&Value, ResourceError> {
        self.attributes
            .get(name)
            .ok_or_else(|| ResourceError::field_not_found(name))
    }

    /// Reads a string field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] or [`ResourceError::FieldType`].
    pub fn get_str(&self, name: &str) -> Result<&str, ResourceError> {
        self.get_raw(name)?
            .as_str()
            .ok_or_else(|| field_type(name, "a string"))
    }

    /// Reads an integer field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] or [`ResourceError::FieldType`].
    pub fn get_i64(&self, name: &str) -> Result<i64, ResourceError> {
        self.get_raw(name)?
            .as_i64()
            .ok_or_else(|| field_type(name, "an integer"))
    }

    /// Reads a boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] or [`ResourceError::FieldType`].
    pub fn get_bool(&self, name: &str) -> Result<bool, ResourceError> {
        self.get_raw(name)?
            .as_bool()
            .ok_or_else(|| field_type(name, "a boolean"))
    }

    /// Reads an RFC 3339 timestamp field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldNotFound`] or [`ResourceError::FieldType`].
    pub fn get_datetime(&self, name: &str) -> Result<DateTime<Utc>, ResourceError> {
        let raw = self.get_str(name)?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| field_type(name, "an RFC 3339 timestamp"))
    }

    /// Returns the `id` field if it is a string.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").and_then(Value::as_str)
    }

    /// Returns the `object` discriminator if it is a string.
    #[must_use]
    pub fn object_type(&self) -> Option<&str> {
        self.attributes.get("object").and_then(Value::as_str)
    }

    /// Sets a field, overwriting the stored value and marking it changed.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        self.attributes.insert(name.clone(), value.into());
        self.changes.insert(name);
    }

    /// Returns the pending changes: each changed field with its current value.
    #[must_use]
    pub fn changes(&self) -> Map<String, Value> {
        self.changes
            .iter()
            .map(|name| {
                let value = self.attributes.get(name).cloned().unwrap_or(Value::Null);
                (name.clone(), value)
            })
            .collect()
    }

    /// Returns `true` if any field has been set since the last load.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Writes `<{name} {label}='{value}'>`, omitting the label when the field
    /// is absent or empty.
    pub(crate) fn write_tag(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        label: &str,
    ) -> fmt::Result {
        let value = match self.attributes.get(label) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Null | Value::Bool(false) | Value::String(_)) | None => None,
            Some(other) => Some(other.to_string()),
        };
        match value {
            Some(value) => write!(f, "<{name} {label}='{value}'>"),
            None => write!(f, "<{name}>"),
        }
    }
}

impl fmt::Display for ResourceObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tag(f, "Object", "id")
    }
}

impl From<Map<String, Value>> for ResourceObject {
    fn from(data: Map<String, Value>) -> Self {
        Self::from_data(data)
    }
}

fn field_type(field: &str, expected: &'static str) -> ResourceError {
    ResourceError::FieldType {
        field: field.to_string(),
        expected,
    }
}

pub(crate) const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded(value: Value) -> ResourceObject {
        ResourceObject::from_value(value).unwrap()
    }

    // ==================== Loading ====================

    #[test]
    fn test_new_object_is_unsynced_and_empty() {
        let object = ResourceObject::new();
        assert!(!object.is_synced());
        assert!(object.attributes().is_empty());
        assert!(matches!(
            object.get("id"),
            Err(ResourceError::FieldNotFound { field }) if field == "id"
        ));
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        let result = ResourceObject::from_value(json!([1, 2]));
        assert!(matches!(
            result,
            Err(ResourceError::UnexpectedObject { found, .. }) if found == "array"
        ));
    }

    #[test]
    fn test_reload_clears_changes() {
        let mut object = loaded(json!({"id": "a", "description": "d"}));
        object.set("description", "d2");
        assert!(object.has_changes());

        object.reload_data(json!({"id": "a", "email": "e"}).as_object().unwrap().clone());
        assert!(object.changes().is_empty());
        assert!(!object.contains("description"));
        assert_eq!(object.get_str("email").unwrap(), "e");
    }

    // ==================== Change tracking ====================

    #[test]
    fn test_change_tracking_records_exact_fields() {
        let mut object = loaded(json!({"id": "a", "description": "d"}));
        assert!(object.changes().is_empty());

        object.set("description", "d2");
        object.set("email", "e");

        let expected = json!({"description": "d2", "email": "e"});
        assert_eq!(Value::Object(object.changes()), expected);
    }

    #[test]
    fn test_setting_same_value_still_marks_changed() {
        let mut object = loaded(json!({"id": "a", "description": "d"}));
        object.set("description", "d");
        assert_eq!(Value::Object(object.changes()), json!({"description": "d"}));
    }

    #[test]
    fn test_set_on_unsynced_object_builds_changes() {
        let mut object = ResourceObject::new();
        object.set("amount", 100);
        assert!(!object.is_synced());
        assert_eq!(object.get_i64("amount").unwrap(), 100);
        assert_eq!(Value::Object(object.changes()), json!({"amount": 100}));
    }

    // ==================== Reading ====================

    #[test]
    fn test_top_level_fields_read_back_equal() {
        let source = json!({
            "object": "charge",
            "id": "chrg_1",
            "amount": 100000,
            "captured": true,
            "description": null,
            "refunds": {"object": "list", "data": []},
            "tags": ["a", "b"]
        });
        let object = loaded(source.clone());

        for (key, value) in source.as_object().unwrap() {
            assert_eq!(object.get_raw(key).unwrap(), value);
        }
        assert_eq!(object.get("tags").unwrap(), Materialized::Scalar(json!(["a", "b"])));
        assert_eq!(object.get("description").unwrap(), Materialized::Scalar(Value::Null));
    }

    #[test]
    fn test_nested_object_is_materialized_on_read() {
        let object = loaded(json!({
            "id": "cust_1",
            "cards": {"object": "list", "data": [{"object": "card", "id": "card_1"}], "total": 1}
        }));

        let first = object.get("cards").unwrap();
        let second = object.get("cards").unwrap();
        assert_eq!(first, second);

        let resource = first.into_resource().unwrap();
        assert_eq!(resource.as_object().object_type(), Some("list"));
        assert_eq!(object.get_raw("cards").unwrap()["total"], 1);
    }

    #[test]
    fn test_nested_object_without_discriminator_is_missing_field() {
        let object = loaded(json!({"id": "x", "metadata": {"order": "1"}}));
        assert!(matches!(
            object.get("metadata"),
            Err(ResourceError::FieldNotFound { field }) if field == "object"
        ));
        assert_eq!(object.get_raw("metadata").unwrap()["order"], "1");
    }

    #[test]
    fn test_typed_getters_report_type_mismatch() {
        let object = loaded(json!({"id": "x", "amount": "100", "created": "2015-06-01T10:00:00Z"}));
        assert!(matches!(
            object.get_i64("amount"),
            Err(ResourceError::FieldType { expected: "an integer", .. })
        ));
        assert!(object.get_bool("id").is_err());
        let created = object.get_datetime("created").unwrap();
        assert_eq!(created.to_rfc3339(), "2015-06-01T10:00:00+00:00");
        assert!(object.get_datetime("id").is_err());
    }

    // ==================== Display ====================

    #[test]
    fn test_display_includes_id_when_present() {
        let object = loaded(json!({"object": "thing", "id": "x"}));
        assert_eq!(object.to_string(), "<Object id='x'>");
        assert_eq!(object.id(), Some("x"));
    }

    #[test]
    fn test_display_omits_missing_id() {
        let object = loaded(json!({"object": "balance", "total": 0}));
        assert_eq!(object.to_string(), "<Object>");
        assert_eq!(ResourceObject::new().to_string(), "<Object>");
    }
}

//! Wire types for lookup responses (REST).
//!
//! The upstream API has no fixed schema: a lookup returns either an object or
//! an array of objects, and only `name` and `image` are reliably named.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw lookup body, before unwrapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct RecordResponse(pub Value);

impl RecordResponse {
    /// Take the first element of an array body, or the body itself.
    ///
    /// Returns `None` for bodies that are not (or do not start with) an object.
    pub fn into_record(self) -> Option<ApiRecord> {
        let item = match self.0 {
            Value::Array(items) => items.into_iter().next()?,
            other => other,
        };
        match item {
            Value::Object(fields) => Some(ApiRecord(fields)),
            _ => None,
        }
    }
}

/// A single resource as returned by the API: field name → value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ApiRecord(pub Map<String, Value>);

impl ApiRecord {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Non-blank `name` field.
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Non-blank `image` field.
    pub fn image(&self) -> Option<&str> {
        self.str_field("image")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

impl From<Map<String, Value>> for ApiRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

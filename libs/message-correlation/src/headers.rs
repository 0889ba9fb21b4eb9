//! Header map and header value types shared by all message contracts

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of a single message header.
///
/// Brokers differ on what a header slot may hold; strings are the common
/// case but producers occasionally attach scalar metadata. `Null` models an
/// entry that exists with no value, which every correlation accessor treats
/// the same as a missing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl HeaderValue {
    pub fn is_null(&self) -> bool {
        matches!(self, HeaderValue::Null)
    }

    /// Borrowed string content, if the value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Canonical textual rendering: strings verbatim, scalars via their
/// standard formatting, `Null` as the empty string.
impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Null => Ok(()),
            HeaderValue::Bool(b) => write!(f, "{b}"),
            HeaderValue::Int(i) => write!(f, "{i}"),
            HeaderValue::Float(x) => write!(f, "{x}"),
            HeaderValue::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::String(value.to_owned())
    }
}

impl From<String> for HeaderValue {
    fn from(value: String) -> Self {
        HeaderValue::String(value)
    }
}

impl From<bool> for HeaderValue {
    fn from(value: bool) -> Self {
        HeaderValue::Bool(value)
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        HeaderValue::Int(value)
    }
}

impl From<f64> for HeaderValue {
    fn from(value: f64) -> Self {
        HeaderValue::Float(value)
    }
}

impl From<serde_json::Value> for HeaderValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => HeaderValue::Null,
            serde_json::Value::Bool(b) => HeaderValue::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(HeaderValue::Int)
                .or_else(|| n.as_f64().map(HeaderValue::Float))
                .unwrap_or(HeaderValue::Null),
            serde_json::Value::String(s) => HeaderValue::String(s),
            // Arrays and objects are stored in their JSON text form
            other => HeaderValue::String(other.to_string()),
        }
    }
}

/// Mutable key/value metadata attached to a message.
///
/// Keys are case-sensitive. The map is owned by the message it is attached
/// to; sharing and synchronization are the owner's concern, not this
/// library's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderMap(HashMap<String, HeaderValue>);

impl HeaderMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Value at `key`, if the entry exists (null entries included).
    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.0.get(key)
    }

    /// Non-null value at `key`, if any.
    pub fn get_present(&self, key: &str) -> Option<&HeaderValue> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Indexed assignment: stores `value` at `key`, returning the previous
    /// value if the entry existed.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<HeaderValue>,
    ) -> Option<HeaderValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Enumerate all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<HeaderValue>> FromIterator<(K, V)> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

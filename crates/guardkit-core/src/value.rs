//! # Untyped Value Model
//!
//! Defines [`Value`], the in-memory representation every guard classifies.
//! Guards never parse or deserialize; they inspect a `Value` that some other
//! layer has already materialized (typically from `serde_json::Value`).
//!
//! ## Sentinels
//!
//! Two "absent" sentinels exist and are distinct:
//!
//! - [`Value::Undefined`] — the *missing* marker. A property that was never
//!   set, or a value that is simply not there.
//! - [`Value::Null`] — the *null-like* marker. An explicit "no value".
//!
//! The nullish classifier treats both as absent by default.
//!
//! ## Object-Like Kinds
//!
//! Objects, arrays, and dates are *object-like*: they are structural
//! candidates for a record guard and expose own keys. Arrays expose their
//! indices (`"0"`, `"1"`, ...) as keys; dates expose none. `Null` is not
//! object-like.
//!
//! ## Key Order
//!
//! [`Object`] preserves insertion order. Record guards walk own keys in this
//! order, so the order in which a value was built is observable through
//! which failure diagnostic is emitted first.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// An untyped, already-materialized value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The missing marker.
    #[default]
    Undefined,
    /// The null-like marker.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. All numbers are IEEE-754 doubles; `NaN` is still a number.
    Number(f64),
    /// A string.
    String(String),
    /// A calendar instant. `None` is the invalid-date state: the value is a
    /// date object, but it does not denote any instant.
    Date(Option<DateTime<Utc>>),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// An insertion-ordered record.
    Object(Object),
}

impl Value {
    /// A date value denoting `instant`.
    pub fn date(instant: DateTime<Utc>) -> Self {
        Value::Date(Some(instant))
    }

    /// A date value in the invalid-date state.
    pub fn invalid_date() -> Self {
        Value::Date(None)
    }

    /// Runtime kind name, used in diagnostics and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this value is a structural candidate for a record guard.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_) | Value::Date(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The instant a valid date denotes. `None` for invalid dates and for
    /// every non-date kind.
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(Some(instant)) => Some(instant),
            _ => None,
        }
    }

    /// Own keys and their values, in enumeration order.
    ///
    /// Returns `None` for values that are not object-like. Array entries are
    /// keyed by their decimal index.
    pub fn own_entries(&self) -> Option<Vec<(Cow<'_, str>, &Value)>> {
        match self {
            Value::Object(obj) => Some(
                obj.iter()
                    .map(|(k, v)| (Cow::Borrowed(k), v))
                    .collect(),
            ),
            Value::Array(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (Cow::Owned(i.to_string()), v))
                    .collect(),
            ),
            Value::Date(_) => Some(Vec::new()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Date(Some(instant)) => write!(f, "Date({})", instant.to_rfc3339()),
            Value::Date(None) => f.write_str("Date(Invalid Date)"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(obj) => write!(f, "{obj}"),
        }
    }
}

// ─── Object ──────────────────────────────────────────────────────────

/// An insertion-ordered record with unique string keys.
///
/// Inserting an existing key replaces its value in place, keeping the
/// original position. Equality ignores key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    entries: IndexMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or replace `key`. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut obj = Object::with_capacity(iter.size_hint().0);
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k:?}: {v}")?;
        }
        f.write_str("}")
    }
}

// ─── Conversions ─────────────────────────────────────────────────────

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(map.into_iter().collect()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::Date(Some(instant))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

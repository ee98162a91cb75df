//! Guards for the primitive kinds.
//!
//! `object` accepts every object-like value (records, arrays, dates) and
//! rejects `Null`, matching the candidate check record guards perform.

use guardkit_core::{Guard, Value};

pub use guardkit_core::is_nullish;

pub fn string() -> Guard {
    Guard::new("string", |v: &Value| matches!(v, Value::String(_)))
}

/// Any number, including `NaN` and the infinities.
pub fn number() -> Guard {
    Guard::new("number", |v: &Value| matches!(v, Value::Number(_)))
}

pub fn boolean() -> Guard {
    Guard::new("boolean", |v: &Value| matches!(v, Value::Bool(_)))
}

pub fn object() -> Guard {
    Guard::new("object", Value::is_object_like)
}

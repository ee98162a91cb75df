//! # Enumeration Guards
//!
//! An enumeration is an ordered set of `key → value` declarations, captured
//! by [`EnumDescriptor`]. Two distinct guards exist and must not be
//! confused:
//!
//! - [`member_of`] checks membership among the declared **values**.
//! - [`key_of`] checks membership among the declared **key names**.
//!
//! For `{ Red: "red", Green: "green" }`, `member_of` accepts `"red"` and
//! rejects `"Red"`; `key_of` accepts `"Red"` and rejects `"red"`.
//!
//! Both guards compute their lookup set once, at construction.

use std::collections::HashSet;

use guardkit_core::{Guard, Value};

/// Declared keys and values of an enumeration, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumDescriptor {
    entries: Vec<(String, Value)>,
}

impl EnumDescriptor {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The descriptor a [`DeclaredEnum`] type publishes.
    pub fn of<E: DeclaredEnum>() -> Self {
        E::descriptor()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A Rust type that publishes its runtime enumeration.
///
/// ```
/// use guardkit_predicates::enums::{member_of, DeclaredEnum, EnumDescriptor};
/// use guardkit_core::Value;
///
/// enum Status { Active, Disabled }
///
/// impl DeclaredEnum for Status {
///     fn descriptor() -> EnumDescriptor {
///         EnumDescriptor::new([("Active", "active"), ("Disabled", "disabled")])
///     }
/// }
///
/// let guard = member_of(&EnumDescriptor::of::<Status>());
/// assert!(guard.check(&Value::from("active")));
/// ```
pub trait DeclaredEnum {
    fn descriptor() -> EnumDescriptor;
}

/// Accepts any declared value of `descriptor`.
pub fn member_of(descriptor: &EnumDescriptor) -> Guard {
    let members: Vec<Value> = descriptor.values().cloned().collect();
    Guard::new("enum-member", move |v: &Value| members.contains(v))
}

/// Accepts any declared key name of `descriptor`.
pub fn key_of(descriptor: &EnumDescriptor) -> Guard {
    let keys: HashSet<String> = descriptor.keys().map(str::to_string).collect();
    Guard::new("enum-key", move |v: &Value| {
        v.as_str().is_some_and(|s| keys.contains(s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Color {}

    impl DeclaredEnum for Color {
        fn descriptor() -> EnumDescriptor {
            EnumDescriptor::new([("Red", "red"), ("Green", "green")])
        }
    }

    fn priority() -> EnumDescriptor {
        EnumDescriptor::new([("Low", 0), ("High", 10)])
    }

    #[test]
    fn test_member_of_checks_values_not_keys() {
        let g = member_of(&EnumDescriptor::of::<Color>());
        assert!(g.check(&Value::from("red")));
        assert!(g.check(&Value::from("green")));
        assert!(!g.check(&Value::from("Red")));
        assert!(!g.check(&Value::from("blue")));
    }

    #[test]
    fn test_key_of_checks_keys_not_values() {
        let g = key_of(&EnumDescriptor::of::<Color>());
        assert!(g.check(&Value::from("Red")));
        assert!(!g.check(&Value::from("red")));
        assert!(!g.check(&Value::from(0)));
    }

    #[test]
    fn test_numeric_members() {
        let g = member_of(&priority());
        assert!(g.check(&Value::from(10)));
        assert!(!g.check(&Value::from("10")));
        assert!(!g.check(&Value::from(5)));
    }

    #[test]
    fn test_nullable_member() {
        let g = member_of(&priority()).nullable([]);
        assert!(g.check(&Value::Undefined));
        assert!(g.check(&Value::from(0)));
    }

    #[test]
    fn test_empty_enumeration_accepts_nothing() {
        let empty = EnumDescriptor::default();
        assert!(empty.is_empty());
        assert!(!member_of(&empty).check(&Value::Null));
        assert!(!key_of(&empty).check(&Value::from("")));
    }

    #[test]
    fn test_descriptor_preserves_declaration_order() {
        let d = priority();
        assert_eq!(d.keys().collect::<Vec<_>>(), vec!["Low", "High"]);
        assert_eq!(d.len(), 2);
    }
}

//! # Validator Registry and Evaluation
//!
//! The registry is what a builder accumulates and what a built guard
//! snapshots: the schema name, the root validator sequence, the property
//! validator registry, and the suppression set.
//!
//! ## Evaluation Algorithm
//!
//! Given a candidate `v`:
//!
//! 1. `v` is not object-like (including `Null`) ⇒ `false`, silently.
//! 2. Root validators run in registration order; the first rejection emits
//!    a validation-failure diagnostic for `root` and returns `false`.
//! 3. Own keys of `v` are walked in enumeration order:
//!    - no predicates registered ⇒ missing-validator diagnostic, unless a
//!      root validator exists or the key is suppressed; not a failure.
//!    - predicates registered ⇒ all run in order; the first rejection emits
//!      a validation-failure diagnostic for that key and returns `false`.
//! 4. No own keys, no root validator, and at least one property predicate
//!    registered ⇒ `false`.
//! 5. Otherwise `true`.

use std::collections::HashSet;

use indexmap::IndexMap;

use guardkit_core::diagnostics::{self, Diagnostic};
use guardkit_core::{DiagnosticTarget, Guard, Value};

/// Which missing-validator diagnostics are silenced.
///
/// Once `all` is set, the per-key set has no further effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suppression {
    all: bool,
    keys: HashSet<String>,
}

impl Suppression {
    pub fn suppress_all(&mut self) {
        self.all = true;
    }

    pub fn suppress(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    pub fn is_all(&self) -> bool {
        self.all
    }

    pub fn is_suppressed(&self, key: &str) -> bool {
        self.all || self.keys.contains(key)
    }
}

/// Accumulated predicates for one schema.
#[derive(Debug)]
pub(crate) struct Registry {
    schema: String,
    roots: Vec<Guard>,
    /// Key → predicates, keys in first-registration order.
    properties: IndexMap<String, Vec<Guard>>,
    suppression: Suppression,
}

impl Registry {
    pub(crate) fn new(schema: String) -> Self {
        Self {
            schema,
            roots: Vec::new(),
            properties: IndexMap::new(),
            suppression: Suppression::default(),
        }
    }

    pub(crate) fn schema(&self) -> &str {
        &self.schema
    }

    pub(crate) fn add_root(&mut self, guard: Guard) {
        self.roots.push(guard);
    }

    /// Append `guard` to `key`'s sequence, creating the entry if absent.
    pub(crate) fn add_property(&mut self, key: String, guard: Guard) {
        self.properties.entry(key).or_default().push(guard);
    }

    pub(crate) fn suppression_mut(&mut self) -> &mut Suppression {
        &mut self.suppression
    }

    pub(crate) fn suppression(&self) -> &Suppression {
        &self.suppression
    }

    pub(crate) fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub(crate) fn property_keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    fn predicates_for(&self, key: &str) -> Option<&[Guard]> {
        self.properties.get(key).map(Vec::as_slice)
    }

    /// Classify `candidate`, emitting diagnostics along the way.
    pub(crate) fn evaluate(&self, candidate: &Value) -> bool {
        let Some(entries) = candidate.own_entries() else {
            return false;
        };

        for root in &self.roots {
            if !root.check(candidate) {
                diagnostics::emit(Diagnostic::validation_failed(
                    &self.schema,
                    DiagnosticTarget::Root,
                    candidate,
                ));
                return false;
            }
        }

        let has_root = !self.roots.is_empty();

        for (key, value) in &entries {
            match self.predicates_for(key) {
                None => {
                    if !has_root && !self.suppression.is_suppressed(key) {
                        diagnostics::emit(Diagnostic::missing_validator(&self.schema, key));
                    }
                }
                Some(guards) => {
                    if !guards.iter().all(|guard| guard.check(value)) {
                        diagnostics::emit(Diagnostic::validation_failed(
                            &self.schema,
                            DiagnosticTarget::Property(key.to_string()),
                            value,
                        ));
                        return false;
                    }
                }
            }
        }

        if entries.is_empty() && !has_root && !self.properties.is_empty() {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppress_all_overrides_keys() {
        let mut s = Suppression::default();
        s.suppress("a");
        assert!(s.is_suppressed("a"));
        assert!(!s.is_suppressed("b"));
        s.suppress_all();
        assert!(s.is_all());
        assert!(s.is_suppressed("b"));
    }

    #[test]
    fn test_re_registering_appends_in_order() {
        let mut r = Registry::new("T".to_string());
        r.add_property("a".to_string(), Guard::always());
        r.add_property("b".to_string(), Guard::always());
        r.add_property("a".to_string(), Guard::new("never", |_: &Value| false));
        assert_eq!(r.property_keys().collect::<Vec<_>>(), vec!["a", "b"]);
        let labels: Vec<&str> = r
            .predicates_for("a")
            .unwrap()
            .iter()
            .map(Guard::label)
            .collect();
        assert_eq!(labels, vec!["unknown", "never"]);
    }

    #[test]
    fn test_many_properties_keep_registration_order() {
        let mut r = Registry::new("Wide".to_string());
        for i in (0..20_000).rev() {
            r.add_property(format!("p{i}"), Guard::always());
        }
        r.add_property("p7".to_string(), Guard::new("never", |_: &Value| false));
        assert_eq!(r.property_keys().count(), 20_000);
        assert_eq!(r.property_keys().next(), Some("p19999"));
        assert_eq!(r.predicates_for("p7").map(<[Guard]>::len), Some(2));
        assert!(r.predicates_for("missing").is_none());
    }

    #[test]
    fn test_empty_registry_accepts_any_object_like() {
        let r = Registry::new("T".to_string());
        assert!(r.evaluate(&Value::Object(Default::default())));
        assert!(r.evaluate(&Value::Array(Vec::new())));
        assert!(!r.evaluate(&Value::Null));
        assert!(!r.evaluate(&Value::from(1)));
    }
}

//! # Permissive Validator Builder
//!
//! Accumulates root and per-property predicates for a named schema, with no
//! completeness requirement, then snapshots them into a [`Guard`].
//!
//! ```
//! use guardkit_builder::ValidatorBuilder;
//! use guardkit_core::Value;
//! use guardkit_predicates::{number, string};
//!
//! let is_user = ValidatorBuilder::start("User")
//!     .validate_property("id", number())
//!     .validate_property("username", string())
//!     .build();
//!
//! let user = Value::from(serde_json::json!({"id": 1, "username": "john"}));
//! assert!(is_user.check(&user));
//! assert!(!is_user.check(&Value::Null));
//! ```

use guardkit_core::{Guard, Predicate, Value};

use crate::registry::{Registry, Suppression};

/// Builder for a record guard. Consumed by [`build`](Self::build).
#[derive(Debug)]
pub struct ValidatorBuilder {
    registry: Registry,
}

impl ValidatorBuilder {
    /// Start a builder for the schema called `schema`. The name only
    /// appears in diagnostics.
    pub fn start(schema: impl Into<String>) -> Self {
        Self {
            registry: Registry::new(schema.into()),
        }
    }

    /// Append a whole-object predicate.
    ///
    /// Any root validator also silences every missing-validator diagnostic
    /// for the built guard.
    pub fn validate_root(mut self, predicate: impl Predicate + 'static) -> Self {
        self.registry.add_root(Guard::new("root", predicate));
        self
    }

    /// Append `predicate` to `key`'s predicate sequence.
    pub fn validate_property(
        mut self,
        key: impl Into<String>,
        predicate: impl Predicate + 'static,
    ) -> Self {
        let key = key.into();
        let guard = Guard::new(&key, predicate);
        self.registry.add_property(key, guard);
        self
    }

    /// Mark `key` as accounted for without constraining it.
    pub fn ignore_property(self, key: impl Into<String>) -> Self {
        self.validate_property(key, Guard::always())
    }

    /// Silence missing-validator diagnostics for `keys`. An empty `keys`
    /// silences them for every property.
    pub fn suppress_missing_validator_warnings<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let suppression = self.registry.suppression_mut();
        let mut any = false;
        for key in keys {
            suppression.suppress(key);
            any = true;
        }
        if !any {
            suppression.suppress_all();
        }
        self
    }

    /// Silence missing-validator diagnostics for every property.
    pub fn suppress_all_missing_validator_warnings(mut self) -> Self {
        self.registry.suppression_mut().suppress_all();
        self
    }

    pub fn schema_name(&self) -> &str {
        self.registry.schema()
    }

    /// Keys with at least one registered predicate, in registration order.
    pub fn registered_properties(&self) -> impl Iterator<Item = &str> {
        self.registry.property_keys()
    }

    pub fn has_root_validator(&self) -> bool {
        self.registry.root_count() > 0
    }

    pub fn suppression(&self) -> &Suppression {
        self.registry.suppression()
    }

    /// Snapshot the registries into a guard.
    ///
    /// The guard carries `.nullable(..)` like every other guard.
    pub fn build(self) -> Guard {
        let registry = self.registry;
        tracing::debug!(
            schema = registry.schema(),
            properties = registry.property_keys().count(),
            roots = registry.root_count(),
            "record guard built"
        );
        let label = registry.schema().to_string();
        Guard::new(label, move |value: &Value| registry.evaluate(value))
    }
}

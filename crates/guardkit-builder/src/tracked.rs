//! # Completeness-Tracked Validator Builder
//!
//! Wraps [`ValidatorBuilder`] one-for-one and additionally tracks which keys
//! of a [`Schema`] have been addressed by `validate_property` or
//! `ignore_property`.
//!
//! ## Coverage States
//!
//! ```text
//! TrackedBuilder<S, Pending> ──validate_root()──▶ TrackedBuilder<S, Covered>
//!        │                                                  │
//!   build() -> Result<Guard, BuildError>               build() -> Guard
//! ```
//!
//! - `Pending`: `build()` succeeds only once every key in `S::KEYS` is
//!   addressed. Otherwise it fails with [`BuildError::Incomplete`] listing
//!   the missing keys. The check runs at construction, never at first
//!   invocation.
//! - `Covered`: a root validator addresses the whole schema, so `build()`
//!   cannot fail and returns the guard directly.
//!
//! Runtime evaluation of the produced guard is identical to
//! [`ValidatorBuilder`]; only the availability of finalization differs.
//!
//! ## Compile-Time Safety Example
//!
//! A `Pending` builder does not yield a bare guard:
//!
//! ```compile_fail
//! use guardkit_builder::{Schema, TrackedBuilder};
//! use guardkit_core::Guard;
//!
//! struct User;
//! impl Schema for User {
//!     const KEYS: &'static [&'static str] = &["id"];
//! }
//!
//! // ERROR: expected `Guard`, found `Result<Guard, BuildError>`
//! let guard: Guard = TrackedBuilder::<User>::start("User").build();
//! ```

use std::marker::PhantomData;

use guardkit_core::{Guard, Predicate};

use crate::builder::ValidatorBuilder;
use crate::error::BuildError;

/// A record shape whose property keys are known up front.
pub trait Schema {
    /// Every property key the shape declares, in declaration order.
    const KEYS: &'static [&'static str];
}

// ─── Coverage States ─────────────────────────────────────────────────

/// Coverage state: some declared keys may still be unaddressed.
#[derive(Debug, Clone, Copy)]
pub struct Pending;

/// Coverage state: a root validator covers the whole schema.
#[derive(Debug, Clone, Copy)]
pub struct Covered;

mod private {
    pub trait Sealed {}
    impl Sealed for super::Pending {}
    impl Sealed for super::Covered {}
}

/// Marker trait for the two coverage states. Sealed.
pub trait Coverage: private::Sealed + std::fmt::Debug {}

impl Coverage for Pending {}
impl Coverage for Covered {}

// ─── The Builder ─────────────────────────────────────────────────────

/// A [`ValidatorBuilder`] that refuses to build until schema `S` is covered.
#[derive(Debug)]
pub struct TrackedBuilder<S: Schema, C: Coverage = Pending> {
    inner: ValidatorBuilder,
    /// Addressed keys, in first-address order.
    addressed: Vec<String>,
    _marker: PhantomData<(fn() -> S, C)>,
}

impl<S: Schema> TrackedBuilder<S, Pending> {
    /// Start a tracked builder for `S`, named `schema` in diagnostics.
    pub fn start(schema: impl Into<String>) -> Self {
        Self {
            inner: ValidatorBuilder::start(schema),
            addressed: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Append a whole-object predicate. Addresses the entire schema.
    pub fn validate_root(
        self,
        predicate: impl Predicate + 'static,
    ) -> TrackedBuilder<S, Covered> {
        TrackedBuilder {
            inner: self.inner.validate_root(predicate),
            addressed: self.addressed,
            _marker: PhantomData,
        }
    }

    /// Declared keys not yet addressed, in declaration order.
    pub fn missing_properties(&self) -> Vec<&'static str> {
        S::KEYS
            .iter()
            .copied()
            .filter(|key| !self.addressed.iter().any(|a| a == key))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_properties().is_empty()
    }

    /// Build the guard if every declared key is addressed.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Incomplete` naming the unaddressed keys.
    pub fn build(self) -> Result<Guard, BuildError> {
        let missing = self.missing_properties();
        if !missing.is_empty() {
            tracing::debug!(
                schema = self.inner.schema_name(),
                missing = ?missing,
                "refusing to build incomplete record guard"
            );
            return Err(BuildError::Incomplete {
                schema: self.inner.schema_name().to_string(),
                missing: missing.into_iter().map(str::to_string).collect(),
            });
        }
        Ok(self.inner.build())
    }
}

impl<S: Schema> TrackedBuilder<S, Covered> {
    /// Append another whole-object predicate.
    pub fn validate_root(mut self, predicate: impl Predicate + 'static) -> Self {
        self.inner = self.inner.validate_root(predicate);
        self
    }

    /// Build the guard. A root validator covers the schema, so this cannot
    /// fail.
    pub fn build(self) -> Guard {
        self.inner.build()
    }
}

impl<S: Schema, C: Coverage> TrackedBuilder<S, C> {
    /// Append `predicate` to `key`'s sequence and mark `key` addressed.
    ///
    /// Keys `S` does not declare are accepted; they take part in evaluation
    /// like any other registered key but do not affect coverage.
    pub fn validate_property(
        mut self,
        key: impl Into<String>,
        predicate: impl Predicate + 'static,
    ) -> Self {
        let key = key.into();
        self.mark_addressed(&key);
        self.inner = self.inner.validate_property(key, predicate);
        self
    }

    /// Mark `key` addressed without constraining it.
    pub fn ignore_property(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.mark_addressed(&key);
        self.inner = self.inner.ignore_property(key);
        self
    }

    /// Silence missing-validator diagnostics for `keys`, or for every
    /// property when `keys` is empty. Does not affect coverage.
    pub fn suppress_missing_validator_warnings<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.inner = self.inner.suppress_missing_validator_warnings(keys);
        self
    }

    pub fn suppress_all_missing_validator_warnings(mut self) -> Self {
        self.inner = self.inner.suppress_all_missing_validator_warnings();
        self
    }

    /// Keys addressed so far, in first-address order.
    pub fn addressed_properties(&self) -> impl Iterator<Item = &str> {
        self.addressed.iter().map(String::as_str)
    }

    pub fn schema_name(&self) -> &str {
        self.inner.schema_name()
    }

    fn mark_addressed(&mut self, key: &str) {
        if !S::KEYS.iter().any(|declared| *declared == key) {
            tracing::debug!(
                schema = self.inner.schema_name(),
                key,
                "validator registered for a key the schema does not declare"
            );
        }
        if !self.addressed.iter().any(|a| a == key) {
            self.addressed.push(key.to_string());
        }
    }
}

//! # Guards and Predicates
//!
//! A [`Predicate`] is anything that can classify a [`Value`] as accepted or
//! rejected. Closures of type `Fn(&Value) -> bool` are predicates, and so is
//! [`Guard`].
//!
//! A [`Guard`] is the finalized, shareable form: a cheaply cloneable,
//! `Send + Sync` handle with a human-readable label and a
//! [`nullable`](Guard::nullable) accessor. Every predicate factory in
//! `guardkit-predicates` and every builder returns one.
//!
//! ## Failure Policy
//!
//! Evaluating a guard never unwinds into the caller. A predicate that panics
//! is logged at `ERROR` and the value is classified `false`.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::nullish::is_nullish;
use crate::value::Value;

/// A classification over untyped values.
pub trait Predicate: Send + Sync {
    /// Whether `value` is accepted.
    fn test(&self, value: &Value) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn test(&self, value: &Value) -> bool {
        self(value)
    }
}

/// A finalized, pure classification function.
#[derive(Clone)]
pub struct Guard {
    label: Arc<str>,
    inner: Arc<dyn Predicate>,
}

impl Guard {
    /// Wrap `predicate` under a descriptive `label` (e.g. `"string"`).
    pub fn new(label: impl AsRef<str>, predicate: impl Predicate + 'static) -> Self {
        Self {
            label: Arc::from(label.as_ref()),
            inner: Arc::new(predicate),
        }
    }

    /// A guard that accepts every value.
    pub fn always() -> Self {
        Self::new("unknown", |_: &Value| true)
    }

    /// Descriptive label, used in logs and by tooling.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Classify `value`.
    ///
    /// A panicking predicate is contained and classified `false`.
    pub fn check(&self, value: &Value) -> bool {
        match catch_unwind(AssertUnwindSafe(|| self.inner.test(value))) {
            Ok(accepted) => accepted,
            Err(_) => {
                tracing::error!(
                    guard = %self.label,
                    "predicate panicked; classifying value as rejected"
                );
                false
            }
        }
    }

    /// A guard that additionally accepts the given sentinels.
    ///
    /// The nullish classifier runs first; only values that are not
    /// sentinels reach this guard. An empty `sentinels` means the default
    /// pair `[Null, Undefined]`.
    pub fn nullable<I>(&self, sentinels: I) -> Guard
    where
        I: IntoIterator<Item = Value>,
    {
        let sentinels: Vec<Value> = sentinels.into_iter().collect();
        let base = self.clone();
        Guard::new(format!("{} | nullish", self.label), move |value: &Value| {
            is_nullish(value, &sentinels) || base.check(value)
        })
    }
}

impl Predicate for Guard {
    fn test(&self, value: &Value) -> bool {
        self.check(value)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("label", &self.label).finish()
    }
}

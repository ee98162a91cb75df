//! # guardkit-core — Foundational Types for guardkit
//!
//! This crate is the leaf of the guardkit dependency DAG. It defines the
//! pieces every other crate builds on:
//!
//! - [`Value`] — the untyped, already-materialized value a guard classifies.
//!   Carries distinct `Undefined` and `Null` sentinels, a date kind with an
//!   invalid state, and insertion-ordered objects.
//! - [`is_nullish`] — the nullish classifier used by every `.nullable(..)`
//!   variant.
//! - [`Guard`] and [`Predicate`] — the pure classification handle and the
//!   seam through which closures, library guards, and built guards compose.
//! - [`diagnostics`] — the advisory warning channel (missing validators and
//!   validation failures), routed through `tracing` and thread-local capture
//!   scopes.
//! - [`config`] — process-wide diagnostic configuration (enable switch and
//!   value redaction).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `guardkit-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Guards never fail loudly: classification failure is `false`, never an
//!   error.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod guard;
pub mod nullish;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use config::DiagnosticConfig;
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticTarget};
pub use error::ConfigError;
pub use guard::{Guard, Predicate};
pub use nullish::{is_nullish, DEFAULT_SENTINELS};
pub use value::{Object, Value};

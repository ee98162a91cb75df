//! # guardkit-builder — Record Guard Builders
//!
//! Composes predicates into a record [`Guard`](guardkit_core::Guard) for a
//! named shape.
//!
//! ## Builders
//!
//! - [`ValidatorBuilder`] (`builder.rs`): permissive. Accumulates root and
//!   per-property predicates with no completeness requirement.
//!
//! - [`TrackedBuilder`] (`tracked.rs`): wraps `ValidatorBuilder` and tracks
//!   which properties of a [`Schema`] were addressed. `build()` on
//!   `TrackedBuilder<S, Pending>` fails with [`BuildError::Incomplete`]
//!   until every declared key is covered. A root validator moves the
//!   builder to `TrackedBuilder<S, Covered>`, whose `build()` is infallible.
//!
//! ## Evaluation (`registry.rs`)
//!
//! A built guard walks the keys actually present on its input, not the keys
//! the schema declares. A declared property that is entirely absent from
//! the input is never checked, so `{a: string, b: number}` accepts
//! `{"a": "x"}`. A key that is present but holds `Undefined` is checked like
//! any other, and is rejected by every non-nullable library guard.
//!
//! ## Ownership
//!
//! Builders are move-only. Every registration consumes the builder and
//! returns it, so one half-built registry can never feed two guards.

pub mod builder;
pub mod error;
pub mod registry;
pub mod tracked;

pub use builder::ValidatorBuilder;
pub use error::BuildError;
pub use registry::Suppression;
pub use tracked::{Covered, Pending, Schema, TrackedBuilder};

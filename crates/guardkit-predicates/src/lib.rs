//! # guardkit-predicates — Primitive Predicate Library
//!
//! A fixed catalog of reusable guards, grouped by category. Every factory
//! returns a [`Guard`](guardkit_core::Guard), so every entry carries the
//! `.nullable(..)` accessor.
//!
//! | Category | Guards |
//! |---|---|
//! | [`basics`] | `string`, `number`, `boolean`, `object`, plus `is_nullish` |
//! | [`date`] | `date`, `date_string` |
//! | [`array`] | `array`, `array_of` |
//! | [`enums`] | `member_of`, `key_of` |
//!
//! ## Crate Policy
//!
//! - Depends only on `guardkit-core` internally.
//! - Guards are pure apart from diagnostic emission; only `array_of` emits.

pub mod array;
pub mod basics;
pub mod date;
pub mod enums;

pub use array::{array, array_of};
pub use basics::{boolean, number, object, string};
pub use date::{date, date_string};
pub use enums::{key_of, member_of, DeclaredEnum, EnumDescriptor};

//! # guardkit-cli — Schema-File Tooling
//!
//! Library half of the `guardkit` binary. Builds record guards from
//! declarative schema files using only the public builder API, then checks
//! documents against them.
//!
//! ## Modules
//!
//! - [`schema_file`] — schema file format, loading, and guard construction.
//! - [`document`] — loading JSON/YAML documents into guard values.
//! - [`check`] — the `check` and `describe` subcommands.

pub mod check;
pub mod document;
pub mod schema_file;

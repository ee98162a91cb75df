//! # Diagnostic Sink
//!
//! Advisory, human-readable warnings that explain why a value failed or why
//! a property went unchecked. Diagnostics never panic and never change a
//! guard's boolean result.
//!
//! ## Kinds
//!
//! - **Missing validator** — an input carried a property that no predicate
//!   was registered for (and no root validator or suppression covers it).
//! - **Validation failed** — a registered predicate rejected its input. The
//!   target is the root object, a named property, or an array member.
//!
//! ## Delivery
//!
//! Every emitted diagnostic goes to two places:
//!
//! 1. A `tracing` `WARN` event on target `guardkit::diagnostics`, with
//!    structured `kind`, `schema`, and `property` fields.
//! 2. Every [`capture`] scope open on the current thread.
//!
//! Nothing is delivered while diagnostics are disabled in
//! [`config`](crate::config).

use std::cell::RefCell;
use std::fmt;

use crate::config;
use crate::value::Value;

/// Placeholder substituted for offending values when redaction is on.
pub const REDACTED: &str = "[REDACTED]";

/// What a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// An observed property had no registered validator.
    MissingValidator,
    /// A registered predicate rejected its input.
    ValidationFailed,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MissingValidator => f.write_str("missing-validator"),
            DiagnosticKind::ValidationFailed => f.write_str("validation-failed"),
        }
    }
}

/// Which part of the input a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticTarget {
    /// The whole candidate object.
    Root,
    /// A single named property.
    Property(String),
    /// Some element of an array. No index is reported.
    ArrayMember,
}

impl fmt::Display for DiagnosticTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticTarget::Root => f.write_str("root"),
            DiagnosticTarget::Property(name) => f.write_str(name),
            DiagnosticTarget::ArrayMember => f.write_str("a member of the array"),
        }
    }
}

/// A single advisory notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Schema name of the guard that emitted it. `None` for library guards
    /// that are not tied to a schema, such as `array_of`.
    pub schema: Option<String>,
    pub target: DiagnosticTarget,
    /// Rendered offending value, or [`REDACTED`]. `None` when the kind
    /// carries no value.
    pub value: Option<String>,
}

impl Diagnostic {
    /// A property was observed on the input but nothing validates it.
    pub fn missing_validator(schema: &str, property: &str) -> Self {
        Self {
            kind: DiagnosticKind::MissingValidator,
            schema: Some(schema.to_string()),
            target: DiagnosticTarget::Property(property.to_string()),
            value: None,
        }
    }

    /// A registered predicate rejected `value`. Redaction is applied here,
    /// according to the configuration in effect at emission time.
    pub fn validation_failed(schema: &str, target: DiagnosticTarget, value: &Value) -> Self {
        Self {
            kind: DiagnosticKind::ValidationFailed,
            schema: Some(schema.to_string()),
            target,
            value: Some(render_value(value)),
        }
    }

    /// The single generic notice emitted when an array element is rejected.
    pub fn array_member_failed() -> Self {
        Self {
            kind: DiagnosticKind::ValidationFailed,
            schema: None,
            target: DiagnosticTarget::ArrayMember,
            value: None,
        }
    }

    /// The property name this diagnostic is about, if any.
    pub fn property(&self) -> Option<&str> {
        match &self.target {
            DiagnosticTarget::Property(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.schema {
            write!(f, "[{schema}] ")?;
        }
        match (&self.kind, &self.target) {
            (DiagnosticKind::MissingValidator, target) => {
                write!(f, "no validator registered for property \"{target}\"")
            }
            (DiagnosticKind::ValidationFailed, DiagnosticTarget::Property(name)) => {
                write!(f, "validation failed for property \"{name}\"")?;
                if let Some(value) = &self.value {
                    write!(f, ": {value}")?;
                }
                Ok(())
            }
            (DiagnosticKind::ValidationFailed, target) => {
                write!(f, "validation failed for {target}")?;
                if let Some(value) = &self.value {
                    write!(f, ": {value}")?;
                }
                Ok(())
            }
        }
    }
}

fn render_value(value: &Value) -> String {
    if config::redact_values() {
        REDACTED.to_string()
    } else {
        value.to_string()
    }
}

// ─── Emission ────────────────────────────────────────────────────────

thread_local! {
    /// Open capture scopes on this thread, innermost last.
    static CAPTURE: RefCell<Vec<Vec<Diagnostic>>> = const { RefCell::new(Vec::new()) };
}

/// Deliver `diagnostic` to `tracing` and to every open capture scope.
///
/// No-op while diagnostics are disabled.
pub fn emit(diagnostic: Diagnostic) {
    if !config::enabled() {
        return;
    }

    tracing::warn!(
        target: "guardkit::diagnostics",
        kind = %diagnostic.kind,
        schema = diagnostic.schema.as_deref().unwrap_or(""),
        property = %diagnostic.target,
        "{diagnostic}"
    );

    CAPTURE.with(|scopes| {
        for scope in scopes.borrow_mut().iter_mut() {
            scope.push(diagnostic.clone());
        }
    });
}

/// Run `f`, collecting every diagnostic emitted on this thread while it runs.
///
/// Scopes nest: an outer scope also receives what inner scopes collect.
/// Guards evaluate synchronously on the caller's thread, so wrapping a guard
/// invocation in `capture` observes all of its diagnostics.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Diagnostic>) {
    let scope = CaptureScope::open();
    let result = f();
    (result, scope.close())
}

/// Keeps the capture stack balanced even if the closure unwinds.
struct CaptureScope {
    depth: usize,
}

impl CaptureScope {
    fn open() -> Self {
        CAPTURE.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            scopes.push(Vec::new());
            Self {
                depth: scopes.len(),
            }
        })
    }

    fn close(self) -> Vec<Diagnostic> {
        CAPTURE.with(|scopes| {
            scopes
                .borrow_mut()
                .get_mut(self.depth - 1)
                .map(std::mem::take)
                .unwrap_or_default()
        })
    }
}

impl Drop for CaptureScope {
    fn drop(&mut self) {
        CAPTURE.with(|scopes| scopes.borrow_mut().truncate(self.depth - 1));
    }
}

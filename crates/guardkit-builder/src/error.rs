//! Construction-time errors.

use thiserror::Error;

/// A guard could not be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Some declared properties were never validated or ignored, and no
    /// root validator covers the schema.
    #[error("schema '{schema}' is incomplete; missing properties: {}", .missing.join(", "))]
    Incomplete {
        /// Schema name passed to `start`.
        schema: String,
        /// Declared keys not yet addressed, in declaration order.
        missing: Vec<String>,
    },
}

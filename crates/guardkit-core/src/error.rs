//! # Error Types
//!
//! Guards never return errors: a value that does not match is simply
//! classified `false`. Errors exist only where something other than
//! classification can go wrong, such as loading diagnostic configuration
//! from the environment.

use thiserror::Error;

/// Error while reading diagnostic configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment flag held something other than a recognized boolean.
    #[error("invalid value for {var}: {value:?} (expected one of 1/0, true/false, on/off, yes/no)")]
    InvalidFlag {
        /// Environment variable name.
        var: String,
        /// The raw value that failed to parse.
        value: String,
    },
}

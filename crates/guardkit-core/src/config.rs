//! # Diagnostic Configuration
//!
//! Process-wide settings read on every diagnostic emission:
//!
//! - `enabled` — master switch. When off, no diagnostic reaches `tracing`
//!   or any capture scope.
//! - `redact_values` — when on, validation-failure diagnostics carry the
//!   fixed placeholder [`REDACTED`](crate::diagnostics::REDACTED) instead of
//!   the offending value.
//!
//! ## Lifecycle
//!
//! Set once at startup (explicitly via [`DiagnosticConfig::install`] or from
//! the environment via [`DiagnosticConfig::from_env`]), then read on every
//! emission. The settings live in atomics rather than in any guard, so a
//! guard built before the configuration changes observes the new values.
//!
//! ## Environment
//!
//! - `GUARDKIT_DIAGNOSTICS` (default: on)
//! - `GUARDKIT_REDACT_VALUES` (default: off)

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ConfigError;

static ENABLED: AtomicBool = AtomicBool::new(true);
static REDACT_VALUES: AtomicBool = AtomicBool::new(false);

/// Snapshot of the process-wide diagnostic settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticConfig {
    /// Whether diagnostics are emitted at all.
    pub enabled: bool,
    /// Whether offending values are replaced by a placeholder.
    pub redact_values: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            redact_values: false,
        }
    }
}

impl DiagnosticConfig {
    /// The settings currently in effect.
    pub fn current() -> Self {
        Self {
            enabled: enabled(),
            redact_values: redact_values(),
        }
    }

    /// Make these settings the process-wide configuration.
    pub fn install(self) {
        set_enabled(self.enabled);
        set_redact_values(self.redact_values);
        tracing::debug!(
            enabled = self.enabled,
            redact_values = self.redact_values,
            "diagnostic configuration installed"
        );
    }

    /// Load settings from `GUARDKIT_DIAGNOSTICS` and `GUARDKIT_REDACT_VALUES`,
    /// falling back to [`Default`] for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidFlag` if a variable is set to something
    /// that is not a recognized boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            enabled: env_flag("GUARDKIT_DIAGNOSTICS", defaults.enabled)?,
            redact_values: env_flag("GUARDKIT_REDACT_VALUES", defaults.redact_values)?,
        })
    }
}

/// Whether diagnostics are currently emitted.
pub fn enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether offending values are currently redacted.
pub fn redact_values() -> bool {
    REDACT_VALUES.load(Ordering::Relaxed)
}

pub fn set_redact_values(redact: bool) {
    REDACT_VALUES.store(redact, Ordering::Relaxed);
}

fn env_flag(var: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse_flag(&raw).ok_or_else(|| ConfigError::InvalidFlag {
            var: var.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_enabled_and_unredacted() {
        let cfg = DiagnosticConfig::default();
        assert!(cfg.enabled);
        assert!(!cfg.redact_values);
    }

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        for raw in ["1", "true", "TRUE", " on ", "yes"] {
            assert_eq!(parse_flag(raw), Some(true), "{raw}");
        }
        for raw in ["0", "false", "Off", "no"] {
            assert_eq!(parse_flag(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_env_flag_uses_default_when_var_absent() {
        assert!(env_flag("GUARDKIT_NONEXISTENT_FLAG_12345", true).unwrap());
        assert!(!env_flag("GUARDKIT_NONEXISTENT_FLAG_12345", false).unwrap());
    }

    #[test]
    fn test_env_flag_rejects_garbage() {
        std::env::set_var("GUARDKIT_TEST_BAD_FLAG", "sometimes");
        let result = env_flag("GUARDKIT_TEST_BAD_FLAG", true);
        std::env::remove_var("GUARDKIT_TEST_BAD_FLAG");
        assert_eq!(
            result,
            Err(ConfigError::InvalidFlag {
                var: "GUARDKIT_TEST_BAD_FLAG".to_string(),
                value: "sometimes".to_string(),
            })
        );
    }
}

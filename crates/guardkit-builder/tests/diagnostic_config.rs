//! Process-wide diagnostic configuration. Lives in its own test binary and
//! a single test function because it mutates global state.

use guardkit_builder::ValidatorBuilder;
use guardkit_core::config::{self, DiagnosticConfig};
use guardkit_core::diagnostics::{capture, REDACTED};
use guardkit_core::Value;
use guardkit_predicates::number;
use serde_json::json;

#[test]
fn test_configuration_applies_to_guards_built_earlier() {
    let guard = ValidatorBuilder::start("Secret")
        .validate_property("pin", number())
        .build();
    let candidate = Value::from(json!({"pin": "1234", "extra": 1}));

    // Defaults: values shown.
    DiagnosticConfig::default().install();
    let (_, diags) = capture(|| guard.check(&candidate));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].value.as_deref(), Some("\"1234\""));
    assert!(diags[0].to_string().contains("1234"));

    // Redaction, switched on after the guard was built.
    config::set_redact_values(true);
    let (ok, diags) = capture(|| guard.check(&candidate));
    assert!(!ok);
    assert_eq!(diags[0].value.as_deref(), Some(REDACTED));
    assert!(!diags[0].to_string().contains("1234"));
    assert!(DiagnosticConfig::current().redact_values);

    // Disabled: nothing delivered, result unchanged.
    DiagnosticConfig {
        enabled: false,
        redact_values: false,
    }
    .install();
    let (ok, diags) = capture(|| guard.check(&candidate));
    assert!(!ok);
    assert!(diags.is_empty());

    DiagnosticConfig::default().install();
    assert_eq!(DiagnosticConfig::current(), DiagnosticConfig::default());
}

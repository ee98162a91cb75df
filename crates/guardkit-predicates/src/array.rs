//! Array guards.
//!
//! [`array_of`] reports a rejected element with one generic
//! validation-failure diagnostic. It does not say which index failed.

use guardkit_core::diagnostics::{self, Diagnostic};
use guardkit_core::{Guard, Value};

/// Any array, regardless of its elements.
pub fn array() -> Guard {
    Guard::new("array", |v: &Value| matches!(v, Value::Array(_)))
}

/// An array whose every element satisfies `element`. Empty arrays pass.
pub fn array_of(element: Guard) -> Guard {
    let label = format!("{}[]", element.label());
    Guard::new(label, move |v: &Value| {
        let Some(items) = v.as_array() else {
            return false;
        };
        if items.iter().all(|item| element.check(item)) {
            true
        } else {
            diagnostics::emit(Diagnostic::array_member_failed());
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{number, string};
    use guardkit_core::diagnostics::capture;
    use guardkit_core::DiagnosticTarget;
    use serde_json::json;

    #[test]
    fn test_array_accepts_any_elements() {
        assert!(array().check(&Value::from(json!([1, "a", null]))));
        assert!(!array().check(&Value::from(json!({"0": 1}))));
    }

    #[test]
    fn test_array_of_rejects_mixed_elements_with_one_diagnostic() {
        let g = array_of(string());
        let (ok, diags) = capture(|| g.check(&Value::from(json!(["a", 1, 2]))));
        assert!(!ok);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].target, DiagnosticTarget::ArrayMember);
        assert_eq!(diags[0].schema, None);
    }

    #[test]
    fn test_array_of_accepts_empty() {
        let (ok, diags) = capture(|| array_of(string()).check(&Value::from(json!([]))));
        assert!(ok);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_array_of_non_array_is_silent() {
        let (ok, diags) = capture(|| array_of(number()).check(&Value::from("1,2")));
        assert!(!ok);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_array_of_nullable_elements() {
        let g = array_of(string().nullable([]));
        assert!(g.check(&Value::from(json!(["a", null]))));
        assert_eq!(g.label(), "string | nullish[]");
    }

    #[test]
    fn test_nested_array_of() {
        let g = array_of(array_of(number()));
        assert!(g.check(&Value::from(json!([[1, 2], []]))));
        assert!(!g.check(&Value::from(json!([[1], ["x"]]))));
    }
}

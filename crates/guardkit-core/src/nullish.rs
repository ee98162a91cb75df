//! # Nullish Classifier
//!
//! Decides whether a value is one of a caller-chosen set of "absent"
//! sentinels. Every `.nullable(..)` variant in guardkit routes through
//! [`is_nullish`] before falling back to its base guard.
//!
//! An empty sentinel set means the default pair `[Null, Undefined]`.
//! Matching is plain value equality, so a caller can nominate any value
//! (an empty string, `0`, a marker object) as a sentinel.

use crate::value::Value;

/// The sentinel set used when a caller supplies none.
pub static DEFAULT_SENTINELS: [Value; 2] = [Value::Null, Value::Undefined];

/// Returns true iff `value` equals one of `allowed`, or one of
/// [`DEFAULT_SENTINELS`] when `allowed` is empty.
///
/// Total over all inputs. No side effects, no diagnostics.
pub fn is_nullish(value: &Value, allowed: &[Value]) -> bool {
    let allowed = if allowed.is_empty() {
        &DEFAULT_SENTINELS[..]
    } else {
        allowed
    };
    allowed.iter().any(|sentinel| sentinel == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_set_is_null_and_undefined() {
        assert!(is_nullish(&Value::Null, &[]));
        assert!(is_nullish(&Value::Undefined, &[]));
        assert!(!is_nullish(&Value::from(""), &[]));
        assert!(!is_nullish(&Value::from(0), &[]));
        assert!(!is_nullish(&Value::Bool(false), &[]));
    }

    #[test]
    fn test_explicit_set_replaces_defaults() {
        let only_null = [Value::Null];
        assert!(is_nullish(&Value::Null, &only_null));
        assert!(!is_nullish(&Value::Undefined, &only_null));
    }

    #[test]
    fn test_arbitrary_values_can_be_sentinels() {
        let sentinels = [Value::from(""), Value::from(-1)];
        assert!(is_nullish(&Value::from(""), &sentinels));
        assert!(is_nullish(&Value::from(-1), &sentinels));
        assert!(!is_nullish(&Value::Null, &sentinels));
    }

    proptest! {
        #[test]
        fn test_strings_are_never_default_nullish(s in ".*") {
            prop_assert!(!is_nullish(&Value::from(s), &[]));
        }

        #[test]
        fn test_any_nominated_number_is_nullish(n in -1.0e9f64..1.0e9) {
            prop_assert!(is_nullish(&Value::Number(n), &[Value::Number(n)]));
        }
    }
}

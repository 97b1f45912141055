//! Ordering predicates
//!
//! Integers, unsigned integers, floats and strings have a natural order.
//! Comparisons convert the right-hand side to the type of the left-hand
//! side, so `is_less_than(&Value::from(1i8), &Value::from(300i64))` compares
//! against the wrapped value `44i8`.

use std::cmp::Ordering;

use crate::adapt::Filter;
use crate::error::AdaptError;
use crate::types::{Kind, Type};
use crate::value::Value;

/// Returns true for kinds with a natural order.
pub fn is_lessable_kind(kind: Kind) -> bool {
    kind.is_lessable()
}

fn ordered_type(value: &Value) -> Result<&Type, AdaptError> {
    match value.type_of() {
        Some(ty) if is_lessable_kind(ty.kind()) => Ok(ty),
        ty => Err(AdaptError::Unordered(ty.cloned())),
    }
}

fn compare(a: &Value, b: &Value) -> Result<Option<Ordering>, AdaptError> {
    let ty = ordered_type(a)?;
    Ok(a.compare(&b.convert(ty)?))
}

/// `a < b`
///
/// # Errors
///
/// [`AdaptError::Unordered`] when `a` has no natural order and
/// [`AdaptError::Conversion`] when `b` cannot be converted to its type.
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::is_less_than;
/// use anyfn::Value;
///
/// assert!(is_less_than(&Value::from(1i64), &Value::from(2u8)).unwrap());
/// assert!(is_less_than(&Value::from("a"), &Value::from("b")).unwrap());
/// assert!(is_less_than(&Value::from(true), &Value::from(false)).is_err());
/// ```
pub fn is_less_than(a: &Value, b: &Value) -> Result<bool, AdaptError> {
    Ok(compare(a, b)? == Some(Ordering::Less))
}

/// `a <= b`
pub fn is_less_than_equal(a: &Value, b: &Value) -> Result<bool, AdaptError> {
    Ok(matches!(compare(a, b)?, Some(Ordering::Less | Ordering::Equal)))
}

/// `a > b`
pub fn is_greater_than(a: &Value, b: &Value) -> Result<bool, AdaptError> {
    Ok(compare(a, b)? == Some(Ordering::Greater))
}

/// `a >= b`
pub fn is_greater_than_equal(a: &Value, b: &Value) -> Result<bool, AdaptError> {
    Ok(matches!(
        compare(a, b)?,
        Some(Ordering::Greater | Ordering::Equal)
    ))
}

fn bound(val: Value, accept: fn(Ordering) -> bool) -> Result<Filter, AdaptError> {
    let ty = ordered_type(&val)?.clone();
    Ok(Filter::from_fn(move |arg| {
        Ok(arg
            .convert(&ty)
            .ok()
            .and_then(|arg| arg.compare(&val))
            .is_some_and(accept))
    }))
}

/// A filter testing `arg < val`.
///
/// Arguments that are nil or cannot be converted to the type of `val` are
/// never less.
///
/// # Errors
///
/// [`AdaptError::Unordered`] when `val` has no natural order.
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::less_than;
///
/// let small = less_than(3i64).unwrap();
/// assert!(small.test(2u8).unwrap());
/// assert!(!small.test(3i64).unwrap());
/// assert!(!small.test("2").unwrap());
/// ```
pub fn less_than(val: impl Into<Value>) -> Result<Filter, AdaptError> {
    bound(val.into(), Ordering::is_lt)
}

/// A filter testing `arg <= val`.
pub fn less_than_equal(val: impl Into<Value>) -> Result<Filter, AdaptError> {
    bound(val.into(), Ordering::is_le)
}

/// A filter testing `arg > val`.
pub fn greater_than(val: impl Into<Value>) -> Result<Filter, AdaptError> {
    bound(val.into(), Ordering::is_gt)
}

/// A filter testing `arg >= val`.
pub fn greater_than_equal(val: impl Into<Value>) -> Result<Filter, AdaptError> {
    bound(val.into(), Ordering::is_ge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_fault;

    #[test]
    fn test_lessable_kinds() {
        assert!(is_lessable_kind(Kind::Int8));
        assert!(is_lessable_kind(Kind::Uint64));
        assert!(is_lessable_kind(Kind::Float32));
        assert!(is_lessable_kind(Kind::String));
        assert!(!is_lessable_kind(Kind::Bool));
        assert!(!is_lessable_kind(Kind::Slice));
        assert!(!is_lessable_kind(Kind::Interface));
    }

    #[test]
    fn test_comparisons() {
        let one = Value::from(1i64);
        let two = Value::from(2i64);
        assert!(is_less_than(&one, &two).unwrap());
        assert!(!is_less_than(&two, &one).unwrap());
        assert!(is_less_than_equal(&one, &one).unwrap());
        assert!(is_greater_than(&two, &one).unwrap());
        assert!(is_greater_than_equal(&two, &two).unwrap());
        assert!(!is_greater_than_equal(&one, &two).unwrap());
    }

    #[test]
    fn test_right_side_is_converted() {
        // 300 wraps to 44 as int8
        assert!(is_greater_than(&Value::from(50i8), &Value::from(300i64)).unwrap());
        assert!(is_less_than(&Value::from(1.5f64), &Value::from(2u8)).unwrap());
    }

    #[test]
    fn test_comparison_faults() {
        assert_fault!(
            is_less_than(&Value::from(true), &Value::from(false)),
            AdaptError::Unordered(Some(Type::Bool))
        );
        assert_fault!(
            is_less_than(&Value::nil(), &Value::from(1i64)),
            AdaptError::Unordered(None)
        );
        assert!(is_less_than(&Value::from(1i64), &Value::from("2"))
            .unwrap_err()
            .is_conversion());
    }

    #[test]
    fn test_nan_is_unordered() {
        let nan = Value::from(f64::NAN);
        let one = Value::from(1.0f64);
        assert!(!is_less_than(&nan, &one).unwrap());
        assert!(!is_less_than_equal(&nan, &one).unwrap());
        assert!(!is_greater_than(&nan, &one).unwrap());
        assert!(!is_greater_than_equal(&nan, &nan).unwrap());
        assert!(!less_than(1.0f64).unwrap().test(f64::NAN).unwrap());
    }

    #[test]
    fn test_bound_filters() {
        let lt = less_than(10i64).unwrap();
        let le = less_than_equal(10i64).unwrap();
        let gt = greater_than(10i64).unwrap();
        let ge = greater_than_equal(10i64).unwrap();

        assert!(lt.test(9u8).unwrap() && !lt.test(10u8).unwrap());
        assert!(le.test(10u8).unwrap() && !le.test(11u8).unwrap());
        assert!(gt.test(11u8).unwrap() && !gt.test(10u8).unwrap());
        assert!(ge.test(10u8).unwrap() && !ge.test(9u8).unwrap());
    }

    #[test]
    fn test_bound_filters_reject_foreign_arguments() {
        let lt = less_than("m").unwrap();
        assert!(lt.test("a").unwrap());
        assert!(!lt.test("z").unwrap());
        assert!(!lt.test(Value::nil()).unwrap());
        assert!(!lt.test(true).unwrap());
    }

    #[test]
    fn test_bound_requires_ordered_value() {
        assert_fault!(
            less_than(vec![1i64]),
            AdaptError::Unordered(Some(Type::slice(Type::Int)))
        );
        assert_fault!(greater_than(Value::nil()), AdaptError::Unordered(None));
    }
}

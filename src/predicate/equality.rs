//! Nil checks, equality filters and conversion
//!
//! Equality filters convert their argument to the type of the reference
//! value before comparing. An argument that cannot be converted is simply
//! not equal.

use crate::adapt::{Filter, Mapper};
use crate::error::AdaptError;
use crate::value::Value;

/// Returns true for untyped nil and for values of a nilable kind.
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::is_nilable;
/// use anyfn::{Func, Value};
///
/// assert!(is_nilable(&Value::nil()));
/// assert!(is_nilable(&Value::from(vec![1i64])));
/// assert!(is_nilable(&Value::from(Func::action(|| {}))));
/// assert!(!is_nilable(&Value::from("")));
/// ```
pub fn is_nilable(value: &Value) -> bool {
    value.is_nilable()
}

/// Returns true for untyped nil and for null references of a nilable type.
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::is_nil;
/// use anyfn::{Type, Value};
///
/// assert!(is_nil(&Value::nil()));
/// assert!(is_nil(&Value::nil_of(Type::map(Type::String, Type::Int)).unwrap()));
/// assert!(!is_nil(&Value::from(0i64)));
/// ```
pub fn is_nil(value: &Value) -> bool {
    value.is_nilable() && value.is_nil()
}

/// A filter that is true when its argument equals `val`.
///
/// Comparable values compare by value. Slices, maps and functions compare by
/// identity, so only clones of `val` itself are equal to it. Use
/// [`deep_equal_to`] for structural comparison.
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::equal_to;
/// use anyfn::Value;
///
/// let five = equal_to(5i64);
/// assert!(five.test(5u8).unwrap());
/// assert!(!five.test("5").unwrap());
///
/// let nil = equal_to(Value::nil());
/// assert!(nil.test(Value::nil()).unwrap());
/// assert!(!nil.test(5i64).unwrap());
/// ```
pub fn equal_to(val: impl Into<Value>) -> Filter {
    let val = val.into();
    Filter::from_fn(move |arg| Ok(matches(&val, arg, Value::shallow_eq)))
}

/// A filter that is true when its argument is structurally equal to `val`.
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::{deep_equal_to, equal_to};
///
/// let xs = vec![1i64, 2];
/// assert!(deep_equal_to(xs.clone()).test(xs.clone()).unwrap());
/// assert!(!equal_to(xs.clone()).test(xs).unwrap());
/// ```
pub fn deep_equal_to(val: impl Into<Value>) -> Filter {
    let val = val.into();
    Filter::from_fn(move |arg| Ok(matches(&val, arg, Value::deep_eq)))
}

fn matches(val: &Value, arg: &Value, eq: fn(&Value, &Value) -> bool) -> bool {
    let Some(ty) = val.type_of() else {
        return arg.type_of().is_none();
    };
    match arg.convert(ty) {
        Ok(converted) if val.is_nil() => converted.is_nil(),
        Ok(converted) => !converted.is_nil() && eq(&converted, val),
        Err(_) => false,
    }
}

/// A mapper converting its argument to the type of `sample`.
///
/// # Errors
///
/// [`AdaptError::NilProbe`] when `sample` is untyped nil. Each call fails
/// with [`AdaptError::Conversion`] when its argument cannot be converted.
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::convert_to;
/// use anyfn::Value;
///
/// let to_u8 = convert_to(&Value::from(0u8)).unwrap();
/// let out = to_u8.apply(258i64).unwrap();
/// assert_eq!(out, Value::from(2u8));
/// ```
pub fn convert_to(sample: &Value) -> Result<Mapper, AdaptError> {
    let ty = sample.type_of().cloned().ok_or(AdaptError::NilProbe)?;
    Ok(Mapper::from_fn(move |arg| arg.convert(&ty)))
}

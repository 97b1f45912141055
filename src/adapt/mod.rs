//! Type-adaptation core
//!
//! Each adapter takes a loosely-typed [`Func`] (wrapped in a [`Value`]),
//! checks once that it has the shape the adapter needs, and returns an
//! adapter with a fixed, uniform signature over dynamic values:
//!
//! | Adapter | Input shape | Uniform signature |
//! |---|---|---|
//! | [`filter`] | `func(T) bool` | `func(any) bool` |
//! | [`map`] | `func(T) R` | `func(any) any` |
//! | [`map_to`] | `func(T) R`, R convertible to X | `func(any) X` |
//! | [`supplier`] | `func() R` | `func() any` |
//! | [`supplier_of`] | `func() R`, R convertible to X | `func() X` |
//! | [`consumer`] | `func(T)` | `func(any)` |
//!
//! A callable that already has the uniform signature is used as is. Anything
//! else is wrapped so that each call converts the argument to the declared
//! parameter type, and for `map_to`/`supplier_of` converts the result to X.
//!
//! # Example
//!
//! ```rust
//! use anyfn::adapt::{filter, map_to};
//! use anyfn::{Func, Value};
//!
//! let small = filter(Func::unary(|i: i64| i < 3)).unwrap();
//! assert!(small.test(1u8).unwrap());
//! assert!(!small.test(5i32).unwrap());
//!
//! let doubled = map_to::<i64>(Func::unary(|i: i8| i * 2)).unwrap();
//! assert_eq!(doubled.apply(2i64).unwrap(), 4);
//!
//! // Shape faults are raised when the adapter is built
//! assert!(filter(Func::unary(|i: i64| i)).is_err());
//! ```

mod consumer;
mod filter;
mod mapper;
mod supplier;

pub use consumer::{consumer, Consumer};
pub use filter::{filter, Filter};
pub use mapper::{map, map_to, map_to_sample, Mapper, MapperTo};
pub use supplier::{supplier, supplier_of, supplier_of_sample, Supplier, SupplierOf};

use crate::error::AdaptError;
use crate::func::Func;
use crate::types::{Kind, Type};
use crate::value::Value;

/// The non-nil callable inside `value`, if it takes `num_in` arguments and
/// returns `num_out` results.
pub(crate) fn callable<'a>(
    value: &'a Value,
    num_in: usize,
    num_out: usize,
    shape: &str,
) -> Result<&'a Func, AdaptError> {
    match value.as_func() {
        Some(func)
            if func.signature().num_in() == num_in && func.signature().num_out() == num_out =>
        {
            Ok(func)
        }
        _ => Err(AdaptError::shape(shape)),
    }
}

/// Target type named by a probe value.
pub(crate) fn probe_type(probe: &Value) -> Result<Type, AdaptError> {
    match probe.type_of() {
        Some(ty) if !probe.is_nil() => target_type(ty.clone()),
        _ => Err(AdaptError::NilProbe),
    }
}

/// Rejects `any` as an adaptation target.
pub(crate) fn target_type(ty: Type) -> Result<Type, AdaptError> {
    if ty.kind() == Kind::Interface {
        return Err(AdaptError::AnyProbe);
    }
    Ok(ty)
}

fn adapted(adapter: &'static str, func: &Func, fast_path: bool) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        adapter,
        signature = %func.signature(),
        fast_path,
        "adapted callable"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (adapter, func, fast_path);
}

fn rejected(adapter: &'static str, err: AdaptError) -> AdaptError {
    #[cfg(feature = "tracing")]
    tracing::debug!(adapter, error = %err, "rejected callable");
    #[cfg(not(feature = "tracing"))]
    let _ = adapter;
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callable_rejects_non_functions() {
        assert!(callable(&Value::from(0i64), 1, 1, "shape").is_err());
        assert!(callable(&Value::nil(), 1, 1, "shape").is_err());

        let nil_fn = Value::nil_of(Type::func(vec![Type::Int], vec![Type::Bool])).unwrap();
        assert_eq!(
            callable(&nil_fn, 1, 1, "shape").unwrap_err(),
            AdaptError::Shape("shape".to_string())
        );
    }

    #[test]
    fn test_callable_checks_counts() {
        let f = Value::from(Func::unary(|i: i64| i));
        assert!(callable(&f, 1, 1, "shape").is_ok());
        assert!(callable(&f, 0, 1, "shape").is_err());
        assert!(callable(&f, 1, 0, "shape").is_err());
    }

    #[test]
    fn test_probe_type() {
        assert_eq!(probe_type(&Value::from(0i64)), Ok(Type::Int));
        assert_eq!(probe_type(&Value::nil()), Err(AdaptError::NilProbe));

        let nil_ptr = Value::nil_of(Type::pointer(Type::Int)).unwrap();
        assert_eq!(probe_type(&nil_ptr), Err(AdaptError::NilProbe));

        assert_eq!(target_type(Type::Any), Err(AdaptError::AnyProbe));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use crate::adapt::{filter, map};
        use crate::Func;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_adaptation_is_traced() {
            let _ = filter(Func::unary(|i: i64| i > 0)).unwrap();
            assert!(logs_contain("adapted callable"));
            assert!(logs_contain("fast_path=false"));
        }

        #[test]
        #[traced_test]
        fn test_rejection_is_traced() {
            assert!(map(Func::action(|| {})).is_err());
            assert!(logs_contain("rejected callable"));
        }
    }
}

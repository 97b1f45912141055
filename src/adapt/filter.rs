//! Predicate adapter

use crate::control::OrAbort;
use crate::error::{AdaptError, FILTER_SHAPE};
use crate::func::{first, single, Func};
use crate::predicate::Predicate;
use crate::types::{Kind, Signature, Type};
use crate::value::Value;

use super::{adapted, callable, rejected};

/// A predicate over dynamic values: `func(any) bool`.
///
/// Built by [`filter`] and by the combinators in
/// [`predicate`](crate::predicate).
#[derive(Clone, Debug)]
pub struct Filter {
    func: Func,
}

impl Filter {
    pub(crate) fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<bool, AdaptError> + Send + Sync + 'static,
    {
        let func = Func::new(signature(), move |args| {
            let matched = f(first(args)?)?;
            Ok(vec![Value::from(matched)])
        });
        Filter { func }
    }

    /// Evaluate the predicate.
    ///
    /// Fails when `arg` cannot be converted to the parameter type of the
    /// adapted function.
    pub fn test(&self, arg: impl Into<Value>) -> Result<bool, AdaptError> {
        bool_result(self.func.call(&[arg.into()])?)
    }

    /// The uniform `func(any) bool` callable.
    pub fn as_func(&self) -> &Func {
        &self.func
    }

    /// Consumes the adapter, returning the uniform callable.
    pub fn into_func(self) -> Func {
        self.func
    }
}

/// Panics with the [`AdaptError`] when the argument cannot be converted.
impl Predicate<Value> for Filter {
    fn check(&self, value: &Value) -> bool {
        self.test(value.clone()).or_abort()
    }
}

impl From<Filter> for Value {
    fn from(filter: Filter) -> Self {
        Value::from(filter.func)
    }
}

impl AsRef<Func> for Filter {
    fn as_ref(&self) -> &Func {
        &self.func
    }
}

fn signature() -> Signature {
    Signature::new(vec![Type::Any], vec![Type::Bool])
}

fn bool_result(results: Vec<Value>) -> Result<bool, AdaptError> {
    let result = single(results)?;
    result
        .as_bool()
        .ok_or_else(|| AdaptError::conversion(result.type_of(), &Type::Bool))
}

/// Adapts a `func(T) bool` into a `func(any) bool`.
///
/// A `func(any) bool` is returned as is. Otherwise each call converts its
/// argument to `T` before invoking `f`.
///
/// # Errors
///
/// [`AdaptError::Shape`] with [`FILTER_SHAPE`] unless `f` is a non-nil
/// function of one argument returning one boolean.
///
/// # Example
///
/// ```rust
/// use anyfn::adapt::filter;
/// use anyfn::{Func, Value};
///
/// let even = filter(Func::unary(|i: i64| i % 2 == 0)).unwrap();
/// assert!(even.test(4u8).unwrap());
///
/// // Already uniform: no wrapping
/// let any_even = Func::unary(|v: Value| v.as_i64().is_some_and(|i| i % 2 == 0));
/// let adapted = filter(any_even.clone()).unwrap();
/// assert!(Func::ptr_eq(adapted.as_func(), &any_even));
/// ```
pub fn filter(f: impl Into<Value>) -> Result<Filter, AdaptError> {
    let value = f.into();
    let func = callable(&value, 1, 1, FILTER_SHAPE).map_err(|e| rejected("filter", e))?;
    let sig = func.signature();
    if sig.results().first().map(Type::kind) != Some(Kind::Bool) {
        return Err(rejected("filter", AdaptError::shape(FILTER_SHAPE)));
    }

    if *sig == signature() {
        adapted("filter", func, true);
        return Ok(Filter { func: func.clone() });
    }

    adapted("filter", func, false);
    let inner = func.clone();
    Ok(Filter::from_fn(move |arg| {
        bool_result(inner.call(std::slice::from_ref(arg))?)
    }))
}

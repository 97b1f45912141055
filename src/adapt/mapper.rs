//! Mapper adapters

use std::fmt;
use std::marker::PhantomData;

use crate::dynamic::Dynamic;
use crate::error::{map_to_shape, AdaptError, MAP_SHAPE};
use crate::func::{first, single, Func};
use crate::types::{Signature, Type};
use crate::value::Value;

use super::{adapted, callable, probe_type, rejected, target_type};

/// A mapper over dynamic values: `func(any) any`.
#[derive(Clone, Debug)]
pub struct Mapper {
    func: Func,
}

impl Mapper {
    pub(crate) fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, AdaptError> + Send + Sync + 'static,
    {
        let sig = Signature::new(vec![Type::Any], vec![Type::Any]);
        let func = Func::new(sig, move |args| Ok(vec![f(first(args)?)?]));
        Mapper { func }
    }

    /// Apply the mapper.
    pub fn apply(&self, arg: impl Into<Value>) -> Result<Value, AdaptError> {
        single(self.func.call(&[arg.into()])?)
    }

    /// The uniform `func(any) any` callable.
    pub fn as_func(&self) -> &Func {
        &self.func
    }

    /// Consumes the adapter, returning the uniform callable.
    pub fn into_func(self) -> Func {
        self.func
    }
}

impl From<Mapper> for Value {
    fn from(mapper: Mapper) -> Self {
        Value::from(mapper.func)
    }
}

impl AsRef<Func> for Mapper {
    fn as_ref(&self) -> &Func {
        &self.func
    }
}

/// Adapts a `func(T) R` into a `func(any) any`.
///
/// # Errors
///
/// [`AdaptError::Shape`] with [`MAP_SHAPE`] unless `f` is a non-nil function
/// of one argument returning one value.
///
/// # Example
///
/// ```rust
/// use anyfn::adapt::map;
/// use anyfn::{Func, Value};
///
/// let len = map(Func::unary(|s: String| s.len())).unwrap();
/// assert_eq!(len.apply("four").unwrap(), Value::from(4usize));
/// ```
pub fn map(f: impl Into<Value>) -> Result<Mapper, AdaptError> {
    let value = f.into();
    let func = callable(&value, 1, 1, MAP_SHAPE).map_err(|e| rejected("map", e))?;
    let fast_path = func.signature().params()[0] == Type::Any
        && func.signature().results()[0] == Type::Any;
    adapted("map", func, fast_path);
    if fast_path {
        return Ok(Mapper { func: func.clone() });
    }

    let inner = func.clone();
    Ok(Mapper::from_fn(move |arg| {
        single(inner.call(std::slice::from_ref(arg))?)
    }))
}

/// A mapper with a static result type: `func(any) X`.
pub struct MapperTo<X> {
    func: Func,
    _target: PhantomData<fn() -> X>,
}

impl<X: Dynamic> MapperTo<X> {
    /// Apply the mapper.
    ///
    /// Fails when `arg` cannot be converted to the parameter type of the
    /// adapted function.
    pub fn apply(&self, arg: impl Into<Value>) -> Result<X, AdaptError> {
        let out = single(self.func.call(&[arg.into()])?)?;
        X::from_value(&out).ok_or_else(|| AdaptError::conversion(out.type_of(), &X::static_type()))
    }

    /// The uniform `func(any) X` callable.
    pub fn as_func(&self) -> &Func {
        &self.func
    }

    /// Consumes the adapter, returning the uniform callable.
    pub fn into_func(self) -> Func {
        self.func
    }
}

impl<X> Clone for MapperTo<X> {
    fn clone(&self) -> Self {
        MapperTo {
            func: self.func.clone(),
            _target: PhantomData,
        }
    }
}

impl<X> fmt::Debug for MapperTo<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperTo").field("func", &self.func).finish()
    }
}

/// Recovers a typed mapper from a `func(any) X` callable, such as the one
/// returned by [`map_to_sample`].
impl<X: Dynamic> TryFrom<Func> for MapperTo<X> {
    type Error = AdaptError;

    fn try_from(func: Func) -> Result<Self, Self::Error> {
        let expected = Type::func(vec![Type::Any], vec![X::static_type()]);
        let found = func.type_of();
        if found != expected {
            return Err(AdaptError::Downcast { expected, found });
        }
        Ok(MapperTo {
            func,
            _target: PhantomData,
        })
    }
}

impl<X> From<MapperTo<X>> for Value {
    fn from(mapper: MapperTo<X>) -> Self {
        Value::from(mapper.func)
    }
}

impl<X> AsRef<Func> for MapperTo<X> {
    fn as_ref(&self) -> &Func {
        &self.func
    }
}

/// Adapts a `func(T) R` into a `func(any) X` where R is convertible to X.
///
/// # Errors
///
/// - [`AdaptError::AnyProbe`] when X is [`Value`].
/// - [`AdaptError::Shape`] naming X unless `f` is a non-nil function of one
///   argument returning one value convertible to X.
///
/// # Example
///
/// ```rust
/// use anyfn::adapt::map_to;
/// use anyfn::Func;
///
/// let f = map_to::<u8>(Func::unary(|i: i64| i + 1)).unwrap();
/// assert_eq!(f.apply(255i64).unwrap(), 0);
/// ```
pub fn map_to<X: Dynamic>(f: impl Into<Value>) -> Result<MapperTo<X>, AdaptError> {
    let target = target_type(X::static_type()).map_err(|e| rejected("map_to", e))?;
    Ok(MapperTo {
        func: map_to_type(f.into(), target)?,
        _target: PhantomData,
    })
}

/// Adapts a `func(T) R` into a `func(any) X` where X is the type of `probe`.
///
/// Only the type of `probe` is used. Recover a typed adapter with
/// [`MapperTo::try_from`].
///
/// # Errors
///
/// - [`AdaptError::NilProbe`] when `probe` is nil.
/// - [`AdaptError::AnyProbe`] when `probe` is of kind `Interface`.
/// - [`AdaptError::Shape`] naming X as for [`map_to`].
///
/// # Example
///
/// ```rust
/// use anyfn::adapt::{map_to_sample, MapperTo};
/// use anyfn::{Func, Value};
///
/// let func = map_to_sample(Func::unary(|i: i64| i * 2), &Value::from(0i32)).unwrap();
/// let doubled = MapperTo::<i32>::try_from(func).unwrap();
/// assert_eq!(doubled.apply(21u8).unwrap(), 42);
/// ```
pub fn map_to_sample(f: impl Into<Value>, probe: &Value) -> Result<Func, AdaptError> {
    let target = probe_type(probe).map_err(|e| rejected("map_to", e))?;
    map_to_type(f.into(), target)
}

fn map_to_type(value: Value, target: Type) -> Result<Func, AdaptError> {
    let shape = map_to_shape(&target);
    let func = callable(&value, 1, 1, &shape).map_err(|e| rejected("map_to", e))?;
    if !func.signature().results()[0].convertible_to(&target) {
        return Err(rejected("map_to", AdaptError::shape(shape)));
    }

    let sig = Signature::new(vec![Type::Any], vec![target]);
    if *func.signature() == sig {
        adapted("map_to", func, true);
        return Ok(func.clone());
    }

    adapted("map_to", func, false);
    let inner = func.clone();
    // Func::call converts the inner result to the declared target
    Ok(Func::new(sig, move |args| inner.call(args)))
}

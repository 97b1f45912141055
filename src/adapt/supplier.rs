//! Supplier adapters

use std::fmt;
use std::marker::PhantomData;

use crate::dynamic::Dynamic;
use crate::error::{supplier_of_shape, AdaptError, SUPPLIER_SHAPE};
use crate::func::{single, Func};
use crate::types::{Signature, Type};
use crate::value::Value;

use super::{adapted, callable, probe_type, rejected, target_type};

/// A supplier of dynamic values: `func() any`.
#[derive(Clone, Debug)]
pub struct Supplier {
    func: Func,
}

impl Supplier {
    /// Invoke the supplier.
    pub fn get(&self) -> Result<Value, AdaptError> {
        single(self.func.call(&[])?)
    }

    /// The uniform `func() any` callable.
    pub fn as_func(&self) -> &Func {
        &self.func
    }

    /// Consumes the adapter, returning the uniform callable.
    pub fn into_func(self) -> Func {
        self.func
    }
}

impl From<Supplier> for Value {
    fn from(supplier: Supplier) -> Self {
        Value::from(supplier.func)
    }
}

impl AsRef<Func> for Supplier {
    fn as_ref(&self) -> &Func {
        &self.func
    }
}

/// Adapts a `func() R` into a `func() any`.
///
/// # Errors
///
/// [`AdaptError::Shape`] with [`SUPPLIER_SHAPE`] unless `f` is a non-nil
/// function of no arguments returning one value.
///
/// # Example
///
/// ```rust
/// use anyfn::adapt::supplier;
/// use anyfn::{Func, Value};
///
/// let answer = supplier(Func::nullary(|| 42u8)).unwrap();
/// assert_eq!(answer.get().unwrap(), Value::from(42u8));
/// ```
pub fn supplier(f: impl Into<Value>) -> Result<Supplier, AdaptError> {
    let value = f.into();
    let func = callable(&value, 0, 1, SUPPLIER_SHAPE).map_err(|e| rejected("supplier", e))?;
    let fast_path = func.signature().results()[0] == Type::Any;
    adapted("supplier", func, fast_path);
    if fast_path {
        return Ok(Supplier { func: func.clone() });
    }

    let inner = func.clone();
    let sig = Signature::new(vec![], vec![Type::Any]);
    Ok(Supplier {
        func: Func::new(sig, move |_| inner.call(&[])),
    })
}

/// A supplier with a static result type: `func() X`.
pub struct SupplierOf<X> {
    func: Func,
    _target: PhantomData<fn() -> X>,
}

impl<X: Dynamic> SupplierOf<X> {
    /// Invoke the supplier.
    pub fn get(&self) -> Result<X, AdaptError> {
        let out = single(self.func.call(&[])?)?;
        X::from_value(&out).ok_or_else(|| AdaptError::conversion(out.type_of(), &X::static_type()))
    }

    /// The uniform `func() X` callable.
    pub fn as_func(&self) -> &Func {
        &self.func
    }

    /// Consumes the adapter, returning the uniform callable.
    pub fn into_func(self) -> Func {
        self.func
    }
}

impl<X> Clone for SupplierOf<X> {
    fn clone(&self) -> Self {
        SupplierOf {
            func: self.func.clone(),
            _target: PhantomData,
        }
    }
}

impl<X> fmt::Debug for SupplierOf<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupplierOf").field("func", &self.func).finish()
    }
}

/// Recovers a typed supplier from a `func() X` callable, such as the one
/// returned by [`supplier_of_sample`].
impl<X: Dynamic> TryFrom<Func> for SupplierOf<X> {
    type Error = AdaptError;

    fn try_from(func: Func) -> Result<Self, Self::Error> {
        let expected = Type::func(vec![], vec![X::static_type()]);
        let found = func.type_of();
        if found != expected {
            return Err(AdaptError::Downcast { expected, found });
        }
        Ok(SupplierOf {
            func,
            _target: PhantomData,
        })
    }
}

impl<X> From<SupplierOf<X>> for Value {
    fn from(supplier: SupplierOf<X>) -> Self {
        Value::from(supplier.func)
    }
}

impl<X> AsRef<Func> for SupplierOf<X> {
    fn as_ref(&self) -> &Func {
        &self.func
    }
}

/// Adapts a `func() R` into a `func() X` where R is convertible to X.
///
/// # Errors
///
/// - [`AdaptError::AnyProbe`] when X is [`Value`].
/// - [`AdaptError::Shape`] naming X unless `f` is a non-nil function of no
///   arguments returning one value convertible to X.
///
/// # Example
///
/// ```rust
/// use anyfn::adapt::supplier_of;
/// use anyfn::Func;
///
/// let pi = supplier_of::<f32>(Func::nullary(|| 3.5f64)).unwrap();
/// assert_eq!(pi.get().unwrap(), 3.5);
/// ```
pub fn supplier_of<X: Dynamic>(f: impl Into<Value>) -> Result<SupplierOf<X>, AdaptError> {
    let target = target_type(X::static_type()).map_err(|e| rejected("supplier_of", e))?;
    Ok(SupplierOf {
        func: supplier_of_type(f.into(), target)?,
        _target: PhantomData,
    })
}

/// Adapts a `func() R` into a `func() X` where X is the type of `probe`.
///
/// Recover a typed adapter with [`SupplierOf::try_from`].
///
/// # Errors
///
/// - [`AdaptError::NilProbe`] when `probe` is nil.
/// - [`AdaptError::AnyProbe`] when `probe` is of kind `Interface`.
/// - [`AdaptError::Shape`] naming X as for [`supplier_of`].
pub fn supplier_of_sample(f: impl Into<Value>, probe: &Value) -> Result<Func, AdaptError> {
    let target = probe_type(probe).map_err(|e| rejected("supplier_of", e))?;
    supplier_of_type(f.into(), target)
}

fn supplier_of_type(value: Value, target: Type) -> Result<Func, AdaptError> {
    let shape = supplier_of_shape(&target);
    let func = callable(&value, 0, 1, &shape).map_err(|e| rejected("supplier_of", e))?;
    let result = &func.signature().results()[0];
    if !result.convertible_to(&target) {
        return Err(rejected("supplier_of", AdaptError::shape(shape)));
    }

    if *result == target {
        adapted("supplier_of", func, true);
        return Ok(func.clone());
    }

    adapted("supplier_of", func, false);
    let inner = func.clone();
    let sig = Signature::new(vec![], vec![target]);
    Ok(Func::new(sig, move |_| inner.call(&[])))
}

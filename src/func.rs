//! Dynamic callables
//!
//! A [`Func`] is a function value whose signature is only known at run time.
//! Typed constructors ([`Func::unary`], [`Func::nullary`], ...) derive the
//! signature from an ordinary closure; [`Func::new`] takes an explicit
//! [`Signature`] and a body over dynamic values.
//!
//! [`Func::call`] is the single entry point: it checks the argument count,
//! converts every argument to its declared parameter type, runs the body and
//! checks the results against the declared result types.
//!
//! # Example
//!
//! ```rust
//! use anyfn::{Func, Type, Value};
//!
//! let double = Func::unary(|x: i64| x * 2);
//! assert_eq!(double.type_of(), Type::func(vec![Type::Int], vec![Type::Int]));
//!
//! // Arguments are converted to the declared parameter type
//! let out = double.call(&[Value::from(4u8)]).unwrap();
//! assert_eq!(out, vec![Value::from(8i64)]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::dynamic::Dynamic;
use crate::error::AdaptError;
use crate::types::{Signature, Type};
use crate::value::Value;

type Body = dyn Fn(&[Value]) -> Result<Vec<Value>, AdaptError> + Send + Sync;

/// A callable with a runtime signature.
///
/// Cloning is cheap and keeps identity: clones are [`Func::ptr_eq`].
#[derive(Clone)]
pub struct Func {
    sig: Arc<Signature>,
    body: Arc<Body>,
}

impl Func {
    /// Create a function from a signature and a body over dynamic values.
    ///
    /// The body always receives arguments already converted to the declared
    /// parameter types.
    pub fn new<F>(sig: Signature, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Vec<Value>, AdaptError> + Send + Sync + 'static,
    {
        Func {
            sig: Arc::new(sig),
            body: Arc::new(body),
        }
    }

    /// `func() R`
    pub fn nullary<R, F>(f: F) -> Self
    where
        R: Dynamic,
        F: Fn() -> R + Send + Sync + 'static,
    {
        let sig = Signature::new(vec![], vec![R::static_type()]);
        Func::new(sig, move |_| Ok(vec![f().into_value()]))
    }

    /// `func(A) R`
    pub fn unary<A, R, F>(f: F) -> Self
    where
        A: Dynamic,
        R: Dynamic,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let sig = Signature::new(vec![A::static_type()], vec![R::static_type()]);
        Func::new(sig, move |args| {
            let a = arg::<A>(args, 0)?;
            Ok(vec![f(a).into_value()])
        })
    }

    /// `func(A, B) R`
    pub fn binary<A, B, R, F>(f: F) -> Self
    where
        A: Dynamic,
        B: Dynamic,
        R: Dynamic,
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        let sig = Signature::new(
            vec![A::static_type(), B::static_type()],
            vec![R::static_type()],
        );
        Func::new(sig, move |args| {
            let (a, b) = (arg::<A>(args, 0)?, arg::<B>(args, 1)?);
            Ok(vec![f(a, b).into_value()])
        })
    }

    /// `func(A)`, a function with no results.
    pub fn sink<A, F>(f: F) -> Self
    where
        A: Dynamic,
        F: Fn(A) + Send + Sync + 'static,
    {
        let sig = Signature::new(vec![A::static_type()], vec![]);
        Func::new(sig, move |args| {
            f(arg::<A>(args, 0)?);
            Ok(vec![])
        })
    }

    /// `func()`, a function with neither parameters nor results.
    pub fn action<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Func::new(Signature::default(), move |_| {
            f();
            Ok(vec![])
        })
    }

    /// The declared signature.
    pub fn signature(&self) -> &Signature {
        &self.sig
    }

    /// The function type of this callable.
    pub fn type_of(&self) -> Type {
        Type::Func(Box::new(self.sig.as_ref().clone()))
    }

    /// Returns true if both are the same callable.
    pub fn ptr_eq(a: &Func, b: &Func) -> bool {
        Arc::ptr_eq(&a.body, &b.body)
    }

    /// Invoke the function.
    ///
    /// Fails with [`AdaptError::Arity`] on a wrong argument count and with
    /// [`AdaptError::Conversion`] when an argument cannot be converted to its
    /// parameter type.
    pub fn call(&self, args: &[Value]) -> Result<Vec<Value>, AdaptError> {
        let params = self.sig.params();
        if args.len() != params.len() {
            return Err(AdaptError::Arity {
                expected: params.len(),
                found: args.len(),
            });
        }
        let args = args
            .iter()
            .zip(params)
            .map(|(arg, ty)| arg.convert(ty))
            .collect::<Result<Vec<_>, _>>()?;

        let results = (self.body)(&args)?;
        let declared = self.sig.results();
        if results.len() != declared.len() {
            return Err(AdaptError::Arity {
                expected: declared.len(),
                found: results.len(),
            });
        }
        results
            .iter()
            .zip(declared)
            .map(|(result, ty)| result.convert(ty))
            .collect()
    }
}

/// Takes the only value out of a result list.
pub(crate) fn single(mut results: Vec<Value>) -> Result<Value, AdaptError> {
    match results.len() {
        1 => Ok(results.swap_remove(0)),
        found => Err(AdaptError::Arity { expected: 1, found }),
    }
}

/// The first argument of a unary body.
pub(crate) fn first(args: &[Value]) -> Result<&Value, AdaptError> {
    args.first().ok_or(AdaptError::Arity {
        expected: 1,
        found: 0,
    })
}

fn arg<A: Dynamic>(args: &[Value], index: usize) -> Result<A, AdaptError> {
    let value = args.get(index).ok_or(AdaptError::Arity {
        expected: index + 1,
        found: args.len(),
    })?;
    A::from_value(value).ok_or_else(|| AdaptError::conversion(value.type_of(), &A::static_type()))
}

impl fmt::Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func({})", self.sig)
    }
}

impl AsRef<Func> for Func {
    fn as_ref(&self) -> &Func {
        self
    }
}

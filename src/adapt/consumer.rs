//! Consumer adapter

use crate::error::{AdaptError, CONSUMER_SHAPE};
use crate::func::Func;
use crate::types::{Signature, Type};
use crate::value::Value;

use super::{adapted, callable, rejected};

/// A consumer of dynamic values: `func(any)`.
#[derive(Clone, Debug)]
pub struct Consumer {
    func: Func,
}

impl Consumer {
    /// Invoke the consumer.
    pub fn accept(&self, arg: impl Into<Value>) -> Result<(), AdaptError> {
        self.func.call(&[arg.into()]).map(drop)
    }

    /// The uniform `func(any)` callable.
    pub fn as_func(&self) -> &Func {
        &self.func
    }

    /// Consumes the adapter, returning the uniform callable.
    pub fn into_func(self) -> Func {
        self.func
    }
}

impl From<Consumer> for Value {
    fn from(consumer: Consumer) -> Self {
        Value::from(consumer.func)
    }
}

impl AsRef<Func> for Consumer {
    fn as_ref(&self) -> &Func {
        &self.func
    }
}

/// Adapts a `func(T)` into a `func(any)`.
///
/// # Errors
///
/// [`AdaptError::Shape`] with [`CONSUMER_SHAPE`] unless `f` is a non-nil
/// function of one argument with no results.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use anyfn::adapt::consumer;
/// use anyfn::Func;
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let record = consumer(Func::sink(move |s: String| sink.lock().unwrap().push(s))).unwrap();
///
/// record.accept("a").unwrap();
/// assert!(record.accept(1i64).is_err());
/// assert_eq!(*seen.lock().unwrap(), vec!["a".to_string()]);
/// ```
pub fn consumer(f: impl Into<Value>) -> Result<Consumer, AdaptError> {
    let value = f.into();
    let func = callable(&value, 1, 0, CONSUMER_SHAPE).map_err(|e| rejected("consumer", e))?;
    let fast_path = func.signature().params()[0] == Type::Any;
    adapted("consumer", func, fast_path);
    if fast_path {
        return Ok(Consumer { func: func.clone() });
    }

    let inner = func.clone();
    let sig = Signature::new(vec![Type::Any], vec![]);
    Ok(Consumer {
        func: Func::new(sig, move |args| inner.call(args)),
    })
}

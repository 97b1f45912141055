//! Control-flow and abort helpers
//!
//! Every operation in this crate reports faults as [`Result`]s. The helpers
//! here are for callers who want the abrupt alternative: they turn a failed
//! result or a false condition into a panic.

use std::fmt;
use std::panic::panic_any;

use crate::adapt::supplier;
use crate::error::AdaptError;
use crate::value::Value;

/// `a` if `cond` is true, else `b`. Both are already evaluated.
///
/// # Example
///
/// ```rust
/// use anyfn::control::ternary;
///
/// assert_eq!(ternary(2 > 1, "yes", "no"), "yes");
/// ```
pub fn ternary<T>(cond: bool, a: T, b: T) -> T {
    if cond {
        a
    } else {
        b
    }
}

/// Invokes the supplier `a` if `cond` is true, else the supplier `b`.
///
/// Both callables are adapted with [`supplier`] before either is invoked,
/// so a malformed callable faults even when it would not be selected. Only
/// the selected supplier runs.
///
/// # Example
///
/// ```rust
/// use anyfn::control::ternary_of;
/// use anyfn::{Func, Value};
///
/// let picked = ternary_of(
///     false,
///     Func::nullary(|| 1i64),
///     Func::nullary(|| "two".to_string()),
/// )
/// .unwrap();
/// assert_eq!(picked, Value::from("two"));
/// ```
pub fn ternary_of(
    cond: bool,
    a: impl Into<Value>,
    b: impl Into<Value>,
) -> Result<Value, AdaptError> {
    let (a, b) = (supplier(a)?, supplier(b)?);
    ternary(cond, a, b).get()
}

/// Panics with `err` as the payload if `result` is an error.
///
/// # Example
///
/// ```rust
/// use anyfn::control::panic_on_error;
///
/// panic_on_error::<String>(Ok(()));
///
/// let payload = std::panic::catch_unwind(|| panic_on_error(Err(7u8))).unwrap_err();
/// assert_eq!(payload.downcast_ref::<u8>(), Some(&7));
/// ```
pub fn panic_on_error<E: Send + 'static>(result: Result<(), E>) {
    if let Err(err) = result {
        panic_any(err);
    }
}

/// Returns the value of `result`, or panics with the error as the payload.
pub fn panic_on_error2<T, E: Send + 'static>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic_any(err),
    }
}

/// Panics with `msg` as the payload if `ok` is false.
pub fn panic_on_false(ok: bool, msg: impl Into<String>) {
    if !ok {
        panic_any(msg.into());
    }
}

/// Returns `value` if `ok` is true, else panics with `msg` as the payload.
///
/// Mirrors the `value, ok` pattern of map lookups and type assertions.
pub fn panic_on_false2<T>(value: T, ok: bool, msg: impl Into<String>) -> T {
    panic_on_false(ok, msg);
    value
}

/// Abrupt-failure boundary for fallible operations.
///
/// # Example
///
/// ```rust
/// use anyfn::adapt::filter;
/// use anyfn::control::OrAbort;
/// use anyfn::Func;
///
/// let positive = filter(Func::unary(|i: i64| i > 0)).or_abort();
/// assert!(positive.test(1u8).or_abort());
/// ```
pub trait OrAbort<T> {
    /// The success value, or a panic carrying the error's message.
    fn or_abort(self) -> T;
}

impl<T, E: fmt::Display> OrAbort<T> for Result<T, E> {
    #[track_caller]
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

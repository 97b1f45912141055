//! Testing utilities for code built on dynamic adapters
//!
//! This module provides assertion macros for adapter faults and fast paths,
//! an invocation counter for observing short-circuit evaluation, a helper
//! for capturing abort payloads, and property-based testing support.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use anyfn::adapt::filter;
//! use anyfn::error::FILTER_SHAPE;
//! use anyfn::{assert_adapted, assert_fault, AdaptError, Func, Value};
//!
//! let exact = Func::unary(|v: Value| v.is_nil());
//! assert_adapted!(filter(exact.clone()).unwrap(), exact);
//!
//! assert_fault!(filter(Value::nil()), AdaptError::Shape(FILTER_SHAPE.to_string()));
//! ```
//!
//! ## Call Counter
//!
//! ```rust
//! use anyfn::predicate::and;
//! use anyfn::testing::CallCounter;
//! use anyfn::Func;
//!
//! let counter = CallCounter::new();
//! let p = and([Func::unary(|i: i64| i > 0), counter.predicate(true)]).unwrap();
//!
//! assert!(!p.test(-1i64).unwrap());
//! assert_eq!(counter.count(), 0);
//! ```

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::dynamic::Dynamic;
use crate::func::Func;
use crate::value::Value;

/// Assert that a fallible operation fails with a specific fault.
///
/// # Example
///
/// ```rust
/// use anyfn::{assert_fault, AdaptError};
/// use anyfn::collection::index_of;
/// use anyfn::Value;
///
/// assert_fault!(index_of(&Value::from(5i64), 0, None), AdaptError::NotIndexable);
/// ```
#[macro_export]
macro_rules! assert_fault {
    ($result:expr, $expected:expr) => {
        match $result {
            Err(e) => assert_eq!(e, $expected),
            Ok(_) => {
                panic!("Expected fault {:?}, got Ok", $expected);
            }
        }
    };
}

/// Assert that an adapter uses the original callable as is.
///
/// Both arguments may be a [`Func`](crate::Func) or any adapter.
#[macro_export]
macro_rules! assert_adapted {
    ($adapter:expr, $original:expr) => {{
        let (adapter, original) = (&$adapter, &$original);
        let adapted = ::core::convert::AsRef::<$crate::Func>::as_ref(adapter);
        let original = ::core::convert::AsRef::<$crate::Func>::as_ref(original);
        assert!(
            $crate::Func::ptr_eq(adapted, original),
            "Expected {:?} to be used as is, got a wrapper {:?}",
            original,
            adapted
        );
    }};
}

/// Assert that an adapter wraps the original callable.
#[macro_export]
macro_rules! assert_wrapped {
    ($adapter:expr, $original:expr) => {{
        let (adapter, original) = (&$adapter, &$original);
        let adapted = ::core::convert::AsRef::<$crate::Func>::as_ref(adapter);
        let original = ::core::convert::AsRef::<$crate::Func>::as_ref(original);
        assert!(
            !$crate::Func::ptr_eq(adapted, original),
            "Expected a wrapper around {:?}, got the callable itself",
            original
        );
    }};
}

/// Counts invocations of the callables it hands out.
///
/// Clones share the same count.
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// A `func(any) bool` that always returns `result`.
    pub fn predicate(&self, result: bool) -> Func {
        let calls = self.calls.clone();
        Func::unary(move |_: Value| {
            calls.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    /// A `func() R` that always returns `value`.
    pub fn supplier<R>(&self, value: R) -> Func
    where
        R: Dynamic + Clone + Send + Sync + 'static,
    {
        let calls = self.calls.clone();
        Func::nullary(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            value.clone()
        })
    }

    /// A `func(any)` that ignores its argument.
    pub fn consumer(&self) -> Func {
        let calls = self.calls.clone();
        Func::sink(move |_: Value| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    }
}

/// Runs `f` and returns its panic payload if it panicked with a `P`.
///
/// Returns `None` when `f` completes or panics with another payload type.
///
/// # Example
///
/// ```rust
/// use anyfn::control::panic_on_false;
/// use anyfn::testing::catch_abort;
///
/// let msg = catch_abort::<String>(|| panic_on_false(false, "no"));
/// assert_eq!(msg.as_deref(), Some("no"));
/// assert_eq!(catch_abort::<String>(|| {}), None);
/// ```
pub fn catch_abort<P: Any>(f: impl FnOnce()) -> Option<P> {
    let payload = catch_unwind(AssertUnwindSafe(f)).err()?;
    payload.downcast::<P>().ok().map(|p| *p)
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy for non-nil scalar values of assorted types.
///
/// Floats are finite, so every generated value equals itself.
#[cfg(feature = "proptest")]
pub fn scalar_values() -> BoxedStrategy<Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<i8>().prop_map(Value::from),
        any::<u16>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(|s: String| Value::from(s)),
    ]
    .boxed()
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => Just(Value::nil()),
            6 => scalar_values(),
            2 => prop::collection::vec(any::<i64>(), 0..8).prop_map(Value::from),
            1 => prop::collection::vec("[a-z]{1,4}", 0..4).prop_map(Value::from),
        ]
        .boxed()
    }
}

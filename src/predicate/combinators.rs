//! Core predicate trait and logical combinators
//!
//! [`Predicate`] and [`PredicateExt`] compose statically typed predicates.
//! [`filter_all`], [`and`], [`or`] and [`not`] compose loosely-typed
//! callables into a [`Filter`], which is itself a `Predicate<Value>`.

use crate::adapt::{filter, Filter};
use crate::error::AdaptError;
use crate::value::Value;

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::*;
/// use anyfn::Value;
///
/// let small = less_than(10i64).unwrap();
/// let valid = small.and(|v: &Value| !is_nil(v));
/// assert!(valid.check(&Value::from(3i64)));
/// assert!(!valid.check(&Value::from(30i64)));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types, so composing predicates this way
/// allocates nothing.
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::*;
/// use anyfn::Value;
///
/// let p = greater_than(0i64).unwrap().and(less_than(100i64).unwrap()).not();
/// assert!(p.check(&Value::from(-5i64)));
/// assert!(!p.check(&Value::from(50i64)));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Adapts every callable with [`filter`], preserving order.
///
/// When the resulting filters are invoked together the argument must be
/// convertible to every parameter type.
///
/// # Errors
///
/// The first shape fault of any element.
pub fn filter_all<I>(fns: I) -> Result<Vec<Filter>, AdaptError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    fns.into_iter().map(filter).collect()
}

/// Conjunction of all callables.
///
/// Evaluation stops at the first filter returning false. With no callables
/// the result is always true.
///
/// # Example
///
/// ```rust
/// use anyfn::predicate::and;
/// use anyfn::Func;
///
/// let teen = and([
///     Func::unary(|i: i64| i >= 13),
///     Func::unary(|i: i64| i <= 19),
/// ])
/// .unwrap();
/// assert!(teen.test(15u8).unwrap());
/// assert!(!teen.test(20u8).unwrap());
/// ```
pub fn and<I>(fns: I) -> Result<Filter, AdaptError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let filters = filter_all(fns)?;
    Ok(Filter::from_fn(move |arg| {
        for f in &filters {
            if !f.test(arg.clone())? {
                return Ok(false);
            }
        }
        Ok(true)
    }))
}

/// Disjunction of all callables.
///
/// Evaluation stops at the first filter returning true. With no callables
/// the result is always false.
pub fn or<I>(fns: I) -> Result<Filter, AdaptError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let filters = filter_all(fns)?;
    Ok(Filter::from_fn(move |arg| {
        for f in &filters {
            if f.test(arg.clone())? {
                return Ok(true);
            }
        }
        Ok(false)
    }))
}

/// Negation of a callable.
pub fn not(f: impl Into<Value>) -> Result<Filter, AdaptError> {
    let inner = filter(f)?;
    Ok(Filter::from_fn(move |arg| Ok(!inner.test(arg.clone())?)))
}

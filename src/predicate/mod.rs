//! Predicate combinators, equality and ordering filters
//!
//! Everything here produces a [`Filter`](crate::adapt::Filter): a uniform
//! `func(any) bool` that can be passed back into the combinators, stored in
//! a [`Value`](crate::Value), or checked through the [`Predicate`] trait.
//!
//! # Example
//!
//! ```rust
//! use anyfn::predicate::*;
//! use anyfn::{Func, Value};
//!
//! let in_range = and([
//!     Value::from(greater_than_equal(0i64).unwrap()),
//!     Value::from(less_than(10i64).unwrap()),
//! ])
//! .unwrap();
//! assert!(in_range.test(3u8).unwrap());
//! assert!(!in_range.test(12i32).unwrap());
//!
//! let not_five = not(equal_to(5i64)).unwrap();
//! assert!(not_five.check(&Value::from(4i64)));
//!
//! // Plain callables compose with filters built here
//! let odd_or_zero = or([
//!     Value::from(Func::unary(|i: i64| i % 2 == 1)),
//!     Value::from(equal_to(0i64)),
//! ])
//! .unwrap();
//! assert!(odd_or_zero.test(0u8).unwrap());
//! ```

mod combinators;
mod equality;
mod ordering;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{and, filter_all, not, or, And, Not, Or};

// Re-export inspection and equality
pub use equality::{convert_to, deep_equal_to, equal_to, is_nil, is_nilable};

// Re-export ordering
pub use ordering::{
    greater_than, greater_than_equal, is_greater_than, is_greater_than_equal, is_less_than,
    is_less_than_equal, is_lessable_kind, less_than, less_than_equal,
};

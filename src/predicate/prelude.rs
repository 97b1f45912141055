//! Predicate prelude for convenient imports
//!
//! # Example
//!
//! ```rust
//! use anyfn::predicate::prelude::*;
//! use anyfn::Value;
//!
//! let small = less_than(10i64).unwrap().and(|v: &Value| !is_nil(v));
//! assert!(small.check(&Value::from(3i64)));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{and, filter_all, not, or};

// Inspection and equality
pub use super::equality::{convert_to, deep_equal_to, equal_to, is_nil, is_nilable};

// Ordering
pub use super::ordering::{greater_than, greater_than_equal, less_than, less_than_equal};

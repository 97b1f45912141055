//! # anyfn
//!
//! Runtime adaptation of loosely-typed functions.
//!
//! A [`Func`] is a callable whose parameter and result types are only known
//! at run time. The adapters in [`adapt`] check once that a callable has the
//! shape they need and return a wrapper with a single, uniform calling
//! convention over dynamic [`Value`]s. Heterogeneous predicates, mappers,
//! suppliers and consumers can then be composed without handling every
//! concrete signature.
//!
//! ## Quick Example
//!
//! ```rust
//! use anyfn::prelude::*;
//!
//! // Callables over different concrete types
//! let small = Func::unary(|i: i64| i < 3);
//! let short = Func::unary(|s: String| s.len() < 3);
//!
//! let p = filter(small).unwrap();
//! assert!(p.test(1u8).unwrap());
//! assert!(!p.test(5i32).unwrap());
//!
//! // Combinators accept callables and filters alike
//! let either = or([Value::from(short), Value::from(equal_to(10i64))]).unwrap();
//! assert!(either.test("ab").unwrap());
//!
//! // Shape faults are raised when the adapter is built
//! let err = filter(Func::unary(|i: i64| i)).unwrap_err();
//! assert!(err.is_shape());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when callables are adapted or rejected
//! - `serde`: `Serialize` for [`Value`], [`Type`] and [`Kind`]
//! - `proptest`: `Arbitrary` for [`Value`] and value strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod adapt;
pub mod collection;
pub mod control;
pub mod dynamic;
pub mod error;
pub mod func;
pub mod predicate;
pub mod testing;
pub mod types;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use adapt::{
    consumer, filter, map, map_to, map_to_sample, supplier, supplier_of, supplier_of_sample,
    Consumer, Filter, Mapper, MapperTo, Supplier, SupplierOf,
};
pub use dynamic::Dynamic;
pub use error::AdaptError;
pub use func::Func;
pub use types::{Field, Kind, Signature, Type};
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapt::{
        consumer, filter, map, map_to, supplier, supplier_of, Consumer, Filter, Mapper, MapperTo,
        Supplier, SupplierOf,
    };
    pub use crate::collection::{index_of, value_of_key};
    pub use crate::control::{ternary, ternary_of, OrAbort};
    pub use crate::predicate::{
        and, deep_equal_to, equal_to, is_nil, is_nilable, not, or, Predicate, PredicateExt,
    };
    pub use crate::{AdaptError, Dynamic, Func, Type, Value};
}

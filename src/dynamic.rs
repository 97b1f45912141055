//! Bridge between static Rust types and dynamic values
//!
//! [`Dynamic`] maps a Rust type to its runtime [`Type`] and moves values in
//! and out of [`Value`]. It is what lets [`Func::unary`](crate::Func::unary)
//! and friends declare a signature from an ordinary closure, and what gives
//! [`map_to`](crate::adapt::map_to) its target type.
//!
//! | Rust | Runtime type |
//! |---|---|
//! | `bool` | `bool` |
//! | `i8`, `i16`, `i32` | `int8`, `int16`, `int32` |
//! | `i64`, `isize` | `int` |
//! | `u8`, `u16`, `u32` | `uint8`, `uint16`, `uint32` |
//! | `u64`, `usize` | `uint` |
//! | `f32`, `f64` | `float32`, `float64` |
//! | `String` | `string` |
//! | `Vec<T>` | `[]T` |
//! | `[T; N]` | `[N]T` |
//! | `Value` | `any` |

use std::sync::Arc;

use crate::types::Type;
use crate::value::{Data, Value};

/// A Rust type with a runtime [`Type`].
///
/// # Example
///
/// ```rust
/// use anyfn::{Dynamic, Type, Value};
///
/// assert_eq!(<Vec<u8>>::static_type(), Type::slice(Type::Uint8));
///
/// let value = 42i64.into_value();
/// assert_eq!(i64::from_value(&value), Some(42));
/// assert_eq!(i32::from_value(&value), None); // exact type only
/// ```
pub trait Dynamic: Sized {
    /// The runtime type of this Rust type.
    fn static_type() -> Type;

    /// Moves this value into a dynamic value.
    fn into_value(self) -> Value;

    /// Extracts a value of exactly this type.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! dynamic_scalar {
    ($($rust:ty => $ty:ident as $data:ident($repr:ty)),* $(,)?) => {$(
        impl Dynamic for $rust {
            fn static_type() -> Type {
                Type::$ty
            }

            fn into_value(self) -> Value {
                Value::typed(Type::$ty, Data::$data(self as $repr))
            }

            fn from_value(value: &Value) -> Option<Self> {
                match (value.type_of(), value.data()) {
                    (Some(Type::$ty), Data::$data(v)) => Some(*v as $rust),
                    _ => None,
                }
            }
        }

        impl From<$rust> for Value {
            fn from(v: $rust) -> Self {
                v.into_value()
            }
        }
    )*};
}

dynamic_scalar! {
    bool => Bool as Bool(bool),
    i8 => Int8 as Int(i64),
    i16 => Int16 as Int(i64),
    i32 => Int32 as Int(i64),
    i64 => Int as Int(i64),
    isize => Int as Int(i64),
    u8 => Uint8 as Uint(u64),
    u16 => Uint16 as Uint(u64),
    u32 => Uint32 as Uint(u64),
    u64 => Uint as Uint(u64),
    usize => Uint as Uint(u64),
    f32 => Float32 as Float(f64),
    f64 => Float64 as Float(f64),
}

impl Dynamic for String {
    fn static_type() -> Type {
        Type::String
    }

    fn into_value(self) -> Value {
        Value::typed(Type::String, Data::Str(Arc::from(self)))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match (value.type_of(), value.data()) {
            (Some(Type::String), Data::Str(s)) => Some(s.to_string()),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        s.into_value()
    }
}

impl Dynamic for Value {
    fn static_type() -> Type {
        Type::Any
    }

    fn into_value(self) -> Value {
        self
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl<T: Dynamic> Dynamic for Vec<T> {
    fn static_type() -> Type {
        Type::slice(T::static_type())
    }

    fn into_value(self) -> Value {
        let items: Arc<[Value]> = self.into_iter().map(Dynamic::into_value).collect();
        Value::typed(Self::static_type(), Data::Slice(Some(items)))
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.type_of() != Some(&Self::static_type()) {
            return None;
        }
        value.items()?.iter().map(T::from_value).collect()
    }
}

impl<T: Dynamic> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        items.into_value()
    }
}

impl<T: Dynamic, const N: usize> Dynamic for [T; N] {
    fn static_type() -> Type {
        Type::array(T::static_type(), N)
    }

    fn into_value(self) -> Value {
        let items: Arc<[Value]> = self.into_iter().map(Dynamic::into_value).collect();
        Value::typed(Self::static_type(), Data::Array(items))
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.type_of() != Some(&Self::static_type()) {
            return None;
        }
        let items: Vec<T> = value.items()?.iter().map(T::from_value).collect::<Option<_>>()?;
        items.try_into().ok()
    }
}

impl<T: Dynamic, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        items.into_value()
    }
}

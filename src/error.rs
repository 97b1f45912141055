//! Error types for adaptation and invocation faults.

use crate::types::Type;

/// Fixed message for [`filter`](crate::adapt::filter).
pub const FILTER_SHAPE: &str =
    "fn must be a non-nil function of one argument of any type that returns bool";

/// Fixed message for [`map`](crate::adapt::map).
pub const MAP_SHAPE: &str =
    "fn must be a non-nil function of one argument of any type that returns one value of any type";

/// Fixed message for [`supplier`](crate::adapt::supplier).
pub const SUPPLIER_SHAPE: &str =
    "fn must be a non-nil function of no arguments that returns one value of any type";

/// Fixed message for [`consumer`](crate::adapt::consumer).
pub const CONSUMER_SHAPE: &str =
    "fn must be a non-nil function of one argument of any type and no return values";

/// Message for [`map_to`](crate::adapt::map_to), naming the target type.
pub fn map_to_shape(target: &Type) -> String {
    format!(
        "fn must be a non-nil function of one argument of any type that returns one value convertible to type {}",
        target
    )
}

/// Message for [`supplier_of`](crate::adapt::supplier_of), naming the target type.
pub fn supplier_of_shape(target: &Type) -> String {
    format!(
        "fn must be a non-nil function of no arguments that returns one value convertible to type {}",
        target
    )
}

/// A fault raised while adapting or invoking a dynamic function.
///
/// Shape faults are raised once, when an adapter is built. Conversion faults
/// are deferred to call time when they depend on the runtime type of an
/// argument.
///
/// # Examples
///
/// ```rust
/// use anyfn::{adapt::filter, AdaptError, Value};
/// use anyfn::error::FILTER_SHAPE;
///
/// let err = filter(Value::from(0)).unwrap_err();
/// assert_eq!(err, AdaptError::Shape(FILTER_SHAPE.to_string()));
/// assert!(err.is_shape());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdaptError {
    /// The callable does not have the shape an adapter requires.
    Shape(String),
    /// A value cannot be converted to the required type.
    Conversion {
        /// Type of the offending value, `None` for untyped nil.
        from: Option<Type>,
        /// The required type.
        to: Type,
    },
    /// A probe value was nil.
    NilProbe,
    /// A probe value carries the fully dynamic `any` type.
    AnyProbe,
    /// `index_of` was given something other than an array or slice.
    NotIndexable,
    /// `value_of_key` was given something other than a map.
    NotKeyed,
    /// Values of this type have no natural order.
    Unordered(Option<Type>),
    /// A function value does not have the signature a typed adapter needs.
    Downcast {
        /// The signature the typed adapter needs.
        expected: Type,
        /// The signature the function actually has.
        found: Type,
    },
    /// A function was invoked with, or produced, the wrong number of values.
    Arity {
        /// Number of values the signature declares.
        expected: usize,
        /// Number of values actually supplied.
        found: usize,
    },
}

impl AdaptError {
    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    pub(crate) fn conversion(from: Option<&Type>, to: &Type) -> Self {
        Self::Conversion {
            from: from.cloned(),
            to: to.clone(),
        }
    }

    /// Returns true for faults caused by a callable or container of the wrong shape.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Self::Shape(_) | Self::NotIndexable | Self::NotKeyed | Self::Arity { .. }
        )
    }

    /// Returns true for faults caused by a value of the wrong type.
    pub fn is_conversion(&self) -> bool {
        matches!(
            self,
            Self::Conversion { .. } | Self::Unordered(_) | Self::Downcast { .. }
        )
    }

    /// Returns true for faults caused by an unusable probe value.
    pub fn is_probe(&self) -> bool {
        matches!(self, Self::NilProbe | Self::AnyProbe)
    }
}

fn type_name(ty: &Option<Type>) -> String {
    match ty {
        Some(ty) => ty.to_string(),
        None => "nil".to_string(),
    }
}

impl std::fmt::Display for AdaptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape(msg) => f.write_str(msg),
            Self::Conversion { from, to } => write!(
                f,
                "value of type {} cannot be converted to type {}",
                type_name(from),
                to
            ),
            Self::NilProbe => f.write_str("val cannot be nil"),
            Self::AnyProbe => f.write_str("val cannot be an any value"),
            Self::NotIndexable => f.write_str("IndexOf requires an array or slice"),
            Self::NotKeyed => f.write_str("ValueOfKey requires a map"),
            Self::Unordered(ty) => write!(f, "values of type {} are not ordered", type_name(ty)),
            Self::Downcast { expected, found } => {
                write!(f, "func of type {} is not a {}", found, expected)
            }
            Self::Arity { expected, found } => {
                write!(f, "func expects {} values, got {}", expected, found)
            }
        }
    }
}

impl std::error::Error for AdaptError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_messages_name_target() {
        assert_eq!(
            map_to_shape(&Type::Int),
            "fn must be a non-nil function of one argument of any type that returns one value convertible to type int"
        );
        assert!(supplier_of_shape(&Type::slice(Type::String)).ends_with("to type []string"));
    }

    #[test]
    fn test_conversion_display() {
        let err = AdaptError::conversion(Some(&Type::String), &Type::Int);
        assert_eq!(
            err.to_string(),
            "value of type string cannot be converted to type int"
        );

        let err = AdaptError::conversion(None, &Type::Int);
        assert_eq!(
            err.to_string(),
            "value of type nil cannot be converted to type int"
        );
    }

    #[test]
    fn test_classifiers() {
        assert!(AdaptError::shape(FILTER_SHAPE).is_shape());
        assert!(AdaptError::NotIndexable.is_shape());
        assert!(AdaptError::Unordered(Some(Type::Bool)).is_conversion());
        assert!(AdaptError::NilProbe.is_probe());
        assert!(AdaptError::AnyProbe.is_probe());
        assert!(!AdaptError::NilProbe.is_shape());
    }

    #[test]
    fn test_probe_display() {
        assert_eq!(AdaptError::NilProbe.to_string(), "val cannot be nil");
        assert_eq!(AdaptError::AnyProbe.to_string(), "val cannot be an any value");
    }
}

//! Collection accessors
//!
//! Total lookups into dynamic arrays, slices and maps: a missing element
//! falls back to a default, then to the zero value of the element type.
//!
//! # Example
//!
//! ```rust
//! use anyfn::collection::{index_of, value_of_key};
//! use anyfn::Value;
//!
//! let xs = Value::from(vec![1i64]);
//! assert_eq!(index_of(&xs, 0, None).unwrap(), Value::from(1i64));
//! assert_eq!(index_of(&xs, 1, Some(Value::from(2u8))).unwrap(), Value::from(2i64));
//! assert_eq!(index_of(&xs, 1, None).unwrap(), Value::from(0i64));
//!
//! let m = Value::map_of([("1".to_string(), 1i64)]);
//! assert_eq!(value_of_key(&m, "1", None).unwrap(), Value::from(1i64));
//! assert_eq!(value_of_key(&m, "2", None).unwrap(), Value::from(0i64));
//! ```

use crate::error::AdaptError;
use crate::predicate::equal_to;
use crate::types::Type;
use crate::value::Value;

/// The element of an array or slice at `index`.
///
/// Out of bounds, returns `default` converted to the element type, or the
/// zero value of the element type when there is no default. A nil slice has
/// no elements.
///
/// # Errors
///
/// - [`AdaptError::NotIndexable`] when `seq` is not an array or slice.
/// - [`AdaptError::Conversion`] when `default` cannot be converted to the
///   element type, even if `index` is in bounds.
pub fn index_of(seq: &Value, index: usize, default: Option<Value>) -> Result<Value, AdaptError> {
    let (Some(items), Some(elem)) = (seq.items(), seq.type_of().and_then(Type::elem)) else {
        return Err(AdaptError::NotIndexable);
    };
    let default = default.map(|d| d.convert(elem)).transpose()?;
    Ok(items
        .get(index)
        .cloned()
        .or(default)
        .unwrap_or_else(|| Value::zero(elem)))
}

/// The value stored under `key` in a map.
///
/// Keys match as for [`equal_to`]: each entry's key is converted to the type
/// of `key` before comparing, so a key of a different numeric type still
/// finds its entry as long as the stored key converts to the same value. A missing key returns `default` converted to the value type,
/// or the zero value of the value type when there is no default.
///
/// # Errors
///
/// - [`AdaptError::NotKeyed`] when `map` is not a map.
/// - [`AdaptError::Conversion`] when `default` cannot be converted to the
///   value type.
pub fn value_of_key(
    map: &Value,
    key: impl Into<Value>,
    default: Option<Value>,
) -> Result<Value, AdaptError> {
    let (Some(entries), Some(elem)) = (map.entries(), map.type_of().and_then(Type::elem)) else {
        return Err(AdaptError::NotKeyed);
    };
    let default = default.map(|d| d.convert(elem)).transpose()?;

    let key = equal_to(key);
    for (k, v) in entries {
        if key.test(k.clone())? {
            return Ok(v.clone());
        }
    }
    Ok(default.unwrap_or_else(|| Value::zero(elem)))
}

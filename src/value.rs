//! Dynamic values
//!
//! A [`Value`] is either untyped nil (no type at all) or a payload tagged
//! with its [`Type`]. Reference-like payloads (slices, maps, pointers,
//! functions) share their bodies between clones, so a clone is the same
//! instance for identity comparisons while a freshly built value never is.
//!
//! # Example
//!
//! ```rust
//! use anyfn::{Type, Value};
//!
//! let xs = Value::from(vec![1i64, 2]);
//! assert_eq!(xs.type_of(), Some(&Type::slice(Type::Int)));
//!
//! // Clones share the slice body, new values don't
//! assert!(xs.shallow_eq(&xs.clone()));
//! assert!(!xs.shallow_eq(&Value::from(vec![1i64, 2])));
//! assert!(xs.deep_eq(&Value::from(vec![1i64, 2])));
//!
//! let small = Value::from(300i64).convert(&Type::Uint8).unwrap();
//! assert_eq!(small.as_u64(), Some(44));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::dynamic::Dynamic;
use crate::error::AdaptError;
use crate::func::Func;
use crate::types::{Kind, Type};

/// Payload of a value. `None` bodies are typed null references.
#[derive(Clone)]
pub(crate) enum Data {
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(Arc<str>),
    Slice(Option<Arc<[Value]>>),
    Array(Arc<[Value]>),
    Map(Option<Arc<[(Value, Value)]>>),
    Pointer(Option<Arc<Value>>),
    Func(Option<Func>),
    Struct(Arc<[Value]>),
}

/// A runtime value tagged with its concrete type.
#[derive(Clone)]
pub struct Value {
    ty: Option<Type>,
    data: Data,
}

impl Value {
    /// Untyped nil: a value that was never given a type.
    pub fn nil() -> Self {
        Value {
            ty: None,
            data: Data::Nil,
        }
    }

    pub(crate) fn typed(ty: Type, data: Data) -> Self {
        Value { ty: Some(ty), data }
    }

    pub(crate) fn data(&self) -> &Data {
        &self.data
    }

    /// The null reference of a nilable type.
    ///
    /// Returns `None` when `ty` is not nilable. A nil of type `any` is
    /// untyped nil.
    ///
    /// ```rust
    /// use anyfn::{Type, Value};
    ///
    /// let nil_ints = Value::nil_of(Type::slice(Type::Int)).unwrap();
    /// assert!(nil_ints.is_nil());
    /// assert_eq!(nil_ints.type_of(), Some(&Type::slice(Type::Int)));
    /// assert!(Value::nil_of(Type::Int).is_none());
    /// ```
    pub fn nil_of(ty: Type) -> Option<Self> {
        let data = match ty.kind() {
            Kind::Interface => return Some(Value::nil()),
            Kind::Slice => Data::Slice(None),
            Kind::Map => Data::Map(None),
            Kind::Pointer => Data::Pointer(None),
            Kind::Func => Data::Func(None),
            _ => return None,
        };
        Some(Value::typed(ty, data))
    }

    /// The zero value of `ty`.
    pub fn zero(ty: &Type) -> Self {
        let data = match ty.underlying() {
            Type::Bool => Data::Bool(false),
            Type::Int | Type::Int8 | Type::Int16 | Type::Int32 | Type::Int64 => Data::Int(0),
            Type::Uint | Type::Uint8 | Type::Uint16 | Type::Uint32 | Type::Uint64 => {
                Data::Uint(0)
            }
            Type::Float32 | Type::Float64 => Data::Float(0.0),
            Type::String => Data::Str(Arc::from("")),
            Type::Any => return Value::nil(),
            Type::Slice(_) => Data::Slice(None),
            Type::Map(..) => Data::Map(None),
            Type::Pointer(_) => Data::Pointer(None),
            Type::Func(_) => Data::Func(None),
            Type::Array(elem, len) => Data::Array((0..*len).map(|_| Value::zero(elem)).collect()),
            Type::Struct(fields) => {
                Data::Struct(fields.iter().map(|field| Value::zero(&field.ty)).collect())
            }
            Type::Named(_, inner) => Value::zero(inner).data,
        };
        Value::typed(ty.clone(), data)
    }

    /// A slice of `elem`, converting each item to the element type.
    pub fn slice(elem: Type, items: impl IntoIterator<Item = Value>) -> Result<Self, AdaptError> {
        let items = convert_all(items, &elem)?;
        Ok(Value::typed(Type::slice(elem), Data::Slice(Some(items))))
    }

    /// An array of `elem` whose length is the number of items.
    pub fn array(elem: Type, items: impl IntoIterator<Item = Value>) -> Result<Self, AdaptError> {
        let items = convert_all(items, &elem)?;
        Ok(Value::typed(
            Type::array(elem, items.len()),
            Data::Array(items),
        ))
    }

    /// A map from `key` to `value`, converting every entry.
    ///
    /// Later entries replace earlier entries with an equal key.
    pub fn map(
        key: Type,
        value: Type,
        entries: impl IntoIterator<Item = (Value, Value)>,
    ) -> Result<Self, AdaptError> {
        let mut converted: Vec<(Value, Value)> = Vec::new();
        for (k, v) in entries {
            let (k, v) = (k.convert(&key)?, v.convert(&value)?);
            insert_entry(&mut converted, k, v);
        }
        Ok(Value::typed(
            Type::map(key, value),
            Data::Map(Some(converted.into())),
        ))
    }

    /// A map built from statically typed entries.
    ///
    /// ```rust
    /// use anyfn::{Type, Value};
    ///
    /// let ages = Value::map_of([("ann".to_string(), 31i64)]);
    /// assert_eq!(ages.type_of(), Some(&Type::map(Type::String, Type::Int)));
    /// ```
    pub fn map_of<K: Dynamic, V: Dynamic>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut converted: Vec<(Value, Value)> = Vec::new();
        for (k, v) in entries {
            insert_entry(&mut converted, k.into_value(), v.into_value());
        }
        Value::typed(
            Type::map(K::static_type(), V::static_type()),
            Data::Map(Some(converted.into())),
        )
    }

    /// A pointer to a copy of `target`.
    pub fn pointer_to(target: Value) -> Self {
        let elem = target.ty.clone().unwrap_or(Type::Any);
        Value::typed(Type::pointer(elem), Data::Pointer(Some(Arc::new(target))))
    }

    /// A value of struct type `ty`, converting each field.
    pub fn structure(ty: Type, fields: impl IntoIterator<Item = Value>) -> Result<Self, AdaptError> {
        let Some(declared) = ty.fields() else {
            return Err(AdaptError::conversion(None, &ty));
        };
        let fields: Vec<Value> = fields.into_iter().collect();
        if fields.len() != declared.len() {
            return Err(AdaptError::Arity {
                expected: declared.len(),
                found: fields.len(),
            });
        }
        let fields = fields
            .iter()
            .zip(declared)
            .map(|(value, field)| value.convert(&field.ty))
            .collect::<Result<Arc<[Value]>, _>>()?;
        Ok(Value::typed(ty, Data::Struct(fields)))
    }

    /// The concrete type, `None` for untyped nil.
    pub fn type_of(&self) -> Option<&Type> {
        self.ty.as_ref()
    }

    /// The kind of the concrete type, `None` for untyped nil.
    pub fn kind(&self) -> Option<Kind> {
        self.ty.as_ref().map(Type::kind)
    }

    /// Returns true if this value may be nil: untyped nil, or a value of a
    /// nilable kind.
    pub fn is_nilable(&self) -> bool {
        match &self.ty {
            None => true,
            Some(ty) => ty.is_nilable(),
        }
    }

    /// Returns true for untyped nil and typed null references.
    pub fn is_nil(&self) -> bool {
        matches!(
            self.data,
            Data::Nil
                | Data::Slice(None)
                | Data::Map(None)
                | Data::Pointer(None)
                | Data::Func(None)
        )
    }

    /// The boolean payload, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self.data {
            Data::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// The payload of signed integer values.
    pub fn as_i64(&self) -> Option<i64> {
        match self.data {
            Data::Int(v) => Some(v),
            _ => None,
        }
    }

    /// The payload of unsigned integer values.
    pub fn as_u64(&self) -> Option<u64> {
        match self.data {
            Data::Uint(v) => Some(v),
            _ => None,
        }
    }

    /// The payload of floating point values.
    pub fn as_f64(&self) -> Option<f64> {
        match self.data {
            Data::Float(v) => Some(v),
            _ => None,
        }
    }

    /// The payload of string values.
    pub fn as_str(&self) -> Option<&str> {
        match &self.data {
            Data::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// The callable of non-nil function values.
    pub fn as_func(&self) -> Option<&Func> {
        match &self.data {
            Data::Func(func) => func.as_ref(),
            _ => None,
        }
    }

    /// Elements of arrays and slices. A nil slice has no elements.
    pub fn items(&self) -> Option<&[Value]> {
        match &self.data {
            Data::Slice(items) => Some(items.as_deref().unwrap_or(&[])),
            Data::Array(items) => Some(items.as_ref()),
            _ => None,
        }
    }

    /// Entries of maps. A nil map has no entries.
    pub fn entries(&self) -> Option<&[(Value, Value)]> {
        match &self.data {
            Data::Map(entries) => Some(entries.as_deref().unwrap_or(&[])),
            _ => None,
        }
    }

    /// Fields of struct values, in declaration order.
    pub fn fields(&self) -> Option<&[Value]> {
        match &self.data {
            Data::Struct(fields) => Some(fields.as_ref()),
            _ => None,
        }
    }

    /// The target of non-nil pointers.
    pub fn deref(&self) -> Option<&Value> {
        match &self.data {
            Data::Pointer(target) => target.as_deref(),
            _ => None,
        }
    }

    /// Number of elements of arrays, slices and maps.
    pub fn len(&self) -> Option<usize> {
        self.items()
            .map(<[Value]>::len)
            .or_else(|| self.entries().map(<[(Value, Value)]>::len))
    }

    /// Converts this value to `to`.
    ///
    /// Numeric conversions wrap or truncate. Untyped nil converts only to
    /// `any`. Converting to `any` keeps the concrete type.
    pub fn convert(&self, to: &Type) -> Result<Value, AdaptError> {
        let Some(from) = &self.ty else {
            return if to.kind() == Kind::Interface {
                Ok(Value::nil())
            } else {
                Err(AdaptError::conversion(None, to))
            };
        };
        if from == to || to.kind() == Kind::Interface {
            return Ok(self.clone());
        }
        if !from.convertible_to(to) {
            return Err(AdaptError::conversion(Some(from), to));
        }
        let data = if from.kind().is_numeric() && to.kind().is_numeric() {
            cast_numeric(&self.data, to.kind())
        } else {
            match (&self.data, to.underlying()) {
                (Data::Str(s), Type::Slice(elem)) => string_to_slice(s, elem),
                (Data::Slice(items), Type::String) => slice_to_string(items.as_deref()),
                (Data::Pointer(Some(target)), Type::Pointer(elem))
                    if target.type_of() != Some(elem.as_ref()) =>
                {
                    Data::Pointer(Some(Arc::new(target.convert(elem)?)))
                }
                (data, _) => data.clone(),
            }
        };
        Ok(Value::typed(to.clone(), data))
    }

    /// Shallow equality: same type and `==` on the payload.
    ///
    /// Slices, maps, pointers and functions compare by identity of their
    /// shared body; two nil references of the same type are equal.
    pub fn shallow_eq(&self, other: &Value) -> bool {
        self.ty == other.ty && shallow_data_eq(&self.data, &other.data)
    }

    /// Recursive structural equality.
    ///
    /// Nil and empty slices differ, pointers compare their targets, and
    /// functions are only equal when both are nil.
    pub fn deep_eq(&self, other: &Value) -> bool {
        self.ty == other.ty && deep_data_eq(&self.data, &other.data)
    }

    /// Natural order of two values of the same ordered type.
    pub(crate) fn compare(&self, other: &Value) -> Option<Ordering> {
        match (&self.data, &other.data) {
            (Data::Int(a), Data::Int(b)) => Some(a.cmp(b)),
            (Data::Uint(a), Data::Uint(b)) => Some(a.cmp(b)),
            (Data::Float(a), Data::Float(b)) => a.partial_cmp(b),
            (Data::Str(a), Data::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

fn convert_all(items: impl IntoIterator<Item = Value>, elem: &Type) -> Result<Arc<[Value]>, AdaptError> {
    items.into_iter().map(|item| item.convert(elem)).collect()
}

fn insert_entry(entries: &mut Vec<(Value, Value)>, key: Value, value: Value) {
    match entries.iter_mut().find(|(existing, _)| existing.shallow_eq(&key)) {
        Some(entry) => entry.1 = value,
        None => entries.push((key, value)),
    }
}

fn cast_numeric(data: &Data, to: Kind) -> Data {
    let (i, u, f) = match *data {
        Data::Int(v) => (v, v as u64, v as f64),
        Data::Uint(v) => (v as i64, v, v as f64),
        Data::Float(v) => (v as i64, v as u64, v),
        _ => return data.clone(),
    };
    match to {
        Kind::Int8 => Data::Int(i as i8 as i64),
        Kind::Int16 => Data::Int(i as i16 as i64),
        Kind::Int32 => Data::Int(i as i32 as i64),
        Kind::Int | Kind::Int64 => Data::Int(i),
        Kind::Uint8 => Data::Uint(u as u8 as u64),
        Kind::Uint16 => Data::Uint(u as u16 as u64),
        Kind::Uint32 => Data::Uint(u as u32 as u64),
        Kind::Uint | Kind::Uint64 => Data::Uint(u),
        Kind::Float32 => Data::Float(f as f32 as f64),
        Kind::Float64 => Data::Float(f),
        _ => data.clone(),
    }
}

fn string_to_slice(s: &str, elem: &Type) -> Data {
    let items: Arc<[Value]> = if elem.kind() == Kind::Uint8 {
        s.bytes()
            .map(|b| Value::typed(elem.clone(), Data::Uint(b as u64)))
            .collect()
    } else {
        s.chars()
            .map(|c| Value::typed(elem.clone(), Data::Int(c as i64)))
            .collect()
    };
    Data::Slice(Some(items))
}

fn slice_to_string(items: Option<&[Value]>) -> Data {
    let items = items.unwrap_or(&[]);
    let mut bytes = Vec::with_capacity(items.len());
    let mut text = String::new();
    for item in items {
        match item.data {
            Data::Uint(b) => bytes.push(b as u8),
            Data::Int(r) => text.push(char::from_u32(r as u32).unwrap_or(char::REPLACEMENT_CHARACTER)),
            _ => {}
        }
    }
    if !bytes.is_empty() {
        text = String::from_utf8_lossy(&bytes).into_owned();
    }
    Data::Str(Arc::from(text))
}

fn same_body<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

fn shallow_data_eq(a: &Data, b: &Data) -> bool {
    match (a, b) {
        (Data::Nil, Data::Nil) => true,
        (Data::Bool(a), Data::Bool(b)) => a == b,
        (Data::Int(a), Data::Int(b)) => a == b,
        (Data::Uint(a), Data::Uint(b)) => a == b,
        (Data::Float(a), Data::Float(b)) => a == b,
        (Data::Str(a), Data::Str(b)) => a == b,
        (Data::Slice(a), Data::Slice(b)) => same_body(a, b),
        (Data::Map(a), Data::Map(b)) => same_body(a, b),
        (Data::Pointer(a), Data::Pointer(b)) => same_body(a, b),
        (Data::Func(a), Data::Func(b)) => match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => Func::ptr_eq(a, b),
            _ => false,
        },
        (Data::Array(a), Data::Array(b)) | (Data::Struct(a), Data::Struct(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.shallow_eq(y))
        }
        _ => false,
    }
}

fn deep_data_eq(a: &Data, b: &Data) -> bool {
    match (a, b) {
        (Data::Slice(Some(a)), Data::Slice(Some(b))) => Arc::ptr_eq(a, b) || deep_items_eq(a, b),
        (Data::Array(a), Data::Array(b)) | (Data::Struct(a), Data::Struct(b)) => {
            deep_items_eq(a, b)
        }
        (Data::Map(Some(a)), Data::Map(Some(b))) => {
            Arc::ptr_eq(a, b)
                || (a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter()
                            .any(|(other_key, other)| key.shallow_eq(other_key) && value.deep_eq(other))
                    }))
        }
        (Data::Pointer(Some(a)), Data::Pointer(Some(b))) => Arc::ptr_eq(a, b) || a.deep_eq(b),
        (Data::Func(a), Data::Func(b)) => a.is_none() && b.is_none(),
        (a, b) => shallow_data_eq(a, b),
    }
}

fn deep_items_eq(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.deep_eq(y))
}

impl Default for Value {
    fn default() -> Self {
        Value::nil()
    }
}

/// Structural equality, see [`Value::deep_eq`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.deep_eq(other)
    }
}

impl From<Func> for Value {
    fn from(func: Func) -> Self {
        Value::typed(func.type_of(), Data::Func(Some(func)))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::typed(Type::String, Data::Str(Arc::from(s)))
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Data::Nil
            | Data::Slice(None)
            | Data::Map(None)
            | Data::Pointer(None)
            | Data::Func(None) => f.write_str("<nil>"),
            Data::Bool(v) => write!(f, "{}", v),
            Data::Int(v) => write!(f, "{}", v),
            Data::Uint(v) => write!(f, "{}", v),
            Data::Float(v) => write!(f, "{}", v),
            Data::Str(s) => f.write_str(s),
            Data::Slice(Some(items)) | Data::Array(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Data::Struct(fields) => {
                f.write_str("{")?;
                write_items(f, fields)?;
                f.write_str("}")
            }
            Data::Map(Some(entries)) => {
                f.write_str("map[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                f.write_str("]")
            }
            Data::Pointer(Some(target)) => write!(f, "&{}", target),
            Data::Func(Some(func)) => write!(f, "{}", func.signature()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ty {
            None => f.write_str("nil"),
            Some(Type::String) => write!(f, "string({:?})", self.as_str().unwrap_or_default()),
            Some(ty) => write!(f, "{}({})", ty, self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Field;

    #[test]
    fn test_untyped_nil() {
        let nil = Value::nil();
        assert!(nil.is_nil());
        assert!(nil.is_nilable());
        assert_eq!(nil.type_of(), None);
        assert_eq!(nil.convert(&Type::Any).unwrap(), Value::nil());
        assert!(nil.convert(&Type::Int).is_err());
    }

    #[test]
    fn test_typed_nil_is_nil() {
        for ty in [
            Type::slice(Type::Int),
            Type::map(Type::String, Type::Int),
            Type::pointer(Type::Int),
            Type::func(vec![], vec![]),
        ] {
            let nil = Value::nil_of(ty.clone()).unwrap();
            assert!(nil.is_nil(), "nil {} should be nil", ty);
            assert_eq!(nil.type_of(), Some(&ty));
        }
        assert_eq!(Value::nil_of(Type::Any), Some(Value::nil()));
    }

    #[test]
    fn test_empty_string_is_not_nil() {
        let empty = Value::from("");
        assert!(!empty.is_nilable());
        assert!(!empty.is_nil());
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(Value::zero(&Type::Int), Value::from(0i64));
        assert_eq!(Value::zero(&Type::String), Value::from(""));
        assert_eq!(Value::zero(&Type::Any), Value::nil());
        assert!(Value::zero(&Type::slice(Type::Int)).is_nil());

        let pair = Value::zero(&Type::array(Type::Bool, 2));
        assert_eq!(pair.items().map(<[Value]>::len), Some(2));
        assert!(!pair.is_nil());

        let point = Type::structure(vec![Field::new("x", Type::Float64)]);
        assert_eq!(Value::zero(&point).fields().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_numeric_conversion_wraps() {
        assert_eq!(Value::from(300i64).convert(&Type::Int8).unwrap().as_i64(), Some(44));
        assert_eq!(Value::from(-1i64).convert(&Type::Uint16).unwrap().as_u64(), Some(65535));
        assert_eq!(Value::from(2.9f64).convert(&Type::Int).unwrap().as_i64(), Some(2));
        assert_eq!(Value::from(7u8).convert(&Type::Float32).unwrap().as_f64(), Some(7.0));
    }

    #[test]
    fn test_conversion_to_any_keeps_type() {
        let converted = Value::from(3i32).convert(&Type::Any).unwrap();
        assert_eq!(converted.type_of(), Some(&Type::Int32));
    }

    #[test]
    fn test_inconvertible() {
        let err = Value::from("x").convert(&Type::Int).unwrap_err();
        assert_eq!(err, AdaptError::conversion(Some(&Type::String), &Type::Int));
    }

    #[test]
    fn test_string_and_bytes() {
        let bytes = Value::from("hi").convert(&Type::slice(Type::Uint8)).unwrap();
        assert_eq!(bytes, Value::from(vec![104u8, 105]));
        let back = bytes.convert(&Type::String).unwrap();
        assert_eq!(back.as_str(), Some("hi"));

        let runes = Value::from("é").convert(&Type::slice(Type::Int32)).unwrap();
        assert_eq!(runes, Value::from(vec![233i32]));
        assert_eq!(runes.convert(&Type::String).unwrap().as_str(), Some("é"));
    }

    #[test]
    fn test_named_conversion_shares_body() {
        let names = Type::named("Names", Type::slice(Type::String));
        let plain = Value::from(vec!["a".to_string()]);
        let named = plain.convert(&names).unwrap();
        assert_eq!(named.type_of(), Some(&names));
        assert!(!named.shallow_eq(&plain)); // types differ
        assert!(named.convert(&Type::slice(Type::String)).unwrap().shallow_eq(&plain));
    }

    #[test]
    fn test_shallow_eq_identity_for_slices() {
        let xs = Value::from(vec![1i64, 2]);
        assert!(xs.shallow_eq(&xs.clone()));
        assert!(!xs.shallow_eq(&Value::from(vec![1i64, 2])));

        let nil = Value::nil_of(Type::slice(Type::Int)).unwrap();
        assert!(nil.shallow_eq(&nil.clone()));
        assert!(!nil.shallow_eq(&xs));
    }

    #[test]
    fn test_shallow_eq_by_value_for_arrays() {
        let a = Value::from([1i64, 2]);
        let b = Value::from([1i64, 2]);
        assert!(a.shallow_eq(&b));
        assert!(!a.shallow_eq(&Value::from([2i64, 1])));
    }

    #[test]
    fn test_deep_eq() {
        assert!(Value::from(vec![1i64, 2]).deep_eq(&Value::from(vec![1i64, 2])));
        assert!(!Value::from(vec![1i64, 2]).deep_eq(&Value::from(vec![1i32, 2])));

        let empty = Value::slice(Type::Int, Vec::new()).unwrap();
        let nil = Value::nil_of(Type::slice(Type::Int)).unwrap();
        assert!(!empty.deep_eq(&nil));

        let a = Value::map_of([("k".to_string(), vec![1u8])]);
        let b = Value::map_of([("k".to_string(), vec![1u8])]);
        assert!(a.deep_eq(&b));
        assert!(!a.shallow_eq(&b));
    }

    #[test]
    fn test_pointers() {
        let p = Value::pointer_to(Value::from(5i64));
        let q = Value::pointer_to(Value::from(5i64));
        assert_eq!(p.type_of(), Some(&Type::pointer(Type::Int)));
        assert!(p.shallow_eq(&p.clone()));
        assert!(!p.shallow_eq(&q));
        assert!(p.deep_eq(&q));
        assert_eq!(p.deref(), Some(&Value::from(5i64)));
    }

    #[test]
    fn test_pointer_conversion_retypes_target() {
        let meters = Type::named("Meters", Type::Float64);
        let p = Value::pointer_to(Value::from(2.0f64).convert(&meters).unwrap());
        let converted = p.convert(&Type::pointer(Type::Float64)).unwrap();

        assert_eq!(converted.type_of(), Some(&Type::pointer(Type::Float64)));
        assert_eq!(converted.deref(), Some(&Value::from(2.0f64)));
        assert!(converted.deep_eq(&Value::pointer_to(Value::from(2.0f64))));

        // Same pointee type keeps the shared target
        let ptr = Type::named("FloatPtr", Type::pointer(Type::Float64));
        let q = Value::pointer_to(Value::from(1.0f64));
        let named = q.convert(&ptr).unwrap();
        assert_eq!(named.type_of(), Some(&ptr));
        assert!(named.convert(&Type::pointer(Type::Float64)).unwrap().shallow_eq(&q));
    }

    #[test]
    fn test_map_replaces_equal_keys() {
        let m = Value::map(
            Type::String,
            Type::Int,
            [
                (Value::from("a"), Value::from(1i64)),
                (Value::from("a"), Value::from(2i8)),
            ],
        )
        .unwrap();
        assert_eq!(m.len(), Some(1));
        assert_eq!(m.entries().unwrap()[0].1, Value::from(2i64));
    }

    #[test]
    fn test_structure_checks_fields() {
        let point = Type::structure(vec![Field::new("x", Type::Int), Field::new("y", Type::Int)]);
        let p = Value::structure(point.clone(), [Value::from(1i32), Value::from(2u8)]).unwrap();
        assert_eq!(p.fields().unwrap()[1], Value::from(2i64));
        assert_eq!(p.to_string(), "{1 2}");

        let err = Value::structure(point, [Value::from(1i64)]).unwrap_err();
        assert_eq!(err, AdaptError::Arity { expected: 2, found: 1 });
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(Value::from(vec![1i64, 2]).to_string(), "[1 2]");
        assert_eq!(Value::nil().to_string(), "<nil>");
        assert_eq!(format!("{:?}", Value::from(3i64)), "int(3)");
        assert_eq!(format!("{:?}", Value::from("a")), "string(\"a\")");
        assert_eq!(format!("{:?}", Value::nil()), "nil");
        assert_eq!(Value::map_of([(1i64, true)]).to_string(), "map[1:true]");
    }
}

//! Runtime type descriptors
//!
//! Rust erases types at run time, so this module provides the small type
//! system dynamic values are tagged with. A [`Type`] describes the shape of a
//! [`Value`](crate::Value); a [`Signature`] describes the shape of a
//! [`Func`](crate::Func). Conversion rules live here so that adapters can
//! check convertibility once, when they are built.
//!
//! # Example
//!
//! ```rust
//! use anyfn::types::{Kind, Type};
//!
//! let celsius = Type::named("Celsius", Type::Float64);
//! assert_eq!(celsius.kind(), Kind::Float64);
//! assert!(celsius.convertible_to(&Type::Int));
//! assert!(!Type::String.convertible_to(&Type::Int));
//! assert_eq!(Type::map(Type::String, Type::slice(Type::Int)).to_string(), "map[string][]int");
//! ```

use std::fmt;
use std::sync::Arc;

/// The category of a [`Type`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`
    Bool,
    /// `int` (64 bits)
    Int,
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `uint` (64 bits)
    Uint,
    /// `uint8`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `float32`
    Float32,
    /// `float64`
    Float64,
    /// `string`
    String,
    /// The fully dynamic `any` type.
    Interface,
    /// Growable sequence.
    Slice,
    /// Fixed-size sequence.
    Array,
    /// Keyed associative container.
    Map,
    /// Shared reference to a single value.
    Pointer,
    /// Callable.
    Func,
    /// Record with named fields.
    Struct,
}

impl Kind {
    /// Returns true for kinds whose values may be the null reference.
    pub fn is_nilable(self) -> bool {
        matches!(
            self,
            Kind::Func | Kind::Interface | Kind::Map | Kind::Pointer | Kind::Slice
        )
    }

    /// Returns true for signed integer kinds.
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64
        )
    }

    /// Returns true for unsigned integer kinds.
    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            Kind::Uint | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64
        )
    }

    /// Returns true for floating point kinds.
    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }

    /// Returns true for integer, unsigned and floating point kinds.
    pub fn is_numeric(self) -> bool {
        self.is_signed() || self.is_unsigned() || self.is_float()
    }

    /// Returns true for kinds with a natural order.
    pub fn is_lessable(self) -> bool {
        self.is_numeric() || self == Kind::String
    }

    /// Lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Interface => "interface",
            Kind::Slice => "slice",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Pointer => "ptr",
            Kind::Func => "func",
            Kind::Struct => "struct",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named field of a struct type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    pub ty: Type,
}

impl Field {
    /// Create a field.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Field {
            name: name.into(),
            ty,
        }
    }
}

/// A runtime type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// `bool`
    Bool,
    /// `int`
    Int,
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `uint`
    Uint,
    /// `uint8`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `float32`
    Float32,
    /// `float64`
    Float64,
    /// `string`
    String,
    /// `any`, the type every value converts to.
    Any,
    /// `[]T`
    Slice(Box<Type>),
    /// `[N]T`
    Array(Box<Type>, usize),
    /// `map[K]V`
    Map(Box<Type>, Box<Type>),
    /// `*T`
    Pointer(Box<Type>),
    /// `func(P...) (R...)`
    Func(Box<Signature>),
    /// `struct { ... }`
    Struct(Vec<Field>),
    /// A distinct named type over an unnamed underlying type.
    Named(Arc<str>, Box<Type>),
}

impl Type {
    /// `[]elem`
    pub fn slice(elem: Type) -> Type {
        Type::Slice(Box::new(elem))
    }

    /// `[len]elem`
    pub fn array(elem: Type, len: usize) -> Type {
        Type::Array(Box::new(elem), len)
    }

    /// `map[key]value`
    pub fn map(key: Type, value: Type) -> Type {
        Type::Map(Box::new(key), Box::new(value))
    }

    /// `*elem`
    pub fn pointer(elem: Type) -> Type {
        Type::Pointer(Box::new(elem))
    }

    /// `func(params...) (results...)`
    pub fn func(params: Vec<Type>, results: Vec<Type>) -> Type {
        Type::Func(Box::new(Signature::new(params, results)))
    }

    /// `struct { fields... }`
    pub fn structure(fields: Vec<Field>) -> Type {
        Type::Struct(fields)
    }

    /// A named type. Naming an already named type names its underlying type.
    pub fn named(name: impl Into<Arc<str>>, underlying: Type) -> Type {
        let underlying = underlying.underlying().clone();
        Type::Named(name.into(), Box::new(underlying))
    }

    /// The unnamed type this type is defined over.
    pub fn underlying(&self) -> &Type {
        match self {
            Type::Named(_, ty) => ty.underlying(),
            ty => ty,
        }
    }

    /// The category of this type.
    pub fn kind(&self) -> Kind {
        match self.underlying() {
            Type::Bool => Kind::Bool,
            Type::Int => Kind::Int,
            Type::Int8 => Kind::Int8,
            Type::Int16 => Kind::Int16,
            Type::Int32 => Kind::Int32,
            Type::Int64 => Kind::Int64,
            Type::Uint => Kind::Uint,
            Type::Uint8 => Kind::Uint8,
            Type::Uint16 => Kind::Uint16,
            Type::Uint32 => Kind::Uint32,
            Type::Uint64 => Kind::Uint64,
            Type::Float32 => Kind::Float32,
            Type::Float64 => Kind::Float64,
            Type::String => Kind::String,
            Type::Any => Kind::Interface,
            Type::Slice(_) => Kind::Slice,
            Type::Array(..) => Kind::Array,
            Type::Map(..) => Kind::Map,
            Type::Pointer(_) => Kind::Pointer,
            Type::Func(_) => Kind::Func,
            Type::Struct(_) => Kind::Struct,
            Type::Named(_, ty) => ty.kind(),
        }
    }

    /// Element type of slices, arrays and pointers; value type of maps.
    pub fn elem(&self) -> Option<&Type> {
        match self.underlying() {
            Type::Slice(elem) | Type::Array(elem, _) | Type::Pointer(elem) => Some(elem),
            Type::Map(_, value) => Some(value),
            _ => None,
        }
    }

    /// Key type of maps.
    pub fn key(&self) -> Option<&Type> {
        match self.underlying() {
            Type::Map(key, _) => Some(key),
            _ => None,
        }
    }

    /// Declared length of arrays.
    pub fn len(&self) -> Option<usize> {
        match self.underlying() {
            Type::Array(_, len) => Some(*len),
            _ => None,
        }
    }

    /// Signature of function types.
    pub fn signature(&self) -> Option<&Signature> {
        match self.underlying() {
            Type::Func(sig) => Some(sig),
            _ => None,
        }
    }

    /// Fields of struct types.
    pub fn fields(&self) -> Option<&[Field]> {
        match self.underlying() {
            Type::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns true if values of this type may be the null reference.
    pub fn is_nilable(&self) -> bool {
        self.kind().is_nilable()
    }

    /// Returns true if `==` is defined between values of this type.
    ///
    /// Slices, maps and functions are not comparable; arrays and structs are
    /// comparable when their elements are.
    pub fn is_comparable(&self) -> bool {
        match self.underlying() {
            Type::Slice(_) | Type::Map(..) | Type::Func(_) => false,
            Type::Array(elem, _) => elem.is_comparable(),
            Type::Struct(fields) => fields.iter().all(|f| f.ty.is_comparable()),
            _ => true,
        }
    }

    /// Reports whether a value of this type can be converted to `to`.
    ///
    /// Conversions are allowed between identical types, types with identical
    /// underlying types, any two numeric types, any type and `any`, `string`
    /// and `[]uint8` or `[]int32`, and pointer types whose element types have
    /// identical underlying types.
    pub fn convertible_to(&self, to: &Type) -> bool {
        if self == to || to.kind() == Kind::Interface {
            return true;
        }
        let (from_kind, to_kind) = (self.kind(), to.kind());
        if from_kind == Kind::Interface {
            return false;
        }
        if self.underlying() == to.underlying() {
            return true;
        }
        if from_kind.is_numeric() && to_kind.is_numeric() {
            return true;
        }
        match (self.underlying(), to.underlying()) {
            (Type::Pointer(a), Type::Pointer(b)) => a.underlying() == b.underlying(),
            (Type::String, Type::Slice(elem)) | (Type::Slice(elem), Type::String) => {
                matches!(elem.kind(), Kind::Uint8 | Kind::Int32)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Any => f.write_str("any"),
            Type::Slice(elem) => write!(f, "[]{}", elem),
            Type::Array(elem, len) => write!(f, "[{}]{}", len, elem),
            Type::Map(key, value) => write!(f, "map[{}]{}", key, value),
            Type::Pointer(elem) => write!(f, "*{}", elem),
            Type::Func(sig) => write!(f, "{}", sig),
            Type::Struct(fields) => {
                if fields.is_empty() {
                    return f.write_str("struct {}");
                }
                f.write_str("struct { ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{} {}", field.name, field.ty)?;
                }
                f.write_str(" }")
            }
            Type::Named(name, _) => f.write_str(name),
            ty => f.write_str(ty.kind().name()),
        }
    }
}

/// Parameter and result types of a function.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    params: Vec<Type>,
    results: Vec<Type>,
}

impl Signature {
    /// Create a signature.
    pub fn new(params: Vec<Type>, results: Vec<Type>) -> Self {
        Signature { params, results }
    }

    /// Parameter types, in order.
    pub fn params(&self) -> &[Type] {
        &self.params
    }

    /// Result types, in order.
    pub fn results(&self) -> &[Type] {
        &self.results
    }

    /// Number of parameters.
    pub fn num_in(&self) -> usize {
        self.params.len()
    }

    /// Number of results.
    pub fn num_out(&self) -> usize {
        self.results.len()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("func(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str(")")?;
        match self.results.as_slice() {
            [] => Ok(()),
            [result] => write!(f, " {}", result),
            results => {
                f.write_str(" (")?;
                for (i, result) in results.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", result)?;
                }
                f.write_str(")")
            }
        }
    }
}

//! Serde support for dynamic values (feature-gated)
//!
//! Values serialize as their natural data: scalars as themselves, arrays
//! and slices as sequences, maps as maps, structs as maps of field names,
//! pointers as their target. Nil serializes as a unit and functions as
//! their type name. [`Type`] and [`Kind`] serialize as their names.
//!
//! # Example
//!
//! ```rust,ignore
//! use anyfn::Value;
//!
//! let json = serde_json::to_string(&Value::from(vec![1i64, 2])).unwrap();
//! assert_eq!(json, "[1,2]");
//! ```

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::types::{Kind, Type};
use crate::value::{Data, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.data() {
            Data::Nil
            | Data::Slice(None)
            | Data::Map(None)
            | Data::Pointer(None)
            | Data::Func(None) => serializer.serialize_unit(),
            Data::Bool(v) => serializer.serialize_bool(*v),
            Data::Int(v) => serializer.serialize_i64(*v),
            Data::Uint(v) => serializer.serialize_u64(*v),
            Data::Float(v) => serializer.serialize_f64(*v),
            Data::Str(s) => serializer.serialize_str(s),
            Data::Slice(Some(items)) | Data::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Data::Map(Some(entries)) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Data::Struct(fields) => {
                let names = self.type_of().and_then(Type::fields).unwrap_or_default();
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (field, value) in names.iter().zip(fields.iter()) {
                    map.serialize_entry(&field.name, value)?;
                }
                map.end()
            }
            Data::Pointer(Some(target)) => target.serialize(serializer),
            Data::Func(Some(func)) => serializer.collect_str(func.signature()),
        }
    }
}

impl Serialize for Type {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

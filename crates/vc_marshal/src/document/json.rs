use alloc::borrow::Cow;
use alloc::vec::Vec;

use serde_json::{Map, Number, Value};

use crate::document::{Document, NodeKind, Scalar};

/// JSON backend.
///
/// Requires the `preserve_order` feature of `serde_json`, enabled by this
/// crate, so objects keep member order. JSON has no blob node and no
/// representation for non-finite floats.
impl Document for Value {
    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        Some(match scalar {
            Scalar::Bool(v) => Value::Bool(v),
            Scalar::Int(v) => Value::Number(v.into()),
            Scalar::UInt(v) => Value::Number(v.into()),
            Scalar::Float(v) => Value::Number(Number::from_f64(v)?),
            Scalar::Str(v) => Value::String(v.into_owned()),
        })
    }

    #[inline]
    fn null() -> Self {
        Value::Null
    }

    fn kind(&self) -> NodeKind {
        match self {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Value::Bool(v) => Some(Scalar::Bool(*v)),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Some(Scalar::Int(v))
                } else if let Some(v) = n.as_u64() {
                    Some(Scalar::UInt(v))
                } else {
                    n.as_f64().map(Scalar::Float)
                }
            }
            Value::String(v) => Some(Scalar::Str(Cow::Borrowed(v))),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    #[inline]
    fn empty_object() -> Self {
        Value::Object(Map::new())
    }

    fn insert_member(&mut self, key: &str, value: Self) {
        if let Value::Object(map) = self {
            map.insert(key.into(), value);
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    #[inline]
    fn empty_array(capacity: usize) -> Self {
        Value::Array(Vec::with_capacity(capacity))
    }

    fn push_item(&mut self, item: Self) {
        if let Value::Array(items) = self {
            items.push(item);
        }
    }

    fn as_items(&self) -> Option<&[Self]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

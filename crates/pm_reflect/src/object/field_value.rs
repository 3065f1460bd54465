use alloc::vec::Vec;

use crate::object::DynamicObject;
use crate::value::Value;

/// The value bound to one field of a [`DynamicObject`].
///
/// Fields with a nested type hint hold [`Object`](Self::Object)s or
/// [`Array`](Self::Array)s of them; every other field holds the raw [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Value(Value),
    Object(DynamicObject),
    Array(Vec<FieldValue>),
}

impl FieldValue {
    /// Returns the raw value, if this field was copied verbatim.
    #[inline]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the nested object, if any.
    #[inline]
    pub const fn as_object(&self) -> Option<&DynamicObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the nested array, if any.
    #[inline]
    pub const fn as_array(&self) -> Option<&Vec<FieldValue>> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<DynamicObject> for FieldValue {
    #[inline]
    fn from(object: DynamicObject) -> Self {
        Self::Object(object)
    }
}

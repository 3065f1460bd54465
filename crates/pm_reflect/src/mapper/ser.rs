use crate::mapper::Mapper;
use crate::object::{DynamicObject, FieldValue};
use crate::registry::TypeMetadata;
use crate::value::{Map, Value};

impl Mapper {
    /// Serializes an object back to raw data.
    ///
    /// Fields declared transient are omitted, renamed fields are written
    /// under their serialize-side name, and nested objects and arrays are
    /// serialized recursively. No discriminator is added: it is written only
    /// if the object holds it as a field.
    pub fn serialize(&self, object: &DynamicObject) -> Value {
        let ty = object.ty();
        let mut map = Map::new();
        for (name, value) in object.iter() {
            let key = match self.types.field_meta(ty, name) {
                Some(meta) if meta.is_transient() => continue,
                Some(meta) => meta.serialize_name(),
                None => name,
            };
            map.insert(key.into(), self.serialize_field(value));
        }
        Value::Object(map)
    }

    fn serialize_field(&self, value: &FieldValue) -> Value {
        match value {
            FieldValue::Value(value) => value.clone(),
            FieldValue::Object(object) => self.serialize(object),
            FieldValue::Array(items) => {
                Value::Array(items.iter().map(|item| self.serialize_field(item)).collect())
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

use alloc::vec::Vec;

use crate::info::{FieldMeta, TypeHint, TypeRef};
use crate::mapper::{MapError, Mapper};
use crate::object::{DynamicObject, FieldValue};
use crate::registry::TypeMetadata;
use crate::value::{self, Value};

impl Mapper {
    /// Deserializes `data` as an object or an array of objects.
    pub fn deserialize(&self, data: &Value, hint: TypeHint) -> Result<FieldValue, MapError> {
        match hint {
            TypeHint::Object(ty) => self.deserialize_object(data, ty).map(FieldValue::Object),
            TypeHint::Array(ty) => {
                let items = self.deserialize_array(data, ty)?;
                Ok(FieldValue::Array(items.into_iter().map(FieldValue::Object).collect()))
            }
        }
    }

    /// Deserializes an object whose base type is `base`.
    ///
    /// The concrete type is resolved by the [`Registry`], then every key of
    /// `data` is bound:
    /// - a key that is the deserialize-side name of a renamed field binds to
    ///   that field; a key equal to the field name itself is then ignored;
    /// - any other key binds to the field of the same name, declared or not.
    ///
    /// Field declarations are looked up along the `extends` chain. A field
    /// with a [`TypeHint`] is deserialized recursively, except `null` which
    /// is kept as is.
    ///
    /// [`Registry`]: crate::inherit::Registry
    pub fn deserialize_object(&self, data: &Value, base: TypeRef) -> Result<DynamicObject, MapError> {
        let Value::Object(map) = data else {
            return Err(MapError::ObjectExpected {
                ty: base,
                found: value::kind(data),
            });
        };

        let ty = self.resolve(base, map)?;
        let fields = self.types.fields(ty);
        let mut object = DynamicObject::new(ty);

        for (key, value) in map {
            let key = key.as_str();
            let is_alias = fields
                .iter()
                .any(|field| field.is_renamed_on_deserialize() && field.deserialize_name() == key);
            if is_alias {
                continue;
            }
            let meta = fields.iter().copied().find(|field| field.name() == key);
            // Superseded by the renamed key, never read.
            if meta.is_some_and(|field| {
                field.is_renamed_on_deserialize() && map.contains_key(field.deserialize_name())
            }) {
                continue;
            }
            self.bind_field(&mut object, key, meta, value)?;
        }

        for field in fields.iter().copied().filter(|field| field.is_renamed_on_deserialize()) {
            if let Some(value) = map.get(field.deserialize_name()) {
                self.bind_field(&mut object, field.name(), Some(field), value)?;
            }
        }

        Ok(object)
    }

    /// Deserializes an array whose elements have `ty` as base type.
    pub fn deserialize_array(&self, data: &Value, ty: TypeRef) -> Result<Vec<DynamicObject>, MapError> {
        let Value::Array(items) = data else {
            return Err(MapError::ArrayExpected {
                ty,
                found: value::kind(data),
            });
        };
        items
            .iter()
            .map(|item| self.deserialize_object(item, ty))
            .collect()
    }

    fn bind_field(
        &self,
        object: &mut DynamicObject,
        name: &str,
        meta: Option<&FieldMeta>,
        value: &Value,
    ) -> Result<(), MapError> {
        let bound = match meta.and_then(FieldMeta::hint) {
            Some(_) if value.is_null() => FieldValue::Value(Value::Null),
            Some(hint) => self.deserialize(value, hint)?,
            None => FieldValue::Value(value.clone()),
        };

        crate::cfg::debug! {
            log::trace!("bound `{}.{name}` as {}", object.ty(), bound_kind(&bound));
        }

        object.insert(name, bound);
        Ok(())
    }
}

crate::cfg::debug! {
    fn bound_kind(bound: &FieldValue) -> &'static str {
        match bound {
            FieldValue::Value(data) => value::kind(data),
            FieldValue::Object(_) => "nested object",
            FieldValue::Array(_) => "nested array",
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use crate::info::{TypeHint, TypeRef};
    use crate::inherit::ResolveError;
    use crate::mapper::MapError;
    use crate::mapper::fixtures::{Address, Bike, Car, Garage, SportsCar, Vehicle, json, mapper};
    use crate::object::FieldValue;
    use crate::value::Value;

    #[test]
    fn non_polymorphic_object_copies_keys() {
        let mapper = mapper();
        let address = mapper
            .deserialize_object(&json(r#"{"city":"Lyon","zip":69001}"#), TypeRef::of::<Address>())
            .unwrap();

        assert!(address.is::<Address>());
        assert_eq!(address.str_field("city"), Ok("Lyon"));
        assert_eq!(address.i64_field("zip"), Ok(69001));
        assert_eq!(address.len(), 2);
    }

    #[test]
    fn resolves_then_binds_renamed_fields() {
        let mapper = mapper();
        let car = mapper
            .deserialize_object(
                &json(r#"{"type":"car","car_name":"beetle","wheels":4}"#),
                TypeRef::of::<Vehicle>(),
            )
            .unwrap();

        assert!(car.is::<Car>());
        assert_eq!(car.str_field("name"), Ok("beetle"));
        assert!(!car.contains("car_name"));
        // The discriminator is an ordinary field.
        assert_eq!(car.str_field("type"), Ok("car"));
    }

    #[test]
    fn renamed_key_wins_over_field_name() {
        let mapper = mapper();
        for text in [
            r#"{"type":"car","name":"plain","car_name":"renamed"}"#,
            r#"{"type":"car","car_name":"renamed","name":"plain"}"#,
        ] {
            let car = mapper
                .deserialize_object(&json(text), TypeRef::of::<Vehicle>())
                .unwrap();
            assert_eq!(car.str_field("name"), Ok("renamed"));
        }

        let car = mapper
            .deserialize_object(&json(r#"{"type":"car","name":"plain"}"#), TypeRef::of::<Vehicle>())
            .unwrap();
        assert_eq!(car.str_field("name"), Ok("plain"));
    }

    #[test]
    fn superseded_field_name_is_not_deserialized() {
        let mapper = mapper();
        let garage = mapper
            .deserialize_object(
                &json(r#"{"site":{"city":"Lyon"},"location":"downtown"}"#),
                TypeRef::of::<Garage>(),
            )
            .unwrap();

        let location = garage.get("location").and_then(FieldValue::as_object).unwrap();
        assert!(location.is::<Address>());
        assert_eq!(location.str_field("city"), Ok("Lyon"));
        assert!(!garage.contains("site"));

        // Alone, the field name is still bound through the hint.
        assert_eq!(
            mapper.deserialize_object(&json(r#"{"location":"downtown"}"#), TypeRef::of::<Garage>()),
            Err(MapError::ObjectExpected {
                ty: TypeRef::of::<Address>(),
                found: "string",
            }),
        );
    }

    #[test]
    fn inherited_fields_apply_to_children() {
        let mapper = mapper();
        let car = mapper
            .deserialize_object(
                &json(r#"{"type":"car","kind":"sport","car_name":"gt","speed":310,"boost":true}"#),
                TypeRef::of::<Vehicle>(),
            )
            .unwrap();

        assert!(car.is::<SportsCar>());
        assert_eq!(car.str_field("name"), Ok("gt"));
        assert_eq!(car.u64_field("top_speed"), Ok(310));
        // Transient fields are still read.
        assert_eq!(car.bool_field("boost"), Ok(true));
        assert!(!car.contains("speed"));
    }

    #[test]
    fn hinted_fields_recurse() {
        let mapper = mapper();
        let garage = mapper
            .deserialize_object(
                &json(
                    r#"{
                        "vehicles": [{"type": "bike"}, {"type": "car", "kind": "sport"}],
                        "favorite": {"type": "car"},
                        "address": {"city": "Lyon"},
                        "tags": [{"type": "bike"}]
                    }"#,
                ),
                TypeRef::of::<Garage>(),
            )
            .unwrap();

        let vehicles = garage.get("vehicles").and_then(FieldValue::as_array).unwrap();
        assert_eq!(vehicles.len(), 2);
        assert!(vehicles[0].as_object().unwrap().is::<Bike>());
        assert!(vehicles[1].as_object().unwrap().is::<SportsCar>());

        assert!(garage.get("favorite").and_then(FieldValue::as_object).unwrap().is::<Car>());
        assert!(garage.get("address").and_then(FieldValue::as_object).unwrap().is::<Address>());

        // Without a hint, nested data is copied verbatim.
        assert_eq!(
            garage.value_field("tags").unwrap(),
            &json(r#"[{"type":"bike"}]"#),
        );
    }

    #[test]
    fn null_hinted_field_stays_null() {
        let mapper = mapper();
        let garage = mapper
            .deserialize_object(
                &json(r#"{"vehicles":null,"favorite":null}"#),
                TypeRef::of::<Garage>(),
            )
            .unwrap();

        assert_eq!(garage.value_field("vehicles"), Ok(&Value::Null));
        assert_eq!(garage.value_field("favorite"), Ok(&Value::Null));
        assert!(!garage.contains("address"));
    }

    #[test]
    fn deserialize_dispatches_on_hint() {
        let mapper = mapper();

        let bike = mapper
            .deserialize(&json(r#"{"type":"bike"}"#), TypeHint::of::<Vehicle>())
            .unwrap();
        assert!(bike.as_object().unwrap().is::<Bike>());

        let vehicles = mapper
            .deserialize(&json(r#"[{"type":"bike"},{"type":"car"}]"#), TypeHint::array_of::<Vehicle>())
            .unwrap();
        assert_eq!(vehicles.as_array().map(Vec::len), Some(2));

        let empty = mapper
            .deserialize_array(&json("[]"), TypeRef::of::<Vehicle>())
            .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn shape_mismatches() {
        let mapper = mapper();

        let err = mapper
            .deserialize(&json(r#"[{"type":"bike"}]"#), TypeHint::of::<Vehicle>())
            .unwrap_err();
        assert_eq!(
            err,
            MapError::ObjectExpected {
                ty: TypeRef::of::<Vehicle>(),
                found: "array",
            },
        );
        assert_eq!(
            err.to_string(),
            "deserializing an instance of `Vehicle` can only work with an object, but array given",
        );

        let err = mapper
            .deserialize(&json(r#"{"type":"bike"}"#), TypeHint::array_of::<Vehicle>())
            .unwrap_err();
        assert_eq!(
            err,
            MapError::ArrayExpected {
                ty: TypeRef::of::<Vehicle>(),
                found: "object",
            },
        );

        assert_eq!(
            mapper.deserialize_object(&json("3"), TypeRef::of::<Address>()),
            Err(MapError::ObjectExpected {
                ty: TypeRef::of::<Address>(),
                found: "number",
            }),
        );
        // Elements of an array are never null.
        assert_eq!(
            mapper.deserialize_array(&json(r#"[{"type":"bike"},null]"#), TypeRef::of::<Vehicle>()),
            Err(MapError::ObjectExpected {
                ty: TypeRef::of::<Vehicle>(),
                found: "null",
            }),
        );
    }

    #[test]
    fn nested_errors_propagate_unchanged() {
        let mapper = mapper();

        assert_eq!(
            mapper.deserialize_object(
                &json(r#"{"vehicles":[{"type":"bike"},{"wheels":3}]}"#),
                TypeRef::of::<Garage>(),
            ),
            Err(MapError::Resolve(ResolveError::MissingDiscriminator {
                parent: TypeRef::of::<Vehicle>(),
                field: "type".into(),
            })),
        );
        assert_eq!(
            mapper.deserialize_object(&json(r#"{"address":"Lyon"}"#), TypeRef::of::<Garage>()),
            Err(MapError::ObjectExpected {
                ty: TypeRef::of::<Address>(),
                found: "string",
            }),
        );
    }
}

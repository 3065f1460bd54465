//! Types shared by the mapper tests.
//!
//! ```text
//! Vehicle (type)
//! ├── Car (kind, allow_self)   name <-> car_name
//! │   └── SportsCar            top_speed <- speed, boost transient
//! └── Bike
//! Garage                       vehicles: [Vehicle], favorite: Vehicle, address: Address,
//!                              location <- site: Address
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::info::{FieldMeta, ParentOptions, TypeHint};
use crate::inherit::Registration;
use crate::mapper::Mapper;
use crate::object::{DynamicObject, FieldValue, FromObject, FromObjectError};
use crate::registry::{FromType, GetTypeMeta, TypeMeta, TypeRegistry, TypeTraitFromObject};
use crate::value::Value;

#[derive(Debug, PartialEq)]
pub(super) enum Vehicle {
    Car(Car),
    SportsCar(SportsCar),
    Bike(Bike),
}

#[derive(Debug, PartialEq)]
pub(super) struct Car {
    pub name: String,
    pub wheels: i64,
}

#[derive(Debug, PartialEq)]
pub(super) struct SportsCar {
    pub name: String,
    pub top_speed: u64,
}

#[derive(Debug, PartialEq)]
pub(super) struct Bike {
    pub gears: u64,
}

pub(super) struct Address;

#[derive(Debug, PartialEq)]
pub(super) struct Garage {
    pub vehicles: Vec<Vehicle>,
    pub favorite: Option<Vehicle>,
}

// -----------------------------------------------------------------------------
// Metadata

impl GetTypeMeta for Vehicle {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_parent_options(ParentOptions::new("type"))
            .with_trait::<TypeTraitFromObject>(FromType::<Self>::from_type())
    }

    fn register_dependencies(types: &mut TypeRegistry) {
        types.register::<Car>();
        types.register::<Bike>();
    }
}

impl GetTypeMeta for Car {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_extends::<Vehicle>()
            .with_parent_options(ParentOptions::new("kind").with_allow_self(true))
            .with_field(FieldMeta::new("name").with_name("car_name"))
            .with_field(FieldMeta::new("wheels"))
            .with_trait::<TypeTraitFromObject>(FromType::<Self>::from_type())
    }

    fn register_dependencies(types: &mut TypeRegistry) {
        types.register::<SportsCar>();
    }
}

impl GetTypeMeta for SportsCar {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_extends::<Car>()
            .with_field(FieldMeta::new("top_speed").with_deserialize_name("speed"))
            .with_field(FieldMeta::new("boost").transient())
            .with_trait::<TypeTraitFromObject>(FromType::<Self>::from_type())
    }
}

impl GetTypeMeta for Bike {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_extends::<Vehicle>()
            .with_trait::<TypeTraitFromObject>(FromType::<Self>::from_type())
    }
}

impl GetTypeMeta for Address {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
    }
}

impl GetTypeMeta for Garage {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<Self>()
            .with_field(FieldMeta::new("vehicles").with_hint(TypeHint::array_of::<Vehicle>()))
            .with_field(FieldMeta::new("favorite").with_hint(TypeHint::of::<Vehicle>()))
            .with_field(FieldMeta::new("address").with_hint(TypeHint::of::<Address>()))
            .with_field(
                FieldMeta::new("location")
                    .with_deserialize_name("site")
                    .with_hint(TypeHint::of::<Address>()),
            )
            .with_field(FieldMeta::new("label").with_serialize_name("title"))
            .with_field(FieldMeta::new("cache").transient())
    }

    fn register_dependencies(types: &mut TypeRegistry) {
        types.register::<Vehicle>();
        types.register::<Address>();
    }
}

// -----------------------------------------------------------------------------
// Construction

impl FromObject for Vehicle {
    fn from_object(object: &DynamicObject) -> Result<Self, FromObjectError> {
        if object.is::<Car>() {
            Car::from_object(object).map(Self::Car)
        } else if object.is::<SportsCar>() {
            SportsCar::from_object(object).map(Self::SportsCar)
        } else {
            Bike::from_object(object).map(Self::Bike)
        }
    }
}

impl FromObject for Car {
    fn from_object(object: &DynamicObject) -> Result<Self, FromObjectError> {
        object.expect_type::<Self>()?;
        Ok(Car {
            name: object.str_field("name")?.into(),
            wheels: object.i64_field("wheels")?,
        })
    }
}

impl FromObject for SportsCar {
    fn from_object(object: &DynamicObject) -> Result<Self, FromObjectError> {
        object.expect_type::<Self>()?;
        Ok(SportsCar {
            name: object.str_field("name")?.into(),
            top_speed: object.u64_field("top_speed")?,
        })
    }
}

impl FromObject for Bike {
    fn from_object(object: &DynamicObject) -> Result<Self, FromObjectError> {
        object.expect_type::<Self>()?;
        Ok(Bike {
            gears: object.u64_field("gears")?,
        })
    }
}

impl FromObject for Garage {
    fn from_object(object: &DynamicObject) -> Result<Self, FromObjectError> {
        object.expect_type::<Self>()?;
        let favorite = match object.get("favorite") {
            Some(FieldValue::Object(favorite)) => Some(Vehicle::from_object(favorite)?),
            _ => None,
        };
        Ok(Garage {
            vehicles: object.array_field("vehicles")?,
            favorite,
        })
    }
}

// -----------------------------------------------------------------------------
// Helpers

pub(super) fn mapper() -> Mapper {
    let mut types = TypeRegistry::new();
    types.register::<Garage>();

    let mut mapper = Mapper::new(types);
    mapper
        .register([
            Registration::of::<Vehicle>()
                .with_child::<Car>("car")
                .with_child::<Bike>("bike"),
            Registration::of::<Car>().with_child::<SportsCar>("sport"),
        ])
        .unwrap();
    mapper
}

pub(super) fn json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

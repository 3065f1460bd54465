use alloc::boxed::Box;
use core::any::Any;

use crate::info::TypeRef;
use crate::inherit::{RegisterError, Registration, Registry, RegistryConfig, ResolveError};
use crate::mapper::MapError;
use crate::object::{DynamicObject, FromObject};
use crate::registry::{TypeRegistry, TypeTraitFromObject};
use crate::value::{Map, Value};

// -----------------------------------------------------------------------------
// Mapper

/// Deserializes raw [`Value`]s into [`DynamicObject`]s of resolved types.
///
/// Owns the [`TypeRegistry`] it reads metadata from and the [`Registry`] of
/// polymorphic registrations.
///
/// # Examples
///
/// ```
/// use pm_reflect::info::{ParentOptions, TypeRef};
/// use pm_reflect::registry::{TypeMeta, TypeRegistry};
/// use pm_reflect::{Mapper, Registration, Value};
///
/// struct Vehicle;
/// struct Car;
///
/// let mut types = TypeRegistry::new();
/// types.try_insert_type_meta(TypeMeta::of::<Vehicle>().with_parent_options(ParentOptions::new("type")));
/// types.try_insert_type_meta(TypeMeta::of::<Car>().with_extends::<Vehicle>());
///
/// let mut mapper = Mapper::new(types);
/// mapper
///     .register([Registration::of::<Vehicle>().with_child::<Car>("car")])
///     .unwrap();
///
/// let data = Value::from_iter([("type", "car"), ("color", "red")]);
/// let car = mapper.deserialize_object(&data, TypeRef::of::<Vehicle>()).unwrap();
///
/// assert!(car.is::<Car>());
/// assert_eq!(car.str_field("color").unwrap(), "red");
/// assert_eq!(mapper.serialize(&car), data);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    pub(super) types: TypeRegistry,
    pub(super) registry: Registry,
}

impl Mapper {
    /// Creates a mapper over `types` with an empty [`Registry`].
    #[inline]
    pub fn new(types: TypeRegistry) -> Self {
        Self {
            types,
            registry: Registry::new(),
        }
    }

    /// Creates a mapper over `types` with an empty, configured [`Registry`].
    #[inline]
    pub fn with_config(types: TypeRegistry, config: RegistryConfig) -> Self {
        Self {
            types,
            registry: Registry::with_config(config),
        }
    }

    #[inline]
    pub const fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Returns the type registry, to register more types.
    ///
    /// Existing metadata is never replaced, see [`TypeRegistry::try_insert_type_meta`].
    #[inline]
    pub fn types_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    #[inline]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Adds registrations, validated against the mapper's types.
    ///
    /// See [`Registry::add`].
    pub fn register(
        &mut self,
        registrations: impl IntoIterator<Item = Registration>,
    ) -> Result<(), RegisterError> {
        self.registry.add(&self.types, registrations)
    }

    /// Resolves the concrete type of `data` for `base`.
    ///
    /// See [`Registry::resolve`].
    #[inline]
    pub fn resolve(&self, base: TypeRef, data: &Map) -> Result<TypeRef, ResolveError> {
        self.registry.resolve(&self.types, base, data)
    }

    // -------------------------------------------------------------------------
    // construct

    /// Builds the concrete value of an object through the
    /// [`TypeTraitFromObject`] registered for its type.
    ///
    /// The returned box holds the object's own type, not the base type it
    /// was deserialized as.
    pub fn construct(&self, object: &DynamicObject) -> Result<Box<dyn Any>, MapError> {
        let ty = object.ty();
        let Some(from_object) = self.types.get_type_trait::<TypeTraitFromObject>(ty.id()) else {
            return Err(MapError::NotConstructible { ty });
        };
        Ok(from_object.from_object(object)?)
    }

    /// Deserializes an object of `base` and builds its concrete value.
    pub fn deserialize_boxed(&self, data: &Value, base: TypeRef) -> Result<Box<dyn Any>, MapError> {
        let object = self.deserialize_object(data, base)?;
        self.construct(&object)
    }

    /// Deserializes an object using `T` as base type, then builds a `T` from it.
    ///
    /// A polymorphic `T` usually is an enum dispatching on the resolved type,
    /// see [`FromObject`].
    pub fn deserialize_into<T: FromObject>(&self, data: &Value) -> Result<T, MapError> {
        let object = self.deserialize_object(data, TypeRef::of::<T>())?;
        Ok(T::from_object(&object)?)
    }
}

// -----------------------------------------------------------------------------
// Tests

use alloc::boxed::Box;
use core::any::Any;

use crate::object::{DynamicObject, FromObject, FromObjectError};
use crate::registry::FromType;

/// A function pointer container building a concrete value from a [`DynamicObject`].
///
/// While [`FromObject`] allows conversion when the target type is statically known,
/// this container is looked up by the object's resolved type at runtime.
/// It is what [`Mapper::construct`] uses.
///
/// # Examples
///
/// ```
/// use pm_reflect::info::TypeRef;
/// use pm_reflect::object::{DynamicObject, FromObject, FromObjectError};
/// use pm_reflect::registry::{FromType, TypeTraitFromObject};
///
/// struct Car {
///     wheels: i64,
/// }
///
/// impl FromObject for Car {
///     fn from_object(object: &DynamicObject) -> Result<Self, FromObjectError> {
///         object.expect_type::<Self>()?;
///         Ok(Car { wheels: object.i64_field("wheels")? })
///     }
/// }
///
/// let mut object = DynamicObject::new(TypeRef::of::<Car>());
/// object.insert_value("wheels", 4);
///
/// let from_object: TypeTraitFromObject = FromType::<Car>::from_type();
/// let car = from_object.from_object(&object).unwrap();
///
/// assert_eq!(car.downcast::<Car>().unwrap().wheels, 4);
/// ```
///
/// [`Mapper::construct`]: crate::mapper::Mapper::construct
#[derive(Clone)]
pub struct TypeTraitFromObject {
    func: fn(&DynamicObject) -> Result<Box<dyn Any>, FromObjectError>,
}

impl TypeTraitFromObject {
    /// Calls `T::from_object` for the type this container was created from.
    #[inline(always)]
    pub fn from_object(&self, object: &DynamicObject) -> Result<Box<dyn Any>, FromObjectError> {
        (self.func)(object)
    }
}

impl<T: FromObject> FromType<T> for TypeTraitFromObject {
    fn from_type() -> Self {
        Self {
            func: |object| Ok(Box::new(T::from_object(object)?)),
        }
    }
}

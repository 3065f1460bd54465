use crate::object::{DynamicObject, FromObjectError};

/// Builds a typed value from a [`DynamicObject`].
///
/// Implementations usually check the object's type with
/// [`DynamicObject::expect_type`] and read fields with the typed accessors.
///
/// A polymorphic family is naturally an enum whose implementation dispatches
/// on [`DynamicObject::is`]:
///
/// ```
/// use pm_reflect::object::{DynamicObject, FromObject, FromObjectError};
///
/// struct Car;
/// struct Bike;
///
/// enum Vehicle {
///     Car,
///     Bike,
/// }
///
/// impl FromObject for Vehicle {
///     fn from_object(object: &DynamicObject) -> Result<Self, FromObjectError> {
///         if object.is::<Car>() {
///             Ok(Vehicle::Car)
///         } else {
///             object.expect_type::<Bike>()?;
///             Ok(Vehicle::Bike)
///         }
///     }
/// }
/// ```
pub trait FromObject: Sized + 'static {
    /// Builds `Self` from the given object.
    fn from_object(object: &DynamicObject) -> Result<Self, FromObjectError>;
}

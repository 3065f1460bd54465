/// Trait used to generate a [`TypeTrait`] for the type `T`.
///
/// # Example
///
/// ```
/// use pm_reflect::registry::{FromType, TypeMeta, TypeTraitFromObject};
/// use pm_reflect::object::{DynamicObject, FromObject, FromObjectError};
///
/// struct Marker;
///
/// impl FromObject for Marker {
///     fn from_object(object: &DynamicObject) -> Result<Self, FromObjectError> {
///         object.expect_type::<Self>()?;
///         Ok(Marker)
///     }
/// }
///
/// let meta = TypeMeta::of::<Marker>()
///     .with_trait::<TypeTraitFromObject>(FromType::<Marker>::from_type());
///
/// assert!(meta.has_trait::<TypeTraitFromObject>());
/// ```
///
/// [`TypeTrait`]: crate::registry::TypeTrait
pub trait FromType<T> {
    fn from_type() -> Self;
}

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{Any, TypeId};

use pm_utils::TypeIdMap;

use crate::info::{FieldMeta, ParentOptions, TypeRef};
use crate::registry::{TypeRegistry, TypeTrait};

// -----------------------------------------------------------------------------
// TypeMeta

/// Static facts about one type, registered into the [`TypeRegistry`].
///
/// - `extends`: the type this type inherits from. Inheritance is declared,
///   not inferred; it is what [`Registration`] validation checks children against.
/// - `parent_options`: present only on polymorphic types.
/// - `fields`: renaming, omission and nested type hints, in declaration order.
/// - a [`TypeTrait`] table for optional capabilities.
///
/// # Example
///
/// ```
/// use pm_reflect::info::{FieldMeta, ParentOptions, TypeHint};
/// use pm_reflect::registry::TypeMeta;
///
/// struct Vehicle;
/// struct Car;
/// struct Engine;
///
/// let vehicle = TypeMeta::of::<Vehicle>()
///     .with_parent_options(ParentOptions::new("type"))
///     .with_field(FieldMeta::new("engine").with_hint(TypeHint::of::<Engine>()));
///
/// let car = TypeMeta::of::<Car>().with_extends::<Vehicle>();
///
/// assert!(vehicle.parent_options().is_some());
/// assert!(car.extends().unwrap().is::<Vehicle>());
/// assert_eq!(vehicle.field("engine").and_then(FieldMeta::hint), Some(TypeHint::of::<Engine>()));
/// ```
///
/// [`Registration`]: crate::inherit::Registration
pub struct TypeMeta {
    ty: TypeRef,
    extends: Option<TypeRef>,
    parent_options: Option<ParentOptions>,
    fields: Vec<FieldMeta>,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl TypeMeta {
    /// Create a empty [`TypeMeta`] for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(TypeRef::of::<T>())
    }

    /// Create a empty [`TypeMeta`] for the given type.
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            extends: None,
            parent_options: None,
            fields: Vec::new(),
            trait_table: TypeIdMap::new(),
        }
    }

    /// Declares that this type inherits from `P`.
    #[inline]
    pub fn with_extends<P: ?Sized + 'static>(self) -> Self {
        self.with_extends_type(TypeRef::of::<P>())
    }

    /// Declares that this type inherits from `parent`.
    #[inline]
    pub fn with_extends_type(mut self, parent: TypeRef) -> Self {
        self.extends = Some(parent);
        self
    }

    /// Makes this type polymorphic.
    #[inline]
    pub fn with_parent_options(mut self, options: ParentOptions) -> Self {
        self.parent_options = Some(options);
        self
    }

    /// Adds a field declaration.
    ///
    /// A later declaration of the same field name replaces the earlier one.
    pub fn with_field(mut self, field: FieldMeta) -> Self {
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(slot) => *slot = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Adds a [`TypeTrait`].
    #[inline]
    pub fn with_trait<T: TypeTrait>(mut self, data: T) -> Self {
        self.insert_trait(data);
        self
    }

    /// Returns the described type.
    #[inline(always)]
    pub const fn ty(&self) -> TypeRef {
        self.ty
    }

    /// Returns the [`TypeId`] of the described type.
    #[inline(always)]
    pub const fn type_id(&self) -> TypeId {
        self.ty.id()
    }

    /// Returns the type this one inherits from, if declared.
    #[inline]
    pub const fn extends(&self) -> Option<TypeRef> {
        self.extends
    }

    /// Returns the discriminator configuration, if the type is polymorphic.
    #[inline]
    pub const fn parent_options(&self) -> Option<&ParentOptions> {
        self.parent_options.as_ref()
    }

    /// Returns the field declarations of this type only, in declaration order.
    ///
    /// See [`TypeMetadata::fields`](crate::registry::TypeMetadata::fields)
    /// for the declarations inherited through `extends`.
    #[inline]
    pub fn fields(&self) -> &[FieldMeta] {
        &self.fields
    }

    /// Returns the declaration of the named field on this type only.
    pub fn field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Insert a new [`TypeTrait`], replacing one of the same type.
    #[inline]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.trait_table.insert(TypeId::of::<T>(), Box::new(data));
    }

    /// Get a [`TypeTrait`] reference.
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        let data: &dyn Any = &**self.trait_table.get(&TypeId::of::<T>())?;
        data.downcast_ref::<T>()
    }

    /// Return true if the specific [`TypeTrait`] exists.
    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    /// Return the number of [`TypeTrait`]s.
    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }
}

impl Clone for TypeMeta {
    fn clone(&self) -> Self {
        let mut trait_table = TypeIdMap::with_capacity(self.trait_len());
        for (id, type_trait) in self.trait_table.iter() {
            trait_table.insert(*id, (**type_trait).clone_type_trait());
        }

        Self {
            ty: self.ty,
            extends: self.extends,
            parent_options: self.parent_options.clone(),
            fields: self.fields.clone(),
            trait_table,
        }
    }
}

impl core::fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeMeta")
            .field("ty", &self.ty)
            .field("extends", &self.extends)
            .field("parent_options", &self.parent_options)
            .field("fields", &self.fields)
            .field("trait_len", &self.trait_len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// A trait which allows a type to generate its [`TypeMeta`]
/// for registration into the [`TypeRegistry`].
///
/// # Example
///
/// ```
/// use pm_reflect::info::{FieldMeta, ParentOptions, TypeHint};
/// use pm_reflect::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
///
/// struct Garage;
/// struct Vehicle;
///
/// impl GetTypeMeta for Vehicle {
///     fn get_type_meta() -> TypeMeta {
///         TypeMeta::of::<Self>().with_parent_options(ParentOptions::new("type"))
///     }
/// }
///
/// impl GetTypeMeta for Garage {
///     fn get_type_meta() -> TypeMeta {
///         TypeMeta::of::<Self>()
///             .with_field(FieldMeta::new("vehicles").with_hint(TypeHint::array_of::<Vehicle>()))
///     }
///
///     fn register_dependencies(registry: &mut TypeRegistry) {
///         registry.register::<Vehicle>();
///     }
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Garage>();
///
/// assert!(registry.contains_type::<Vehicle>());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `GetTypeMeta` so cannot provide type registration information",
    note = "consider implementing `GetTypeMeta` for `{Self}` with `TypeMeta::of::<Self>()`"
)]
pub trait GetTypeMeta: 'static {
    /// Returns the [`TypeMeta`] for this type.
    fn get_type_meta() -> TypeMeta;

    /// Registers other types needed by this type,
    /// such as the type it extends and the types of hinted fields.
    fn register_dependencies(_registry: &mut TypeRegistry) {}
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::TypeMeta;
    use crate::info::FieldMeta;

    #[derive(Clone)]
    struct Label(String);

    struct Sample;

    #[test]
    fn trait_table() {
        let mut meta = TypeMeta::of::<Sample>();
        assert!(meta.get_trait::<Label>().is_none());

        meta.insert_trait(Label("first".into()));
        meta.insert_trait(Label("second".into()));
        assert_eq!(meta.trait_len(), 1);
        assert_eq!(meta.get_trait::<Label>().unwrap().0, "second");

        let cloned = meta.clone();
        assert_eq!(cloned.get_trait::<Label>().unwrap().0, "second");
    }

    #[test]
    fn later_field_declaration_wins() {
        let meta = TypeMeta::of::<Sample>()
            .with_field(FieldMeta::new("a"))
            .with_field(FieldMeta::new("b"))
            .with_field(FieldMeta::new("a").transient());

        assert_eq!(meta.fields().len(), 2);
        assert_eq!(meta.fields()[0].name(), "a");
        assert!(meta.field("a").unwrap().is_transient());
    }
}

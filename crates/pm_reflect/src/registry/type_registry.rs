use core::any::TypeId;

use pm_utils::TypeIdMap;
use pm_utils::hash::{HashMap, HashSet};

use crate::registry::{GetTypeMeta, TypeMeta, TypeTrait};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The store of [`TypeMeta`]s.
///
/// [Registering] a type inserts its [`TypeMeta`], generated by the type's
/// [`GetTypeMeta`] implementation. Metadata is immutable once attached:
/// registering the same type again is a no-op.
///
/// Types can be looked up by [`TypeId`], by full type path and by short type
/// name. Short names shared by several registered types are ambiguous and
/// never resolve.
///
/// # Example
///
/// ```
/// use pm_reflect::info::ParentOptions;
/// use pm_reflect::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
///
/// struct Vehicle;
///
/// impl GetTypeMeta for Vehicle {
///     fn get_type_meta() -> TypeMeta {
///         TypeMeta::of::<Self>().with_parent_options(ParentOptions::new("type"))
///     }
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Vehicle>();
///
/// let meta = registry.get_with_type_name("Vehicle").unwrap();
/// assert_eq!(meta.parent_options().unwrap().discriminator_field(), "type");
/// ```
///
/// [Registering]: TypeRegistry::register
#[derive(Clone, Default)]
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl TypeRegistry {
    /// Create an empty [`TypeRegistry`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let ty = type_meta.ty();
        let type_name = ty.name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, ty.id());
            }
        }

        type_path_to_id.insert(ty.path(), ty.id());
    }

    /// Inserts the given [`TypeMeta`] if its type is not registered yet.
    ///
    /// Returns `false`, leaving the registry unchanged, if it is.
    ///
    /// This method will _not_ register type dependencies.
    /// Use [`register`](Self::register) to register a type with its dependencies.
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        self.type_meta_table.try_insert(type_meta.type_id(), || {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            type_meta
        })
    }

    /// Registers the type `T` if it has not been registered already.
    ///
    /// This also registers the type dependencies declared by
    /// [`GetTypeMeta::register_dependencies`], only the first time `T` is registered.
    ///
    /// Returns `true` if `T` was newly registered.
    pub fn register<T: GetTypeMeta>(&mut self) -> bool {
        let added = self
            .type_meta_table
            .try_insert(TypeId::of::<T>(), T::get_type_meta);
        if added {
            if let Some(meta) = self.type_meta_table.get(&TypeId::of::<T>()) {
                Self::add_new_type_indices(
                    meta,
                    &mut self.type_path_to_id,
                    &mut self.type_name_to_id,
                    &mut self.ambiguous_names,
                );
            }
            T::register_dependencies(self);
        }
        added
    }

    /// Whether the type with given [`TypeId`] has been registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Whether `T` has been registered.
    #[inline]
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.type_meta_table.contains_type::<T>()
    }

    /// Returns the [`TypeMeta`] of the type with the given [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns the [`TypeMeta`] of the type with the given full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        self.type_path_to_id
            .get(type_path)
            .and_then(|id| self.get(*id))
    }

    /// Returns the [`TypeMeta`] of the type with the given short type name.
    ///
    /// Returns `None` if the name is ambiguous.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        self.type_name_to_id
            .get(type_name)
            .and_then(|id| self.get(*id))
    }

    /// Returns `true` if the given short type name matches multiple registered types.
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Returns the [`TypeTrait`] `T` of the type with the given [`TypeId`].
    pub fn get_type_trait<T: TypeTrait>(&self, type_id: TypeId) -> Option<&T> {
        self.get(type_id).and_then(TypeMeta::get_trait::<T>)
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    /// Returns an iterator over the registered [`TypeMeta`]s, in arbitrary order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }
}

impl core::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

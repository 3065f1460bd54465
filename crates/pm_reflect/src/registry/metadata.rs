use alloc::vec::Vec;

use crate::info::{FieldMeta, ParentOptions, TypeRef};
use crate::registry::{TypeMeta, TypeRegistry};

// -----------------------------------------------------------------------------
// TypeMetadata

/// Read-only access to per-type metadata.
///
/// This is the capability consumed by the [`Registry`] and the [`Mapper`].
/// Only [`type_meta`](Self::type_meta) and [`type_count`](Self::type_count)
/// are required; everything else is derived from them.
///
/// `extends` chains are walked at most `type_count` steps, so a cyclic
/// declaration cannot loop forever.
///
/// [`Registry`]: crate::inherit::Registry
/// [`Mapper`]: crate::mapper::Mapper
pub trait TypeMetadata {
    /// Returns the metadata attached to `ty`, if any.
    fn type_meta(&self, ty: TypeRef) -> Option<&TypeMeta>;

    /// Returns the number of types with metadata.
    fn type_count(&self) -> usize;

    /// Returns the discriminator configuration declared on `ty` itself.
    ///
    /// Options are never inherited from an ancestor.
    fn parent_options(&self, ty: TypeRef) -> Option<&ParentOptions> {
        self.type_meta(ty).and_then(TypeMeta::parent_options)
    }

    /// Returns `true` if `child` declares `ancestor` as a direct or transitive
    /// parent through `extends` links. A type never inherits from itself.
    fn inherits_from(&self, child: TypeRef, ancestor: TypeRef) -> bool {
        let mut current = child;
        for _ in 0..self.type_count() {
            match self.type_meta(current).and_then(TypeMeta::extends) {
                Some(parent) if parent == ancestor => return true,
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }

    /// Returns the `extends` chain starting at `ty` itself, nearest first.
    fn lineage(&self, ty: TypeRef) -> Vec<&TypeMeta> {
        let mut chain = Vec::new();
        let mut current = Some(ty);
        while let Some(ty) = current {
            if chain.len() >= self.type_count() {
                break;
            }
            let Some(meta) = self.type_meta(ty) else {
                break;
            };
            chain.push(meta);
            current = meta.extends();
        }
        chain
    }

    /// Returns the declaration of the field `name` on `ty`, or on the nearest
    /// ancestor declaring it.
    fn field_meta(&self, ty: TypeRef, name: &str) -> Option<&FieldMeta> {
        self.lineage(ty).into_iter().find_map(|meta| meta.field(name))
    }

    /// Returns every field declaration visible on `ty`: its own first, then
    /// inherited ones not shadowed by a nearer declaration.
    fn fields(&self, ty: TypeRef) -> Vec<&FieldMeta> {
        let mut fields: Vec<&FieldMeta> = Vec::new();
        for meta in self.lineage(ty) {
            for field in meta.fields() {
                if !fields.iter().any(|f| f.name() == field.name()) {
                    fields.push(field);
                }
            }
        }
        fields
    }
}

impl TypeMetadata for TypeRegistry {
    #[inline]
    fn type_meta(&self, ty: TypeRef) -> Option<&TypeMeta> {
        self.get(ty.id())
    }

    #[inline]
    fn type_count(&self) -> usize {
        self.len()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeMetadata;
    use crate::info::{FieldMeta, ParentOptions, TypeRef};
    use crate::registry::{TypeMeta, TypeRegistry};

    struct Animal;
    struct Dog;
    struct Puppy;
    struct Rock;
    struct Loop1;
    struct Loop2;

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.try_insert_type_meta(
            TypeMeta::of::<Animal>()
                .with_parent_options(ParentOptions::new("species"))
                .with_field(FieldMeta::new("name").with_name("n"))
                .with_field(FieldMeta::new("legs")),
        );
        registry.try_insert_type_meta(
            TypeMeta::of::<Dog>()
                .with_extends::<Animal>()
                .with_field(FieldMeta::new("name").with_name("dog_name")),
        );
        registry.try_insert_type_meta(TypeMeta::of::<Puppy>().with_extends::<Dog>());
        registry.try_insert_type_meta(TypeMeta::of::<Rock>());
        registry.try_insert_type_meta(TypeMeta::of::<Loop1>().with_extends::<Loop2>());
        registry.try_insert_type_meta(TypeMeta::of::<Loop2>().with_extends::<Loop1>());
        registry
    }

    #[test]
    fn inheritance_is_transitive_and_strict() {
        let registry = registry();
        let animal = TypeRef::of::<Animal>();

        assert!(registry.inherits_from(TypeRef::of::<Dog>(), animal));
        assert!(registry.inherits_from(TypeRef::of::<Puppy>(), animal));
        assert!(!registry.inherits_from(animal, animal));
        assert!(!registry.inherits_from(animal, TypeRef::of::<Dog>()));
        assert!(!registry.inherits_from(TypeRef::of::<Rock>(), animal));
        assert!(!registry.inherits_from(TypeRef::of::<u8>(), animal));
    }

    #[test]
    fn cyclic_extends_terminates() {
        let registry = registry();
        assert!(!registry.inherits_from(TypeRef::of::<Loop1>(), TypeRef::of::<Animal>()));
        assert!(registry.lineage(TypeRef::of::<Loop1>()).len() <= registry.type_count());
    }

    #[test]
    fn parent_options_are_not_inherited() {
        let registry = registry();
        assert!(registry.parent_options(TypeRef::of::<Animal>()).is_some());
        assert!(registry.parent_options(TypeRef::of::<Dog>()).is_none());
    }

    #[test]
    fn fields_shadow_ancestors() {
        let registry = registry();
        let puppy = TypeRef::of::<Puppy>();

        let name = registry.field_meta(puppy, "name").unwrap();
        assert_eq!(name.deserialize_name(), "dog_name");
        assert!(registry.field_meta(puppy, "legs").is_some());
        assert!(registry.field_meta(puppy, "tail").is_none());

        let names: alloc::vec::Vec<_> = registry.fields(puppy).iter().map(|f| f.name()).collect();
        assert_eq!(names, ["name", "legs"]);
    }
}

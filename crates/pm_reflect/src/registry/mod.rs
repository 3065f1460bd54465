//! The type metadata store.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: static facts about one type: its [`TypeRef`], the type it
//!   extends, its [`ParentOptions`], its [`FieldMeta`]s and a [`TypeTrait`] table.
//! - [`GetTypeMeta`]: a trait provide a function to create a `TypeMeta` from a type.
//! - [`TypeRegistry`]: a container for storing and querying `TypeMeta`s.
//! - [`TypeMetadata`]: the read-only capability the [`Registry`] and the
//!   [`Mapper`] consume; implemented by `TypeRegistry`.
//! - [`TypeTrait`] and [`FromType`]: optional per-type capabilities.
//!     - [`TypeTraitFromObject`]: build a concrete value from a [`DynamicObject`].
//!
//! Metadata is immutable once attached: registering a type a second time
//! keeps the first `TypeMeta`.
//!
//! [`TypeRef`]: crate::info::TypeRef
//! [`ParentOptions`]: crate::info::ParentOptions
//! [`FieldMeta`]: crate::info::FieldMeta
//! [`Registry`]: crate::inherit::Registry
//! [`Mapper`]: crate::mapper::Mapper
//! [`DynamicObject`]: crate::object::DynamicObject

// -----------------------------------------------------------------------------
// Modules

mod from_type;
mod metadata;
mod traits;
mod type_meta;
mod type_registry;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use from_type::FromType;
pub use metadata::TypeMetadata;
pub use traits::TypeTraitFromObject;
pub use type_meta::{GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
pub use type_trait::TypeTrait;

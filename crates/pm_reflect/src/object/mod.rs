//! Built instances of resolved types.
//!
//! The [`Mapper`] produces a [`DynamicObject`] for every deserialized object:
//! the concrete [`TypeRef`] picked by the [`Registry`] plus the bound fields.
//! Types implementing [`FromObject`] can then be built from it.
//!
//! [`Mapper`]: crate::mapper::Mapper
//! [`Registry`]: crate::inherit::Registry
//! [`TypeRef`]: crate::info::TypeRef

// -----------------------------------------------------------------------------
// Modules

mod dynamic_object;
mod error;
mod field_value;
mod from_object;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic_object::DynamicObject;
pub use error::FromObjectError;
pub use field_value::FieldValue;
pub use from_object::FromObject;

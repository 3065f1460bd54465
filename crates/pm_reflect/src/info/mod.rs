//! Static, per-type facts.
//!
//! - [`TypeRef`]: identity of a Rust type, used as the key everywhere.
//! - [`ParentOptions`]: the discriminator configuration of a polymorphic type.
//! - [`FieldMeta`]: renaming, omission and nested type hints of one field.
//! - [`TypeHint`]: an object or array target for deserialization.

// -----------------------------------------------------------------------------
// Modules

mod field_meta;
mod parent_options;
mod type_ref;

// -----------------------------------------------------------------------------
// Exports

pub use field_meta::{FieldMeta, TypeHint};
pub use parent_options::ParentOptions;
pub use type_ref::TypeRef;

//! Binding raw data to resolved types, and back.
//!
//! The [`Mapper`] pairs a [`TypeRegistry`] with a [`Registry`]:
//!
//! - `deserialize*` resolves the concrete type of every object through the
//!   registry, then binds its fields, recursing into fields with a
//!   [`TypeHint`];
//! - `serialize` applies serialize-side names and omits transient fields;
//! - `construct` and `deserialize_into` turn a [`DynamicObject`] into a
//!   concrete Rust value.
//!
//! [`TypeRegistry`]: crate::registry::TypeRegistry
//! [`Registry`]: crate::inherit::Registry
//! [`TypeHint`]: crate::info::TypeHint
//! [`DynamicObject`]: crate::object::DynamicObject

// -----------------------------------------------------------------------------
// Modules

mod base;
mod de;
mod error;
mod ser;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Exports

pub use base::Mapper;
pub use error::MapError;
